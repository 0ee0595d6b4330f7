//! Detective Quest: The Mansion Mystery
//!
//! Explore the mansion, collect clues and find out who did it.

use clap::Parser;
use detective_quest::config::{Config, UiMode};
use detective_quest::game::io::ScriptedIo;
use detective_quest::game::{narrative, Game, InvestigationReport};
use detective_quest::tui::{self, ConsoleIo, TuiIo};
use detective_quest::Result;
use std::io::{self, stdout};

fn main() -> Result<()> {
    let config = Config::parse();
    config.init_logging()?;

    let mut game = Game::new();

    match config.ui_mode() {
        UiMode::Tui => {
            let report = play_tui(&mut game)?;
            print_report(&report, config.json)
        }
        UiMode::Console => {
            println!("{}", narrative::TITLE);
            println!("{}", narrative::INTRO);
            let mut io = ConsoleIo::new(io::stdin().lock(), stdout());
            let report = game.play(&mut io)?;
            // the console already showed the text report with the verdict
            if config.json {
                print_json(&report)?;
            }
            Ok(())
        }
        UiMode::Script => {
            let script = config.script.as_deref().unwrap_or_default();
            let mut io = ScriptedIo::from_script(script)?;
            let report = game.play(&mut io)?;
            print_report(&report, config.json)
        }
    }
}

fn play_tui(game: &mut Game) -> Result<InvestigationReport> {
    let total = game.mansion.remaining_clues().count();
    let mut io = TuiIo::new(tui::init_terminal()?, total);

    let outcome = game.play(&mut io).and_then(|report| {
        io.finish(&report)?;
        Ok(report)
    });

    tui::restore_terminal(&mut io.terminal)?;
    outcome
}

fn print_json(report: &InvestigationReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_report(report: &InvestigationReport, json: bool) -> Result<()> {
    if json {
        print_json(report)?;
    } else {
        println!();
        for line in narrative::report_lines(report) {
            println!("{}", line);
        }
    }
    Ok(())
}
