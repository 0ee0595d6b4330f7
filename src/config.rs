//! Command-line configuration and logging setup

use crate::Result;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Which front-end drives the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UiMode {
    /// Full-screen terminal UI
    Tui,
    /// Line-by-line prompt on stdin/stdout
    Console,
    /// Replay the keys given with --script
    Script,
}

#[derive(Parser, Debug)]
#[command(name = "detective-quest")]
#[command(about = "Explore the mansion, collect clues and find the culprit", long_about = None)]
#[command(version)]
pub struct Config {
    /// Front-end to play with
    #[arg(long, value_enum, default_value_t = UiMode::Tui)]
    pub ui: UiMode,

    /// Keys to replay, e.g. "e,d,s" or "lrq" (implies --ui script)
    #[arg(long)]
    pub script: Option<String>,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Front-end after applying the --script shorthand
    pub fn ui_mode(&self) -> UiMode {
        if self.script.is_some() {
            UiMode::Script
        } else {
            self.ui
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }

    /// Install the tracing subscriber.
    ///
    /// The full-screen UI owns the terminal, so without a log file it
    /// gets no log output at all.
    pub fn init_logging(&self) -> Result<()> {
        let builder = tracing_subscriber::fmt().with_env_filter(self.env_filter());
        match (&self.log_file, self.ui_mode()) {
            (Some(path), _) => {
                let file = File::create(path)?;
                builder.with_ansi(false).with_writer(Mutex::new(file)).init();
            }
            (None, UiMode::Tui) => {}
            (None, _) => builder.with_writer(std::io::stderr).init(),
        }
        Ok(())
    }
}
