//! Line console front-end
//!
//! Prints the narrative line by line and reads one key per line.

use crate::game::io::{Choice, Notification, PlayerIo, Prompt};
use crate::game::narrative;
use crate::Result;
use std::io::{BufRead, Write};
use tracing::warn;

pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> PlayerIo for ConsoleIo<R, W> {
    fn prompt_direction_choice(&mut self, prompt: &Prompt<'_>) -> Result<Choice> {
        self.write_lines(&narrative::prompt_lines(prompt))?;
        write!(self.output, "Option: ")?;
        self.output.flush()?;

        // Skip blank lines; the first non-blank character is the key.
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                warn!("input ended, leaving the mansion");
                writeln!(self.output)?;
                return Ok(Choice::Quit);
            }
            if let Some(key) = line.trim().chars().next() {
                return Ok(Choice::from_key(key));
            }
        }
    }

    fn notify(&mut self, notification: &Notification) -> Result<()> {
        if matches!(notification, Notification::EnteredRoom { .. }) {
            writeln!(self.output)?;
        }
        self.write_lines(&narrative::describe(notification))?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use std::io::Cursor;

    fn play(input: &str) -> (Game, String) {
        let mut game = Game::new();
        let mut io = ConsoleIo::new(Cursor::new(input.to_string()), Vec::new());
        game.play(&mut io).unwrap();
        let (_, out) = io.into_inner();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plays_through_stdin_lines() {
        let (game, out) = play("e\nd\n");
        assert_eq!(game.clues.len(), 2);
        assert!(out.contains("You are in: [Sala de Jantar]"));
        assert!(out.contains("[e] Left: Biblioteca"));
        assert!(out.contains("THE BUTLER"));
    }

    #[test]
    fn unknown_keys_are_invalid() {
        let (game, out) = play("x\nz\ns\n");
        assert!(game.clues.is_empty());
        assert_eq!(out.matches("Invalid path!").count(), 2);
        assert!(out.contains("('x' is not an option)"));
        assert!(out.contains(narrative::NO_EVIDENCE));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (game, out) = play("\n   \n\ne\n\n\td\n");
        assert_eq!(game.stats.invalid_choices, 0);
        assert!(!out.contains("Invalid path!"));
        assert_eq!(game.clues.iter().collect::<Vec<_>>(), vec!["Castiçal", "Relogio"]);
        // one prompt per room with exits, none repeated for the blank lines
        assert_eq!(out.matches("Option: ").count(), 2);
    }

    #[test]
    fn only_blank_lines_quit_at_end_of_input() {
        let (game, out) = play("\n\n");
        assert!(game.clues.is_empty());
        assert_eq!(out.matches("Option: ").count(), 1);
        assert!(out.contains(narrative::NO_EVIDENCE));
    }

    #[test]
    fn verdict_prints_the_full_report() {
        let (_, out) = play("d\ne\n");
        assert!(out.contains("--- END OF EXPLORATION ---"));
        assert!(out.contains("- Faca\n- Veneno\n"));
        assert!(out.contains(">> The evidence is inconclusive (tie). Keep exploring! <<"));
    }

    #[test]
    fn end_of_input_quits() {
        let (game, out) = play("d\n");
        assert_eq!(game.clues.iter().collect::<Vec<_>>(), vec!["Faca"]);
        assert!(out.contains("You leave the mansion."));
        assert!(out.contains(">> THE CULPRIT IS THE COOK (Cozinheira)! <<"));
    }
}
