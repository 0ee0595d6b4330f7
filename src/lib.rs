//! Detective Quest: The Mansion Mystery
//!
//! A small detective game. You walk through a mansion, pick up the clues
//! hidden in its rooms, and the game works out who the culprit is.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Walk from the entrance hall, left or right, until you
//!   quit or reach a dead end
//! - **Clues**: Every room hides at most one clue and gives it up once
//! - **Deduction**: Each clue points at a suspect; the suspect with the most
//!   votes is guilty, a tie at the top is inconclusive
//!
//! # Architecture
//!
//! - `data` - Suspect registry (hash table), clue notebook (BST), mansion map
//! - `game` - Exploration state machine, deduction, narrative text
//! - `tui` - Terminal front-ends (ratatui app and line console)
//! - `config` - Command-line options and logging setup

pub mod config;
pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Input closed while waiting for a choice")]
    InputClosed,

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Room {0} is not part of this mansion")]
    UnknownRoom(String),

    #[error("Script has no choices: {0:?}")]
    InvalidScript(String),
}
