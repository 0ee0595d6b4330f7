//! Data structures for the mansion
//!
//! The suspect registry, the player's clue notebook and the map of rooms.

pub mod clues;
pub mod mansion;
pub mod registry;

pub use clues::*;
pub use mansion::*;
pub use registry::*;

use serde::{Deserialize, Serialize};

/// Severity of a message shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Discovery,
    Warning,
    Verdict,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Discovery => write!(f, "CLUE"),
            Severity::Warning => write!(f, "WARN"),
            Severity::Verdict => write!(f, "VERDICT"),
        }
    }
}

/// The closed set of suspects the deduction keeps a tally for.
///
/// The registry stores suspect names as plain strings; only names that
/// match one of these categories are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suspect {
    Mordomo,
    Jardineiro,
    Cozinheira,
}

impl Suspect {
    pub const ALL: [Suspect; 3] = [Suspect::Mordomo, Suspect::Jardineiro, Suspect::Cozinheira];

    /// Registry name of the suspect
    pub fn name(&self) -> &'static str {
        match self {
            Suspect::Mordomo => "Mordomo",
            Suspect::Jardineiro => "Jardineiro",
            Suspect::Cozinheira => "Cozinheira",
        }
    }

    /// English role, used in the final announcement
    pub fn role(&self) -> &'static str {
        match self {
            Suspect::Mordomo => "the Butler",
            Suspect::Jardineiro => "the Gardener",
            Suspect::Cozinheira => "the Cook",
        }
    }

    /// Exact, case-sensitive match against a registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        Suspect::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl std::fmt::Display for Suspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
