//! Core game logic and state management

pub mod deduction;
pub mod exploration;
pub mod io;
pub mod narrative;

use crate::data::*;
use crate::Result;
use chrono::{DateTime, Utc};
use self::deduction::Conclusion;
use self::exploration::{ExplorationEngine, ExplorationStats};
use self::io::{Choice, Notification, PlayerIo, Prompt};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The main game state
#[derive(Debug, Clone)]
pub struct Game {
    /// Current game phase
    pub phase: GamePhase,

    /// Who each clue points to; fixed after setup
    pub registry: SuspectRegistry,

    /// The rooms, with the clues not yet picked up
    pub mansion: MansionMap,

    /// Clues the player has collected
    pub clues: ClueSet,

    /// Counters from the walk
    pub stats: ExplorationStats,

    /// Message log (for UI display)
    pub message_log: Vec<GameMessage>,
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Exploring,
    Deduction,
    Finished,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub message: String,
}

impl GameMessage {
    pub fn new(severity: Severity, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            message: message.to_string(),
        }
    }
}

/// Everything the game knows once the player is done
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestigationReport {
    /// Collected clues, alphabetical
    pub clues: Vec<String>,
    pub stats: ExplorationStats,
    pub conclusion: Conclusion,
}

impl Game {
    /// The mansion case: reference registry and map
    pub fn new() -> Self {
        Self::with_case(SuspectRegistry::reference(), MansionMap::build_mansion())
    }

    pub fn with_case(registry: SuspectRegistry, mansion: MansionMap) -> Self {
        Self {
            phase: GamePhase::Exploring,
            registry,
            mansion,
            clues: ClueSet::new(),
            stats: ExplorationStats::default(),
            message_log: Vec::new(),
        }
    }

    /// Let the player walk the mansion until they leave or get stuck.
    pub fn explore(&mut self, io: &mut dyn PlayerIo) -> Result<ExplorationStats> {
        let mut logged = Logged {
            inner: io,
            log: &mut self.message_log,
        };
        let stats = ExplorationEngine::new(&mut self.mansion, &mut self.clues).run(&mut logged)?;
        self.stats = stats;
        self.phase = GamePhase::Deduction;
        info!(
            rooms = stats.rooms_visited,
            clues = stats.clues_collected,
            "exploration finished"
        );
        Ok(stats)
    }

    /// Deduce from the collected clues. Skipped when there are none.
    pub fn conclude(&self) -> Conclusion {
        deduction::deduce(&self.clues, &self.registry)
    }

    pub fn report(&self) -> InvestigationReport {
        InvestigationReport {
            clues: self.clues.iter().map(str::to_string).collect(),
            stats: self.stats,
            conclusion: self.conclude(),
        }
    }

    /// Explore, deduce and announce the verdict.
    pub fn play(&mut self, io: &mut dyn PlayerIo) -> Result<InvestigationReport> {
        self.explore(io)?;
        let report = self.report();
        let verdict = Notification::Verdict(report.clone());
        self.log_notification(&verdict);
        io.notify(&verdict)?;
        self.phase = GamePhase::Finished;
        Ok(report)
    }

    fn log_notification(&mut self, notification: &Notification) {
        push_notification(&mut self.message_log, notification);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn push_notification(log: &mut Vec<GameMessage>, notification: &Notification) {
    let severity = narrative::severity(notification);
    for line in narrative::describe(notification) {
        log.push(GameMessage::new(severity, &line));
    }
}

/// Forwards to the player's I/O and copies notifications into the log.
struct Logged<'a> {
    inner: &'a mut dyn PlayerIo,
    log: &'a mut Vec<GameMessage>,
}

impl PlayerIo for Logged<'_> {
    fn prompt_direction_choice(&mut self, prompt: &Prompt<'_>) -> Result<Choice> {
        self.inner.prompt_direction_choice(prompt)
    }

    fn notify(&mut self, notification: &Notification) -> Result<()> {
        push_notification(self.log, notification);
        self.inner.notify(notification)
    }
}
