//! Player input/output contract
//!
//! The exploration loop asks for a direction through [`PlayerIo`] and
//! reports what happens through [`Notification`]s. Front-ends in
//! `tui` implement it for a terminal; [`ScriptedIo`] replays a fixed
//! list of choices.

use crate::game::InvestigationReport;
use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A navigation choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Left,
    Right,
    Quit,
    /// Any key that is not a direction or quit
    Invalid(char),
}

impl Choice {
    /// Map a key to a choice. Accepts `e`/`d`/`s` (esquerda, direita,
    /// sair) and `l`/`r`/`q`, in either case.
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'e' | 'l' => Choice::Left,
            'd' | 'r' => Choice::Right,
            's' | 'q' => Choice::Quit,
            other => Choice::Invalid(other),
        }
    }
}

/// What the player is asked while standing in a room.
///
/// A direction is available when its room name is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt<'a> {
    pub room: &'a str,
    pub left: Option<&'a str>,
    pub right: Option<&'a str>,
}

impl Prompt<'_> {
    pub fn left_available(&self) -> bool {
        self.left.is_some()
    }

    pub fn right_available(&self) -> bool {
        self.right.is_some()
    }
}

/// Events reported to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    EnteredRoom { room: String },
    ClueFound { room: String, clue: String },
    DeadEnd { room: String },
    InvalidChoice { room: String, choice: Choice },
    LeftMansion { room: String },
    /// End of the game: collected clues and the deduction
    Verdict(InvestigationReport),
}

/// The collaborator the game talks to
pub trait PlayerIo {
    /// Block until the player picks a direction.
    fn prompt_direction_choice(&mut self, prompt: &Prompt<'_>) -> Result<Choice>;

    /// Show an event to the player.
    fn notify(&mut self, notification: &Notification) -> Result<()>;
}

/// Replays a fixed list of choices and records every notification.
///
/// Once the choices run out it answers [`Choice::Quit`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedIo {
    choices: VecDeque<Choice>,
    pub notifications: Vec<Notification>,
    pub prompts: usize,
}

impl ScriptedIo {
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            notifications: Vec::new(),
            prompts: 0,
        }
    }

    /// Parse a key script such as `"l,r,q"` or `"e d s"`.
    /// Commas and whitespace separate keys and are otherwise ignored.
    pub fn from_script(script: &str) -> Result<Self> {
        let choices: Vec<Choice> = script
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .map(Choice::from_key)
            .collect();
        if choices.is_empty() {
            return Err(GameError::InvalidScript(script.to_string()).into());
        }
        Ok(Self::new(choices))
    }

    /// Choices not yet consumed
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }

    /// Clues announced so far, in discovery order
    pub fn clues_found(&self) -> Vec<&str> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::ClueFound { clue, .. } => Some(clue.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Rooms entered so far, in order
    pub fn rooms_entered(&self) -> Vec<&str> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::EnteredRoom { room } => Some(room.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl PlayerIo for ScriptedIo {
    fn prompt_direction_choice(&mut self, _prompt: &Prompt<'_>) -> Result<Choice> {
        self.prompts += 1;
        Ok(self.choices.pop_front().unwrap_or(Choice::Quit))
    }

    fn notify(&mut self, notification: &Notification) -> Result<()> {
        self.notifications.push(notification.clone());
        Ok(())
    }
}
