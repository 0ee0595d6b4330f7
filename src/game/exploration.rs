//! Exploration state machine
//!
//! The player walks down the mansion from the entrance. Entering a room
//! picks up its clue, if it still has one. From a room with exits the
//! player picks left, right or quit; a room without exits ends the walk.

use crate::data::{ClueSet, MansionMap, RoomId};
use crate::game::io::{Choice, Notification, PlayerIo, Prompt};
use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Where the walk currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorationState {
    /// Just arrived in the room; pickup and dead-end check pending
    Entering(RoomId),
    /// Waiting for the player's choice in the room
    Choosing(RoomId),
    Exited,
}

impl ExplorationState {
    pub fn room(&self) -> Option<RoomId> {
        match self {
            ExplorationState::Entering(id) | ExplorationState::Choosing(id) => Some(*id),
            ExplorationState::Exited => None,
        }
    }

    pub fn is_exited(&self) -> bool {
        *self == ExplorationState::Exited
    }
}

/// Counters for one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationStats {
    pub rooms_visited: u32,
    pub clues_collected: u32,
    pub invalid_choices: u32,
}

/// Drives the walk. The map and the notebook are borrowed for the
/// duration and passed explicitly to every step.
pub struct ExplorationEngine<'a> {
    map: &'a mut MansionMap,
    clues: &'a mut ClueSet,
    state: ExplorationState,
    stats: ExplorationStats,
}

impl<'a> ExplorationEngine<'a> {
    /// Start at the entrance
    pub fn new(map: &'a mut MansionMap, clues: &'a mut ClueSet) -> Self {
        let start = ExplorationState::Entering(map.root());
        Self::at(map, clues, start)
    }

    /// Start from an arbitrary state.
    ///
    /// Fails with [`GameError::UnknownRoom`] if the state names a room
    /// that is not part of `map`.
    pub fn resume(
        map: &'a mut MansionMap,
        clues: &'a mut ClueSet,
        state: ExplorationState,
    ) -> Result<Self> {
        if let Some(id) = state.room() {
            if !map.contains(id) {
                return Err(GameError::UnknownRoom(format!("{:?}", id)).into());
            }
        }
        Ok(Self::at(map, clues, state))
    }

    fn at(map: &'a mut MansionMap, clues: &'a mut ClueSet, state: ExplorationState) -> Self {
        Self {
            map,
            clues,
            state,
            stats: ExplorationStats::default(),
        }
    }

    pub fn state(&self) -> ExplorationState {
        self.state
    }

    pub fn stats(&self) -> ExplorationStats {
        self.stats
    }

    /// Advance by one transition and return the new state.
    pub fn step(&mut self, io: &mut dyn PlayerIo) -> Result<ExplorationState> {
        self.state = match self.state {
            ExplorationState::Entering(id) => self.enter(id, io)?,
            ExplorationState::Choosing(id) => self.choose(id, io)?,
            ExplorationState::Exited => ExplorationState::Exited,
        };
        Ok(self.state)
    }

    /// Step until the player leaves or hits a dead end.
    pub fn run(mut self, io: &mut dyn PlayerIo) -> Result<ExplorationStats> {
        while !self.state.is_exited() {
            self.step(io)?;
        }
        Ok(self.stats)
    }

    fn enter(&mut self, id: RoomId, io: &mut dyn PlayerIo) -> Result<ExplorationState> {
        let name = self.map.room(id).name.clone();
        debug!(room = %name, "entered room");
        self.stats.rooms_visited += 1;
        io.notify(&Notification::EnteredRoom { room: name.clone() })?;

        if let Some(clue) = self.map.take_clue(id) {
            info!(room = %name, clue = %clue, "clue collected");
            io.notify(&Notification::ClueFound {
                room: name.clone(),
                clue: clue.clone(),
            })?;
            if self.clues.insert(&clue) {
                self.stats.clues_collected += 1;
            }
        }

        if self.map.room(id).is_dead_end() {
            io.notify(&Notification::DeadEnd { room: name })?;
            return Ok(ExplorationState::Exited);
        }
        Ok(ExplorationState::Choosing(id))
    }

    fn choose(&mut self, id: RoomId, io: &mut dyn PlayerIo) -> Result<ExplorationState> {
        let room = self.map.room(id);
        let prompt = Prompt {
            room: &room.name,
            left: self.map.left_of(id).map(|r| r.name.as_str()),
            right: self.map.right_of(id).map(|r| r.name.as_str()),
        };
        let choice = io.prompt_direction_choice(&prompt)?;

        let next = match choice {
            Choice::Left => room.left(),
            Choice::Right => room.right(),
            Choice::Quit => {
                io.notify(&Notification::LeftMansion { room: room.name.clone() })?;
                return Ok(ExplorationState::Exited);
            }
            Choice::Invalid(_) => None,
        };

        match next {
            Some(child) => Ok(ExplorationState::Entering(child)),
            None => {
                warn!(room = %room.name, ?choice, "invalid choice");
                self.stats.invalid_choices += 1;
                io.notify(&Notification::InvalidChoice {
                    room: room.name.clone(),
                    choice,
                })?;
                Ok(ExplorationState::Choosing(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::io::ScriptedIo;

    #[test]
    fn walk_to_dining_room() {
        let mut map = MansionMap::build_mansion();
        let mut clues = ClueSet::new();
        let mut io = ScriptedIo::new([Choice::Left, Choice::Right]);

        let stats = ExplorationEngine::new(&mut map, &mut clues).run(&mut io).unwrap();

        assert_eq!(io.rooms_entered(), vec!["Hall de Entrada", "Biblioteca", "Sala de Jantar"]);
        assert_eq!(io.clues_found(), vec!["Relogio", "Castiçal"]);
        assert_eq!(
            io.notifications.last(),
            Some(&Notification::DeadEnd { room: "Sala de Jantar".to_string() })
        );
        assert_eq!(stats, ExplorationStats { rooms_visited: 3, clues_collected: 2, invalid_choices: 0 });
        assert_eq!(clues.iter().collect::<Vec<_>>(), vec!["Castiçal", "Relogio"]);
    }

    #[test]
    fn quitting_at_entrance_collects_nothing() {
        let mut map = MansionMap::build_mansion();
        let mut clues = ClueSet::new();
        let mut io = ScriptedIo::new([Choice::Quit]);

        ExplorationEngine::new(&mut map, &mut clues).run(&mut io).unwrap();

        assert!(clues.is_empty());
        assert_eq!(
            io.notifications.last(),
            Some(&Notification::LeftMansion { room: "Hall de Entrada".to_string() })
        );
    }

    #[test]
    fn invalid_choice_stays_in_room() {
        let mut map = MansionMap::build_mansion();
        let mut clues = ClueSet::new();
        let kitchen = map.find("Cozinha").unwrap();
        let mut io = ScriptedIo::new([Choice::Right, Choice::Invalid('x')]);

        let mut engine = ExplorationEngine::resume(&mut map, &mut clues, ExplorationState::Choosing(kitchen)).unwrap();
        assert_eq!(engine.step(&mut io).unwrap(), ExplorationState::Choosing(kitchen));
        assert_eq!(engine.step(&mut io).unwrap(), ExplorationState::Choosing(kitchen));
        assert_eq!(engine.stats().invalid_choices, 2);
        assert_eq!(
            io.notifications,
            vec![
                Notification::InvalidChoice { room: "Cozinha".to_string(), choice: Choice::Right },
                Notification::InvalidChoice { room: "Cozinha".to_string(), choice: Choice::Invalid('x') },
            ]
        );
        assert!(clues.is_empty());
    }

    #[test]
    fn reentering_room_yields_no_clue() {
        let mut map = MansionMap::build_mansion();
        let mut clues = ClueSet::new();
        let library = map.find("Biblioteca").unwrap();
        let mut io = ScriptedIo::default();

        let mut engine = ExplorationEngine::resume(&mut map, &mut clues, ExplorationState::Entering(library)).unwrap();
        engine.step(&mut io).unwrap();
        let mut engine = ExplorationEngine::resume(&mut map, &mut clues, ExplorationState::Entering(library)).unwrap();
        assert_eq!(engine.step(&mut io).unwrap(), ExplorationState::Choosing(library));

        assert_eq!(io.clues_found(), vec!["Relogio"]);
        assert_eq!(clues.len(), 1);
    }

    #[test]
    fn exited_is_terminal() {
        let mut map = MansionMap::build_mansion();
        let mut clues = ClueSet::new();
        let mut io = ScriptedIo::default();
        let mut engine = ExplorationEngine::resume(&mut map, &mut clues, ExplorationState::Exited).unwrap();
        assert_eq!(engine.step(&mut io).unwrap(), ExplorationState::Exited);
        assert!(io.notifications.is_empty());
        assert_eq!(io.prompts, 0);
    }

    #[test]
    fn resume_rejects_room_from_another_map() {
        let mansion = MansionMap::build_mansion();
        let cellar = mansion.find("Porao Escuro").unwrap();
        let mut attic = MansionMap::new("Sotao", "Corda");
        let mut clues = ClueSet::new();

        let err = ExplorationEngine::resume(&mut attic, &mut clues, ExplorationState::Entering(cellar))
            .err()
            .expect("foreign room accepted");
        assert!(matches!(err.downcast_ref::<GameError>(), Some(GameError::UnknownRoom(_))));
        assert!(ExplorationEngine::resume(&mut attic, &mut clues, ExplorationState::Choosing(cellar)).is_err());
        assert_eq!(attic.remaining_clues().collect::<Vec<_>>(), vec!["Corda"]);
    }
}
