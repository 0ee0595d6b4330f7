//! The mansion map
//!
//! A fixed binary tree of rooms. Rooms live in an arena and refer to
//! their children by index; every room except the entrance has exactly
//! one parent.

/// Index of a room in the [`MansionMap`] that created it.
///
/// Only a map hands out ids. An id from one map is meaningless for
/// another; check it with [`MansionMap::contains`] before trusting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    /// Clue still lying in the room, if any
    hidden_clue: Option<String>,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn hidden_clue(&self) -> Option<&str> {
        self.hidden_clue.as_deref()
    }

    pub fn left(&self) -> Option<RoomId> {
        self.left
    }

    pub fn right(&self) -> Option<RoomId> {
        self.right
    }

    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MansionMap {
    rooms: Vec<Room>,
    root: RoomId,
}

impl MansionMap {
    /// A map holding only its entrance
    pub fn new(entrance: &str, hidden_clue: &str) -> Self {
        let mut map = Self {
            rooms: Vec::new(),
            root: RoomId(0),
        };
        map.root = map.create_room(entrance, hidden_clue);
        map
    }

    /// Allocate a room with no exits. An empty clue means none.
    fn create_room(&mut self, name: &str, hidden_clue: &str) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room {
            name: name.to_string(),
            hidden_clue: (!hidden_clue.is_empty()).then(|| hidden_clue.to_string()),
            left: None,
            right: None,
        });
        id
    }

    /// Create a room and hang it off `parent`.
    fn attach(&mut self, parent: RoomId, side: Side, name: &str, hidden_clue: &str) -> RoomId {
        let child = self.create_room(name, hidden_clue);
        let slot = match side {
            Side::Left => &mut self.rooms[parent.0].left,
            Side::Right => &mut self.rooms[parent.0].right,
        };
        debug_assert!(slot.is_none(), "exit already taken");
        *slot = Some(child);
        child
    }

    /// Entrance hall → library (winter garden, dining room),
    /// kitchen (dark cellar).
    pub fn build_mansion() -> Self {
        let mut map = Self::new("Hall de Entrada", "");
        let hall = map.root;

        let biblioteca = map.attach(hall, Side::Left, "Biblioteca", "Relogio");
        let cozinha = map.attach(hall, Side::Right, "Cozinha", "Faca");

        map.attach(biblioteca, Side::Left, "Jardim de Inverno", "Luvas");
        map.attach(biblioteca, Side::Right, "Sala de Jantar", "Castiçal");

        map.attach(cozinha, Side::Left, "Porao Escuro", "Veneno");

        map
    }

    pub fn root(&self) -> RoomId {
        self.root
    }

    /// Room behind `id`.
    ///
    /// Panics if `id` was not handed out by this map.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn contains(&self, id: RoomId) -> bool {
        id.0 < self.rooms.len()
    }

    pub fn left_of(&self, id: RoomId) -> Option<&Room> {
        self.room(id).left.map(|l| self.room(l))
    }

    pub fn right_of(&self, id: RoomId) -> Option<&Room> {
        self.room(id).right.map(|r| self.room(r))
    }

    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.name == name).map(RoomId)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Clues not yet picked up, in room order
    pub fn remaining_clues(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().filter_map(|r| r.hidden_clue())
    }

    /// Remove and return the room's clue. A second call yields `None`.
    pub(crate) fn take_clue(&mut self, id: RoomId) -> Option<String> {
        self.rooms[id.0].hidden_clue.take()
    }
}

impl Default for MansionMap {
    fn default() -> Self {
        Self::build_mansion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mansion_topology() {
        let map = MansionMap::build_mansion();
        assert_eq!(map.len(), 6);

        let hall = map.root();
        assert_eq!(map.room(hall).name, "Hall de Entrada");
        assert_eq!(map.room(hall).hidden_clue(), None);
        assert_eq!(map.left_of(hall).unwrap().name, "Biblioteca");
        assert_eq!(map.right_of(hall).unwrap().name, "Cozinha");

        let library = map.find("Biblioteca").unwrap();
        assert_eq!(map.left_of(library).unwrap().name, "Jardim de Inverno");
        assert_eq!(map.right_of(library).unwrap().name, "Sala de Jantar");

        let kitchen = map.find("Cozinha").unwrap();
        assert_eq!(map.left_of(kitchen).unwrap().name, "Porao Escuro");
        assert!(map.right_of(kitchen).is_none());

        let cellar = map.find("Porao Escuro").unwrap();
        assert!(map.room(cellar).is_dead_end());
    }

    #[test]
    fn every_room_has_one_parent() {
        let map = MansionMap::build_mansion();
        let mut seen = HashSet::new();
        let mut stack = vec![map.root()];
        while let Some(id) = stack.pop() {
            assert!(seen.insert(id), "room reached twice");
            let room = map.room(id);
            stack.extend(room.left());
            stack.extend(room.right());
        }
        assert_eq!(seen.len(), map.len());
    }

    #[test]
    fn clue_can_be_taken_once() {
        let mut map = MansionMap::build_mansion();
        let library = map.find("Biblioteca").unwrap();
        assert_eq!(map.take_clue(library).as_deref(), Some("Relogio"));
        assert_eq!(map.take_clue(library), None);
        assert_eq!(map.room(library).hidden_clue(), None);
        assert_eq!(map.remaining_clues().count(), 4);
    }

    #[test]
    fn empty_clue_means_none() {
        let map = MansionMap::new("Sotao", "");
        assert_eq!(map.room(map.root()).hidden_clue(), None);
        assert!(map.room(map.root()).is_dead_end());
    }

    #[test]
    fn ids_from_a_larger_map_are_not_contained() {
        let mansion = MansionMap::build_mansion();
        let cellar = mansion.find("Porao Escuro").unwrap();
        let attic = MansionMap::new("Sotao", "");
        assert!(mansion.contains(cellar));
        assert!(!attic.contains(cellar));
        assert!(attic.get(cellar).is_none());
        assert!(attic.contains(attic.root()));
    }
}
