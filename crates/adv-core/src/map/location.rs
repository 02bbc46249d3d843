//! Locations: the nodes of the game map

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::MAX_EXITS;
use crate::object::Item;

/// Index of a location inside its `GameMap`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationId(pub usize);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A place the player can stand in
#[derive(Debug, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub items: Vec<Item>,
    /// Neighbour per direction, indexed by `Direction::index`
    exits: [Option<LocationId>; MAX_EXITS],
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
            exits: [None; MAX_EXITS],
        }
    }

    /// Neighbour in the given direction, if any
    pub fn exit(&self, direction: Direction) -> Option<LocationId> {
        self.exits[direction.index()]
    }

    /// Connected directions with their neighbours, in N/S/E/W order
    pub fn exits(&self) -> impl Iterator<Item = (Direction, LocationId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.exit(dir).map(|id| (dir, id)))
    }

    /// Directions with no neighbour yet
    pub fn free_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.exit(dir).is_none())
            .collect()
    }

    /// Number of connected exits
    pub fn exit_count(&self) -> usize {
        self.exits.iter().flatten().count()
    }

    pub fn has_free_exit(&self) -> bool {
        self.exit_count() < MAX_EXITS
    }

    /// Raw exit write; `GameMap::connect` keeps both sides consistent.
    pub(crate) fn set_exit(&mut self, direction: Direction, target: LocationId) {
        self.exits[direction.index()] = Some(target);
    }

    /// Index of the first item whose name matches, ignoring case
    pub fn find_item(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.matches(name))
    }

    /// Lines shown by `look` and at the start of every turn
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![format!("You are at {}.", self.name)];

        if self.items.is_empty() {
            lines.push("There is nothing of interest here.".to_string());
        } else {
            lines.push("You see the following items:".to_string());
            lines.extend(self.items.iter().map(|item| format!(" - {}", item.name)));
        }

        let exits: Vec<String> = self.exits().map(|(dir, _)| dir.to_string()).collect();
        if exits.is_empty() {
            lines.push("There are no visible exits.".to_string());
        } else {
            lines.push(format!("Exits: {}", exits.join(", ")));
        }

        lines
    }
}
