//! The player character

use serde::{Deserialize, Serialize};

use crate::map::{Direction, GameMap, Location, LocationId};
use crate::object::Item;

/// Position and belongings of the player
#[derive(Debug, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub location: LocationId,
    pub inventory: Vec<Item>,
}

impl Character {
    pub fn new(name: impl Into<String>, location: LocationId) -> Self {
        Self {
            name: name.into(),
            location,
            inventory: Vec::new(),
        }
    }

    /// Step through an exit of the current location.
    ///
    /// Returns the new location, or `None` (and stays put) when there is no
    /// exit that way.
    pub fn move_to(&mut self, map: &GameMap, direction: Direction) -> Option<LocationId> {
        let next = map.location(self.location)?.exit(direction)?;
        self.location = next;
        Some(next)
    }

    /// Move the first item called `name` from `location` into the inventory.
    pub fn take_item(&mut self, location: &mut Location, name: &str) -> Option<&Item> {
        let index = location.find_item(name)?;
        let item = location.items.remove(index);
        self.inventory.push(item);
        self.inventory.last()
    }

    /// Lines shown by the `inventory` command
    pub fn inventory_list(&self) -> Vec<String> {
        if self.inventory.is_empty() {
            return vec!["You are carrying nothing.".to_string()];
        }
        let mut lines = vec!["You have collected:".to_string()];
        lines.extend(
            self.inventory
                .iter()
                .map(|item| format!(" - {}", item.display_name())),
        );
        lines
    }
}
