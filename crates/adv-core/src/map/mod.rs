//! Game map
//!
//! Contains locations, directions, name generation and world building.

mod direction;
mod generation;
mod location;
mod names;

use std::collections::VecDeque;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

pub use direction::Direction;
pub use generation::{
    MapBuilder, connect_locations, create_locations, distribute_items, generate_item_names,
};
pub use location::{Location, LocationId};
pub use names::{NameKind, item_names, location_names};

use crate::EXIT_MARK;
use crate::error::MapError;

const NAME_COLUMN: usize = 30;
const ITEMS_COLUMN: usize = 35;
const RULE_WIDTH: usize = 85;

/// Every location of one game plus the spawn point
#[derive(Debug, Serialize, Deserialize)]
pub struct GameMap {
    locations: Vec<Location>,
    start: LocationId,
}

impl GameMap {
    /// Wrap already-built locations. The first one becomes the start.
    pub fn new(locations: Vec<Location>) -> Self {
        Self {
            locations,
            start: LocationId(0),
        }
    }

    pub fn start(&self) -> LocationId {
        self.start
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations.get_mut(id.0)
    }

    /// Link `from` to `to` in `direction`, and `to` back to `from`.
    ///
    /// Existing exits are never overwritten.
    pub fn connect(
        &mut self,
        from: LocationId,
        direction: Direction,
        to: LocationId,
    ) -> Result<(), MapError> {
        if from == to {
            return Err(MapError::SelfLink(from));
        }
        let a = self.location(from).ok_or(MapError::UnknownLocation(from))?;
        let b = self.location(to).ok_or(MapError::UnknownLocation(to))?;

        if a.exit(direction).is_some() {
            return Err(MapError::ExitTaken {
                location: from,
                direction,
            });
        }
        if b.exit(direction.opposite()).is_some() {
            return Err(MapError::ExitTaken {
                location: to,
                direction: direction.opposite(),
            });
        }

        self.locations[from.0].set_exit(direction, to);
        self.locations[to.0].set_exit(direction.opposite(), from);
        Ok(())
    }

    /// Ids reachable from `origin` by following exits
    pub fn reachable_from(&self, origin: LocationId) -> HashSet<LocationId> {
        let mut seen = HashSet::new();
        if self.location(origin).is_none() {
            return seen;
        }

        let mut queue = VecDeque::from([origin]);
        seen.insert(origin);
        while let Some(id) = queue.pop_front() {
            for (_, next) in self.locations[id.0].exits() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// True when every location can be reached from the start
    pub fn is_connected(&self) -> bool {
        self.reachable_from(self.start).len() == self.locations.len()
    }

    /// Items still lying around the world
    pub fn item_count(&self) -> usize {
        self.locations.iter().map(|loc| loc.items.len()).sum()
    }

    /// The full map as a fixed-width table
    pub fn table(&self) -> Vec<String> {
        let [n, s, e, w] = Direction::ALL.map(Direction::initial);
        let mut lines = vec![
            "=== GAME MAP ===".to_string(),
            format!(
                "{:<NAME_COLUMN$} | {:<ITEMS_COLUMN$} | {:^3} | {:^3} | {:^3} | {:^3}",
                "Location", "Items", n, s, e, w
            ),
            "-".repeat(RULE_WIDTH),
        ];

        for loc in &self.locations {
            let items = if loc.items.is_empty() {
                "-".to_string()
            } else {
                loc.items
                    .iter()
                    .map(|item| item.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let marks: Vec<char> = Direction::ALL
                .iter()
                .map(|&dir| if loc.exit(dir).is_some() { EXIT_MARK } else { ' ' })
                .collect();
            lines.push(format!(
                "{:<NAME_COLUMN$} | {:<ITEMS_COLUMN$} | {:^3} | {:^3} | {:^3} | {:^3}",
                loc.name, items, marks[0], marks[1], marks[2], marks[3]
            ));
        }

        lines.push("-".repeat(RULE_WIDTH));
        lines
    }
}
