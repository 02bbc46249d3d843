//! World generation
//!
//! Builds the locations, wires them into a random spanning tree and scatters
//! the items. Every step draws from the caller's `GameRng`.

use std::collections::VecDeque;

use super::{GameMap, Location, LocationId, names};
use crate::config::GameConfig;
use crate::error::SetupError;
use crate::object::Item;
use crate::rng::GameRng;

/// `count` unconnected locations with distinct names
pub fn create_locations(count: usize, rng: &mut GameRng) -> Result<Vec<Location>, SetupError> {
    let names = names::location_names(count, rng)?;
    Ok(names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Location::new(LocationId(i), name))
        .collect())
}

/// Connect every location of `map` into one tree rooted at the first.
///
/// Each step attaches the next unconnected location (in creation order) to a
/// random already-connected location that still has a free exit, through a
/// random free direction.
pub fn connect_locations(map: &mut GameMap, rng: &mut GameRng) -> Result<(), SetupError> {
    if map.is_empty() {
        return Ok(());
    }

    let mut connected = vec![LocationId(0)];
    let mut unconnected: VecDeque<LocationId> = (1..map.len()).map(LocationId).collect();

    while !unconnected.is_empty() {
        let available: Vec<LocationId> = connected
            .iter()
            .copied()
            .filter(|&id| map.locations[id.0].has_free_exit())
            .collect();

        let Some(&anchor) = rng.choose(&available) else {
            log::warn!(
                "no connected location has a free exit, {} left stranded",
                unconnected.len()
            );
            return Err(SetupError::Unconnected {
                stranded: unconnected.len(),
            });
        };
        let free = map.locations[anchor.0].free_directions();
        let (Some(&direction), Some(next)) = (rng.choose(&free), unconnected.pop_front()) else {
            break;
        };

        map.connect(anchor, direction, next)?;
        log::debug!(
            "linked {} --{}--> {}",
            map.locations[anchor.0].name,
            direction,
            map.locations[next.0].name
        );
        connected.push(next);
    }

    Ok(())
}

/// `count` items with distinct generated names
pub fn generate_item_names(count: usize, rng: &mut GameRng) -> Result<Vec<Item>, SetupError> {
    Ok(names::item_names(count, rng)?
        .into_iter()
        .map(Item::new)
        .collect())
}

/// Drop each item into a uniformly random location.
///
/// Fails without placing anything when there are items but no locations.
pub fn distribute_items(
    map: &mut GameMap,
    items: Vec<Item>,
    rng: &mut GameRng,
) -> Result<(), SetupError> {
    if map.is_empty() && !items.is_empty() {
        return Err(SetupError::NoLocations);
    }
    for item in items {
        let Some(index) = rng.choose_index(map.len()) else {
            return Err(SetupError::NoLocations);
        };
        log::debug!("placed {} at {}", item.name, map.locations[index].name);
        map.locations[index].items.push(item);
    }
    Ok(())
}

/// Builds a complete `GameMap` from a `GameConfig`
#[derive(Debug, Clone, Copy)]
pub struct MapBuilder {
    num_locations: usize,
    num_items: usize,
}

impl MapBuilder {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            num_locations: config.num_locations,
            num_items: config.num_items,
        }
    }

    pub fn build(&self, rng: &mut GameRng) -> Result<GameMap, SetupError> {
        if self.num_locations == 0 {
            return Err(SetupError::NoLocations);
        }

        let mut map = GameMap::new(create_locations(self.num_locations, rng)?);
        connect_locations(&mut map, rng)?;

        let items = generate_item_names(self.num_items, rng)?;
        distribute_items(&mut map, items, rng)?;

        log::info!(
            "built {} locations holding {} items, start at {}",
            map.len(),
            map.item_count(),
            map.locations[map.start.0].name
        );
        Ok(map)
    }
}
