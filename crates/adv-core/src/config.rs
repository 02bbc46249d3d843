//! Game configuration
//!
//! Everything world generation needs to know, derived from the difficulty
//! the player picks.

use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::{
    BASE_ITEM_COUNT, DEFAULT_PLAYER_NAME, ITEM_NAME_CAPACITY, LOCATION_NAME_CAPACITY,
    MAX_DIFFICULTY, MIN_DIFFICULTY,
};

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Difficulty the sizes were derived from
    pub difficulty: u32,
    pub num_locations: usize,
    pub num_items: usize,
    /// Fixed RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    pub player_name: String,
}

/// Location and item counts for a difficulty: `(D, min(floor(sqrt(D)) + 5, D))`
pub fn world_size(difficulty: u32) -> (usize, usize) {
    let locations = difficulty as usize;
    let items = (locations.isqrt() + BASE_ITEM_COUNT).min(locations);
    (locations, items)
}

impl GameConfig {
    /// Size a world from the difficulty formula
    pub fn from_difficulty(difficulty: u32) -> Result<Self, SetupError> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(SetupError::InvalidDifficulty(difficulty));
        }
        let (num_locations, num_items) = world_size(difficulty);
        Self::new(num_locations, num_items).map(|config| Self {
            difficulty,
            ..config
        })
    }

    /// Explicit counts, bypassing the difficulty formula
    pub fn new(num_locations: usize, num_items: usize) -> Result<Self, SetupError> {
        if num_locations == 0 {
            return Err(SetupError::NoLocations);
        }
        if num_locations > LOCATION_NAME_CAPACITY {
            return Err(SetupError::NameCapacityExceeded {
                kind: crate::map::NameKind::Location,
                requested: num_locations,
                capacity: LOCATION_NAME_CAPACITY,
            });
        }
        if num_items > ITEM_NAME_CAPACITY {
            return Err(SetupError::NameCapacityExceeded {
                kind: crate::map::NameKind::Item,
                requested: num_items,
                capacity: ITEM_NAME_CAPACITY,
            });
        }

        Ok(Self {
            difficulty: num_locations as u32,
            num_locations,
            num_items,
            seed: None,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::NameKind;

    #[test]
    fn test_world_size_formula() {
        assert_eq!(world_size(10), (10, 8));
        assert_eq!(world_size(1), (1, 1));
        assert_eq!(world_size(4), (4, 4));
        assert_eq!(world_size(9), (9, 8));
        assert_eq!(world_size(100), (100, 15));
        assert_eq!(world_size(225), (225, 20));
    }

    #[test]
    fn test_from_difficulty() {
        let config = GameConfig::from_difficulty(10).unwrap();
        assert_eq!(config.difficulty, 10);
        assert_eq!(config.num_locations, 10);
        assert_eq!(config.num_items, 8);
        assert_eq!(config.seed, None);
        assert_eq!(config.player_name, "Adventurer");
    }

    #[test]
    fn test_difficulty_bounds() {
        assert_eq!(
            GameConfig::from_difficulty(0),
            Err(SetupError::InvalidDifficulty(0))
        );
        assert_eq!(
            GameConfig::from_difficulty(226),
            Err(SetupError::InvalidDifficulty(226))
        );
        assert!(GameConfig::from_difficulty(225).is_ok());
    }

    #[test]
    fn test_explicit_counts_checked() {
        assert_eq!(GameConfig::new(0, 3), Err(SetupError::NoLocations));
        assert!(matches!(
            GameConfig::new(5, 500),
            Err(SetupError::NameCapacityExceeded { kind: NameKind::Item, requested: 500, .. })
        ));
        let config = GameConfig::new(3, 0).unwrap();
        assert_eq!(config.num_items, 0);
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::from_difficulty(5)
            .unwrap()
            .with_seed(9)
            .with_player_name("Wren");
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.player_name, "Wren");
    }
}
