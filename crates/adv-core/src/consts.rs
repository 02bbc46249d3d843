//! Core game constants

/// Number of exits a location can have (one per cardinal direction)
pub const MAX_EXITS: usize = 4;

/// Unique location names available (15 prefixes x 15 suffixes)
pub const LOCATION_NAME_CAPACITY: usize = 225;

/// Unique item names available (15 adjectives x 15 nouns)
pub const ITEM_NAME_CAPACITY: usize = 225;

/// Items every world gets on top of the square root of the difficulty
pub const BASE_ITEM_COUNT: usize = 5;

/// Lowest accepted difficulty
pub const MIN_DIFFICULTY: u32 = 1;

/// Highest accepted difficulty; one location per difficulty point
pub const MAX_DIFFICULTY: u32 = LOCATION_NAME_CAPACITY as u32;

/// Name given to the player character when none is supplied
pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";

/// Glyph marking a connected direction in the map table
pub const EXIT_MARK: char = '✓';
