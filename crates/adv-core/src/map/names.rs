//! Procedural names for locations and items
//!
//! Location names come from a shuffled enumeration of every prefix/suffix
//! pair. Item names are drawn adjective + noun until enough distinct names
//! exist; the draw is bounded and falls back to the unused pairs so it
//! always terminates.

use hashbrown::HashSet;
use strum::Display;

use crate::error::SetupError;
use crate::rng::GameRng;
use crate::{ITEM_NAME_CAPACITY, LOCATION_NAME_CAPACITY};

const LOCATION_PREFIXES: [&str; 15] = [
    "Whispering",
    "Crimson",
    "Foggy",
    "Azure",
    "Twilight",
    "Echoing",
    "Glowing",
    "Howling",
    "Sunken",
    "Obsidian",
    "Silver",
    "Ember",
    "Frosted",
    "Verdant",
    "Hidden",
];

const LOCATION_SUFFIXES: [&str; 15] = [
    "Hollow",
    "Tower",
    "Dunes",
    "Pass",
    "Keep",
    "Caverns",
    "Marsh",
    "Ridge",
    "Vale",
    "Point",
    "Spire",
    "Forest",
    "Glade",
    "Sanctum",
    "Reach",
];

const ITEM_ADJECTIVES: [&str; 15] = [
    "Glowing",
    "Ancient",
    "Silver",
    "Mystic",
    "Cracked",
    "Golden",
    "Dark",
    "Frozen",
    "Burning",
    "Silent",
    "Cursed",
    "Radiant",
    "Enchanted",
    "Shadowed",
    "Blessed",
];

const ITEM_NOUNS: [&str; 15] = [
    "Orb",
    "Key",
    "Crystal",
    "Ring",
    "Tome",
    "Stone",
    "Amulet",
    "Lantern",
    "Scroll",
    "Gem",
    "Blade",
    "Crown",
    "Mask",
    "Chalice",
    "Feather",
];

/// Random draws per requested item name before switching to the fallback
const DRAWS_PER_ITEM_NAME: usize = 8;

/// What a batch of names is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NameKind {
    Location,
    Item,
}

impl NameKind {
    /// How many distinct names this kind can produce
    pub const fn capacity(self) -> usize {
        match self {
            NameKind::Location => LOCATION_NAME_CAPACITY,
            NameKind::Item => ITEM_NAME_CAPACITY,
        }
    }
}

fn check_capacity(kind: NameKind, requested: usize) -> Result<(), SetupError> {
    let capacity = kind.capacity();
    if requested > capacity {
        return Err(SetupError::NameCapacityExceeded {
            kind,
            requested,
            capacity,
        });
    }
    Ok(())
}

fn combine(first: &[&str], second: &[&str]) -> Vec<String> {
    first
        .iter()
        .flat_map(|a| second.iter().map(move |b| format!("{a} {b}")))
        .collect()
}

/// `count` distinct location names in random order
pub fn location_names(count: usize, rng: &mut GameRng) -> Result<Vec<String>, SetupError> {
    check_capacity(NameKind::Location, count)?;

    let mut names = combine(&LOCATION_PREFIXES, &LOCATION_SUFFIXES);
    rng.shuffle(&mut names);
    names.truncate(count);
    Ok(names)
}

/// `count` distinct item names, in the order they were drawn
pub fn item_names(count: usize, rng: &mut GameRng) -> Result<Vec<String>, SetupError> {
    check_capacity(NameKind::Item, count)?;

    let mut seen: HashSet<String> = HashSet::with_capacity(count);
    let mut names = Vec::with_capacity(count);
    let mut draws = count * DRAWS_PER_ITEM_NAME;

    while names.len() < count && draws > 0 {
        draws -= 1;
        let name = match (rng.choose(&ITEM_ADJECTIVES), rng.choose(&ITEM_NOUNS)) {
            (Some(adjective), Some(noun)) => format!("{adjective} {noun}"),
            _ => break,
        };
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }

    if names.len() < count {
        log::debug!(
            "item name draws exhausted at {}/{}, filling from unused pairs",
            names.len(),
            count
        );
        let mut unused: Vec<String> = combine(&ITEM_ADJECTIVES, &ITEM_NOUNS)
            .into_iter()
            .filter(|name| !seen.contains(name))
            .collect();
        rng.shuffle(&mut unused);
        names.extend(unused.into_iter().take(count - names.len()));
    }

    Ok(names)
}
