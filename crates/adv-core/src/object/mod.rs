//! Collectible items

use serde::{Deserialize, Serialize};

/// A named collectible
///
/// Items are never cloned during play: they move between a location's item
/// list and the player's inventory.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Case-insensitive name comparison used by `take`
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Name plus description, for listings
    pub fn display_name(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ignores_case() {
        let orb = Item::new("Golden Orb");
        assert!(orb.matches("golden orb"));
        assert!(orb.matches("GOLDEN ORB"));
        assert!(!orb.matches("golden"));
        assert!(!orb.matches("golden orb "));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Item::new("Dark Key").display_name(), "Dark Key");
        let key = Item::new("Dark Key").with_description("cold to the touch");
        assert_eq!(key.display_name(), "Dark Key (cold to the touch)");
    }
}
