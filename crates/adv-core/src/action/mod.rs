//! Player action system
//!
//! Parses typed lines into commands and implements each of them.

pub mod info;
pub mod movement;
pub mod pickup;

use crate::map::Direction;

/// Usage hint shown for anything the parser does not understand
pub const USAGE: &str = "Try: go <direction>, take <item>, inventory, look, map, quit";

/// Player command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `go <direction>`
    Move(Direction),
    /// `go` followed by something that is not a direction
    BadDirection(String),
    /// `take <item name>`
    Take(String),
    Inventory,
    Look,
    Map,
    Quit,
    /// Anything else, as typed
    Unknown(String),
}

impl Command {
    /// Parse one line of player input.
    ///
    /// The line is trimmed and lower-cased first; this never fails, unknown
    /// input becomes `Command::Unknown`.
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();

        if let Some(rest) = line.strip_prefix("go ") {
            let rest = rest.trim();
            return match rest.parse::<Direction>() {
                Ok(dir) => Command::Move(dir),
                Err(_) => Command::BadDirection(rest.to_string()),
            };
        }
        if let Some(rest) = line.strip_prefix("take ") {
            return Command::Take(rest.trim().to_string());
        }

        match line.as_str() {
            "inventory" => Command::Inventory,
            "look" => Command::Look,
            "map" => Command::Map,
            "quit" => Command::Quit,
            _ => Command::Unknown(line),
        }
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Command applied, the world may have changed
    Success,
    /// Command only reported information
    NoTime,
    /// Command could not be carried out; nothing changed
    Failed(String),
    /// The player asked to stop
    Quit,
}
