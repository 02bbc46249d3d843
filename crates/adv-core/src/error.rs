//! Setup and map errors
//!
//! Gameplay mistakes (a wall in the way, a missing item) are not errors;
//! they are reported through game messages. Only world construction fails.

use thiserror::Error;

use crate::map::{Direction, LocationId, NameKind};

/// Errors raised while wiring locations together
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("no location with id {0}")]
    UnknownLocation(LocationId),

    #[error("location {0} cannot be linked to itself")]
    SelfLink(LocationId),

    #[error("location {location} already has an exit to the {direction}")]
    ExitTaken {
        location: LocationId,
        direction: Direction,
    },
}

/// Errors raised while building a game from its configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("difficulty {0} is out of range ({min}..={max})", min = crate::MIN_DIFFICULTY, max = crate::MAX_DIFFICULTY)]
    InvalidDifficulty(u32),

    #[error("a world needs at least one location")]
    NoLocations,

    #[error("cannot generate {requested} unique {kind} names, only {capacity} exist")]
    NameCapacityExceeded {
        kind: NameKind,
        requested: usize,
        capacity: usize,
    },

    #[error("{stranded} locations could not be connected to the map")]
    Unconnected { stranded: usize },

    #[error(transparent)]
    Map(#[from] MapError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message() {
        let err = SetupError::NameCapacityExceeded {
            kind: NameKind::Item,
            requested: 300,
            capacity: 225,
        };
        assert_eq!(
            err.to_string(),
            "cannot generate 300 unique item names, only 225 exist"
        );
    }

    #[test]
    fn test_map_error_converts() {
        let err: SetupError = MapError::SelfLink(LocationId(3)).into();
        assert_eq!(err.to_string(), "location #3 cannot be linked to itself");
    }
}
