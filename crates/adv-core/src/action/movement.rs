//! Moving between locations

use crate::action::ActionResult;
use crate::gameloop::GameState;
use crate::map::Direction;

pub const INVALID_DIRECTION_MSG: &str = "Invalid direction. Use north, south, east, or west.";
pub const NO_EXIT_MSG: &str = "You can't go that way.";

/// Walk through an exit of the current location
pub fn do_move(state: &mut GameState, direction: Direction) -> ActionResult {
    match state.player.move_to(&state.map, direction) {
        Some(_) => {
            state.message(format!("You move {direction}."));
            ActionResult::Success
        }
        None => ActionResult::Failed(NO_EXIT_MSG.to_string()),
    }
}

/// `go` with something other than a compass direction
pub fn do_bad_direction(token: &str) -> ActionResult {
    log::trace!("rejected direction {token:?}");
    ActionResult::Failed(INVALID_DIRECTION_MSG.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameloop::tests::two_room_state;
    use crate::map::LocationId;

    #[test]
    fn test_move_reports_direction() {
        let mut state = two_room_state();
        assert_eq!(do_move(&mut state, Direction::East), ActionResult::Success);
        assert_eq!(state.player.location, LocationId(1));
        assert_eq!(state.messages, vec!["You move east."]);
    }

    #[test]
    fn test_move_blocked() {
        let mut state = two_room_state();
        assert_eq!(
            do_move(&mut state, Direction::North),
            ActionResult::Failed(NO_EXIT_MSG.to_string())
        );
        assert_eq!(state.player.location, LocationId(0));
        assert!(state.messages.is_empty());
    }
}
