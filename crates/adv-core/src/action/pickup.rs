//! Picking up items

use crate::action::ActionResult;
use crate::gameloop::GameState;

pub const NOT_HERE_MSG: &str = "That item is not here.";

/// Take the named item from the current location
pub fn do_take(state: &mut GameState, name: &str) -> ActionResult {
    let here = state.player.location;
    let Some(location) = state.map.location_mut(here) else {
        return ActionResult::Failed(NOT_HERE_MSG.to_string());
    };

    let picked = state
        .player
        .take_item(location, name)
        .map(|item| item.name.clone());

    match picked {
        Some(item_name) => {
            log::debug!(
                "picked up {item_name} ({}/{})",
                state.player.inventory.len(),
                state.total_items
            );
            state.message(format!("You picked up: {item_name}"));
            ActionResult::Success
        }
        None => ActionResult::Failed(NOT_HERE_MSG.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameloop::tests::two_room_state;

    #[test]
    fn test_take_present_item() {
        let mut state = two_room_state();
        assert_eq!(do_take(&mut state, "golden orb"), ActionResult::Success);
        assert_eq!(state.player.inventory.len(), 1);
        assert_eq!(state.player.inventory[0].name, "Golden Orb");
        assert!(state.current_location().items.is_empty());
        assert_eq!(state.messages, vec!["You picked up: Golden Orb"]);
    }

    #[test]
    fn test_take_absent_item() {
        let mut state = two_room_state();
        assert_eq!(
            do_take(&mut state, "dark key"),
            ActionResult::Failed(NOT_HERE_MSG.to_string())
        );
        assert!(state.player.inventory.is_empty());
        assert_eq!(state.current_location().items.len(), 1);
    }
}
