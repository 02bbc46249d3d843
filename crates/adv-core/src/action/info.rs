//! Information commands: look, inventory, map

use crate::action::ActionResult;
use crate::gameloop::GameState;

pub fn do_look(state: &mut GameState) -> ActionResult {
    let lines = state.current_location().describe();
    state.messages_from(lines);
    ActionResult::NoTime
}

pub fn do_inventory(state: &mut GameState) -> ActionResult {
    let lines = state.player.inventory_list();
    state.messages_from(lines);
    ActionResult::NoTime
}

pub fn do_map(state: &mut GameState) -> ActionResult {
    let lines = state.map.table();
    state.messages_from(lines);
    ActionResult::NoTime
}
