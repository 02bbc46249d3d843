//! Main game loop
//!
//! `GameState` owns the world; `GameLoop` advances it one command at a time
//! and decides when the game is over.

use crate::action::{ActionResult, Command, info, movement, pickup};
use crate::config::GameConfig;
use crate::error::SetupError;
use crate::map::{GameMap, Location, MapBuilder};
use crate::player::Character;
use crate::rng::GameRng;

const QUIT_MSG: &str = "Thanks for playing!";

/// Result of a game loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player quit
    PlayerQuit,
    /// All items collected and back at the start
    PlayerWon,
}

/// Main game state
#[derive(Debug)]
pub struct GameState {
    pub map: GameMap,
    pub player: Character,
    /// Items generated for this game; the win target
    pub total_items: usize,
    /// Seed the world was generated from
    pub seed: u64,
    /// Messages produced since the front end last drained them
    pub messages: Vec<String>,
}

impl GameState {
    /// Generate a world from `config` and place the player at its start
    pub fn new(config: &GameConfig) -> Result<Self, SetupError> {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::info!(
            "new game: difficulty {}, {} locations, {} items, seed {}",
            config.difficulty,
            config.num_locations,
            config.num_items,
            rng.seed()
        );

        let map = MapBuilder::new(config).build(&mut rng)?;
        let player = Character::new(config.player_name.clone(), map.start());
        Ok(Self::from_parts(map, player, config.num_items, rng.seed()))
    }

    /// Assemble a state from an existing map and player
    pub fn from_parts(map: GameMap, player: Character, total_items: usize, seed: u64) -> Self {
        Self {
            map,
            player,
            total_items,
            seed,
            messages: Vec::new(),
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    pub fn messages_from(&mut self, lines: impl IntoIterator<Item = String>) {
        self.messages.extend(lines);
    }

    /// Hand pending messages to the front end
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    pub fn current_location(&self) -> &Location {
        &self.map.locations()[self.player.location.0]
    }

    pub fn start_location(&self) -> &Location {
        &self.map.locations()[self.map.start().0]
    }

    /// Items on the ground plus items carried; constant for a whole game
    pub fn items_in_play(&self) -> usize {
        self.map.item_count() + self.player.inventory.len()
    }

    /// Everything collected and standing on the start
    pub fn is_won(&self) -> bool {
        self.player.inventory.len() == self.total_items && self.player.location == self.map.start()
    }

    /// The objective, as told to the player before the first turn
    pub fn goal(&self) -> String {
        format!(
            "Collect {} items and return to {} to win!",
            self.total_items,
            self.start_location().name
        )
    }
}

/// Game loop controller
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    outcome: GameLoopResult,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            outcome: GameLoopResult::Continue,
        }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn outcome(&self) -> GameLoopResult {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome != GameLoopResult::Continue
    }

    /// Describe the player's surroundings at the top of a turn
    pub fn begin_turn(&mut self) {
        if !self.is_over() {
            info::do_look(&mut self.state);
        }
    }

    /// Apply one command and evaluate the win condition.
    ///
    /// Once the game has been won or quit, further commands are ignored.
    pub fn tick(&mut self, command: Command) -> GameLoopResult {
        if self.is_over() {
            return self.outcome;
        }
        log::trace!("command: {command:?}");

        match self.execute_command(command) {
            ActionResult::Success | ActionResult::NoTime => {}
            ActionResult::Failed(msg) => self.state.message(msg),
            ActionResult::Quit => {
                self.state.message(QUIT_MSG);
                self.outcome = GameLoopResult::PlayerQuit;
                return self.outcome;
            }
        }

        if self.state.is_won() {
            let start = self.state.start_location().name.clone();
            self.state.message(format!(
                "Congratulations! You collected all items and returned to {start}. Your quest is complete!"
            ));
            log::info!("game won by {}", self.state.player.name);
            self.outcome = GameLoopResult::PlayerWon;
        }
        self.outcome
    }

    /// Parse a raw input line and tick with it
    pub fn tick_line(&mut self, line: &str) -> GameLoopResult {
        self.tick(Command::parse(line))
    }

    fn execute_command(&mut self, command: Command) -> ActionResult {
        match command {
            Command::Move(dir) => movement::do_move(&mut self.state, dir),
            Command::BadDirection(token) => movement::do_bad_direction(&token),
            Command::Take(name) => pickup::do_take(&mut self.state, &name),
            Command::Inventory => info::do_inventory(&mut self.state),
            Command::Look => info::do_look(&mut self.state),
            Command::Map => info::do_map(&mut self.state),
            Command::Quit => ActionResult::Quit,
            Command::Unknown(_) => {
                ActionResult::Failed(format!("Unknown command. {}", crate::action::USAGE))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::map::{Direction, LocationId};
    use crate::object::Item;

    /// Azure Keep (start, holds Golden Orb) --east--> Foggy Marsh (holds Silver Ring)
    pub(crate) fn two_room_state() -> GameState {
        let mut keep = Location::new(LocationId(0), "Azure Keep");
        keep.items.push(Item::new("Golden Orb"));
        let mut marsh = Location::new(LocationId(1), "Foggy Marsh");
        marsh.items.push(Item::new("Silver Ring"));

        let mut map = GameMap::new(vec![keep, marsh]);
        map.connect(LocationId(0), Direction::East, LocationId(1)).unwrap();
        let player = Character::new("Adventurer", map.start());
        GameState::from_parts(map, player, 2, 0)
    }

    fn play(game: &mut GameLoop, lines: &[&str]) -> GameLoopResult {
        let mut result = GameLoopResult::Continue;
        for line in lines {
            result = game.tick_line(line);
        }
        result
    }

    #[test]
    fn test_win_after_collecting_and_returning() {
        let mut game = GameLoop::new(two_room_state());
        let result = play(
            &mut game,
            &["take golden orb", "go east", "take silver ring", "go west"],
        );
        assert_eq!(result, GameLoopResult::PlayerWon);
        assert!(game.is_over());
        assert_eq!(
            game.state().messages.last().map(String::as_str),
            Some(
                "Congratulations! You collected all items and returned to Azure Keep. Your quest is complete!"
            )
        );
    }

    #[test]
    fn test_all_items_but_wrong_location_is_not_a_win() {
        let mut game = GameLoop::new(two_room_state());
        let result = play(&mut game, &["take golden orb", "go east", "take silver ring"]);
        assert_eq!(result, GameLoopResult::Continue);
        assert_eq!(game.state().player.inventory.len(), 2);
        assert!(!game.state().is_won());
    }

    #[test]
    fn test_start_location_missing_items_is_not_a_win() {
        let mut game = GameLoop::new(two_room_state());
        let result = play(&mut game, &["take golden orb", "go east", "go west"]);
        assert_eq!(result, GameLoopResult::Continue);
        assert_eq!(game.state().player.location, LocationId(0));
        assert!(!game.state().is_won());
    }

    #[test]
    fn test_quit_stops_without_win() {
        let mut game = GameLoop::new(two_room_state());
        assert_eq!(game.tick(Command::Quit), GameLoopResult::PlayerQuit);
        assert_eq!(game.state().messages, vec!["Thanks for playing!"]);

        // finished games ignore input
        assert_eq!(game.tick_line("go east"), GameLoopResult::PlayerQuit);
        assert_eq!(game.state().player.location, LocationId(0));
    }

    #[test]
    fn test_blocked_move_reports_and_keeps_position() {
        let mut game = GameLoop::new(two_room_state());
        game.tick_line("go north");
        assert_eq!(game.state().player.location, LocationId(0));
        assert_eq!(game.state().messages, vec!["You can't go that way."]);
    }

    #[test]
    fn test_invalid_direction_reported() {
        let mut game = GameLoop::new(two_room_state());
        game.tick_line("go sideways");
        assert_eq!(
            game.state().messages,
            vec!["Invalid direction. Use north, south, east, or west."]
        );
    }

    #[test]
    fn test_unknown_command_changes_nothing() {
        let mut game = GameLoop::new(two_room_state());
        assert_eq!(game.tick_line("dance"), GameLoopResult::Continue);
        let state = game.state();
        assert_eq!(state.player.location, LocationId(0));
        assert!(state.player.inventory.is_empty());
        assert_eq!(state.map.item_count(), 2);
        assert_eq!(
            state.messages,
            vec!["Unknown command. Try: go <direction>, take <item>, inventory, look, map, quit"]
        );
    }

    #[test]
    fn test_items_conserved_through_play() {
        let mut game = GameLoop::new(two_room_state());
        let lines = [
            "take golden orb",
            "take golden orb",
            "go east",
            "take nothing",
            "take silver ring",
        ];
        for line in lines {
            game.tick_line(line);
            assert_eq!(game.state().items_in_play(), 2);
        }
    }

    #[test]
    fn test_begin_turn_describes_location() {
        let mut game = GameLoop::new(two_room_state());
        game.begin_turn();
        let messages = game.state_mut().drain_messages();
        assert_eq!(messages[0], "You are at Azure Keep.");
        assert!(game.state().messages.is_empty());
    }

    #[test]
    fn test_generated_game_is_playable() {
        let config = GameConfig::from_difficulty(10).unwrap().with_seed(2024);
        let state = GameState::new(&config).unwrap();
        assert_eq!(state.seed, 2024);
        assert_eq!(state.total_items, 8);
        assert_eq!(state.items_in_play(), 8);
        assert_eq!(state.player.location, state.map.start());
        assert!(state.goal().starts_with("Collect 8 items and return to "));
    }

    #[test]
    fn test_single_location_game_wins_on_pickup() {
        let config = GameConfig::from_difficulty(1).unwrap().with_seed(1);
        let state = GameState::new(&config).unwrap();
        let item = state.current_location().items[0].name.clone();

        let mut game = GameLoop::new(state);
        assert_eq!(
            game.tick_line(&format!("take {item}")),
            GameLoopResult::PlayerWon
        );
    }
}
