//! adv-core: Core game logic for the Adventure text game
//!
//! This crate contains all game rules with no I/O dependencies: world
//! generation, the player character, command parsing and the game loop.
//! Text meant for the player is collected as messages on `GameState`.

pub mod action;
pub mod config;
pub mod error;
pub mod map;
pub mod object;
pub mod player;

mod consts;
mod gameloop;
mod rng;

pub use config::GameConfig;
pub use consts::*;
pub use error::{MapError, SetupError};
pub use gameloop::{GameLoop, GameLoopResult, GameState};
pub use rng::GameRng;
