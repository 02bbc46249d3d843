//! adv-cli: Console front end for the Adventure text game
//!
//! Reads player input line by line and prints the messages produced by
//! `adv-core`.

pub mod app;
pub mod input;

pub use app::App;
