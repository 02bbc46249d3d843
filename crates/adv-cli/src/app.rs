//! Console driver
//!
//! Owns the input and output streams and walks a `GameLoop` through its
//! turns: describe, prompt, apply, repeat until the game is won or quit.

use std::io::{self, BufRead, Write};

use adv_core::action::Command;
use adv_core::{GameConfig, GameLoop, GameLoopResult, GameState};

use crate::input::ask;

pub const WELCOME: &str = "Welcome to Adventure!";
pub const DIFFICULTY_PROMPT: &str = "Enter difficulty level (1–100): ";
pub const TURN_PROMPT: &str = "What do you want to do? ";

/// Console application state
pub struct App<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream (used by tests to inspect what was shown)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for a difficulty until a usable one is given.
    ///
    /// Returns `None` when input ends before that.
    pub fn prompt_config(&mut self) -> io::Result<Option<GameConfig>> {
        loop {
            let Some(answer) = ask(&mut self.input, &mut self.output, DIFFICULTY_PROMPT)? else {
                return Ok(None);
            };
            let difficulty = match answer.trim().parse::<u32>() {
                Ok(value) => value,
                Err(_) => {
                    writeln!(self.output, "Please enter a whole number.")?;
                    continue;
                }
            };
            match GameConfig::from_difficulty(difficulty) {
                Ok(config) => return Ok(Some(config)),
                Err(err) => {
                    log::debug!("rejected difficulty {difficulty}: {err}");
                    writeln!(self.output, "{err}.")?;
                }
            }
        }
    }

    /// Greet the player and state the goal
    pub fn introduce(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(self.output, "{WELCOME}")?;
        writeln!(self.output, "{}", state.goal())
    }

    /// Play until the game is won or quit. End of input counts as quitting.
    pub fn run(&mut self, game: &mut GameLoop) -> io::Result<GameLoopResult> {
        while !game.is_over() {
            game.begin_turn();
            writeln!(self.output)?;
            self.flush_messages(game)?;

            writeln!(self.output)?;
            let result = match ask(&mut self.input, &mut self.output, TURN_PROMPT)? {
                Some(line) => game.tick_line(&line),
                None => {
                    writeln!(self.output)?;
                    game.tick(Command::Quit)
                }
            };
            let messages = game.state_mut().drain_messages();
            match (result, messages.split_last()) {
                // the closing congratulation stands apart from the last action's report
                (GameLoopResult::PlayerWon, Some((closing, report))) => {
                    self.write_lines(report)?;
                    writeln!(self.output)?;
                    self.write_lines(std::slice::from_ref(closing))?;
                }
                _ => self.write_lines(&messages)?,
            }
        }
        Ok(game.outcome())
    }

    fn flush_messages(&mut self, game: &mut GameLoop) -> io::Result<()> {
        let messages = game.state_mut().drain_messages();
        self.write_lines(&messages)
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()
    }
}
