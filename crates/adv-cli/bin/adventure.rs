//! Adventure: collect every item and find your way back
//!
//! Main entry point for the game.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use adv_cli::App;
use adv_core::{GameConfig, GameLoop, GameLoopResult, GameState};

/// Text adventure on a randomly generated map
#[derive(Parser, Debug)]
#[command(name = "adventure")]
#[command(author, version, about = "Adventure - Collect the items and return home!", long_about = None)]
struct Args {
    /// Difficulty level (number of locations); prompts when omitted
    #[arg(short = 'd', long = "difficulty")]
    difficulty: Option<u32>,

    /// Seed for a reproducible world
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Player name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Print the generated map as JSON and exit
    #[arg(long = "export-map")]
    export_map: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), io::stdout());

    let config = match args.difficulty {
        Some(difficulty) => GameConfig::from_difficulty(difficulty)
            .with_context(|| format!("cannot start a game at difficulty {difficulty}"))?,
        None => match app.prompt_config().context("failed to read difficulty")? {
            Some(config) => config,
            None => return Ok(()),
        },
    };
    let config = apply_overrides(config, &args);

    let state = GameState::new(&config).context("failed to generate the world")?;
    info!("Starting Adventure v{} (seed {})", env!("CARGO_PKG_VERSION"), state.seed);

    if args.export_map {
        let json = serde_json::to_string_pretty(&state.map).context("failed to encode map")?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{json}")?;
        return Ok(());
    }

    app.introduce(&state)?;
    let mut game = GameLoop::new(state);
    let result = app.run(&mut game).context("console I/O failed")?;
    match result {
        GameLoopResult::PlayerWon => info!("game finished: won"),
        GameLoopResult::PlayerQuit => info!("game finished: quit"),
        GameLoopResult::Continue => {}
    }
    Ok(())
}

fn apply_overrides(mut config: GameConfig, args: &Args) -> GameConfig {
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(ref name) = args.name {
        config = config.with_player_name(name.clone());
    }
    config
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
}
