//! Terminal front end for the Dungeon action core.
//!
//! Reads one command per line from stdin, splits it on whitespace, and
//! hands the verb and its tokens to the game. Report lines go to stdout;
//! logs go to stderr so the two never interleave in a pipe.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from the path in the first argument, or
//!    `dungeon.yaml`, falling back to defaults if the file is absent
//! 2. Initialize structured logging (tracing)
//! 3. Build the preset world and describe the starting location
//! 4. Run the command loop until `quit` or end of input

mod error;
mod sink;

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::Context;
use dungeon_core::config::LoggingConfig;
use dungeon_core::{GameConfig, GameState, NarratingCombat, Verb};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::sink::TerminalSink;

/// Config file read when no path is given.
const DEFAULT_CONFIG_PATH: &str = "dungeon.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or an action breaks a
/// game invariant.
fn main() -> anyhow::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = load_config(&path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;

    init_logging(&config.logging);
    info!(
        config = %path.display(),
        seed = config.world.seed,
        start = %config.world.start_date,
        "dungeon starting"
    );

    run(&config).context("game loop failed")?;
    info!("dungeon exiting");
    Ok(())
}

/// Read the config file, or use defaults if it does not exist.
fn load_config(path: &Path) -> Result<GameConfig, CliError> {
    if path.exists() {
        Ok(GameConfig::from_file(path)?)
    } else {
        Ok(GameConfig::default())
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    }
}

/// The command loop.
fn run(config: &GameConfig) -> Result<(), CliError> {
    let mut state = GameState::from_config(config);
    let mut combat = NarratingCombat;
    let mut sink = TerminalSink::new(io::stdout());

    dungeon_core::execute(&mut state, Verb::Look, &[], &mut combat, &mut sink)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        sink.prompt()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            continue;
        };
        if matches!(first.to_lowercase().as_str(), "quit" | "exit") {
            break;
        }
        let Some(verb) = Verb::parse(first) else {
            warn!(command = first, "unknown verb");
            sink.unknown(first);
            continue;
        };
        let tokens: Vec<&str> = words.collect();
        dungeon_core::execute(&mut state, verb, &tokens, &mut combat, &mut sink)?;
    }
    sink.flush()?;
    Ok(())
}
