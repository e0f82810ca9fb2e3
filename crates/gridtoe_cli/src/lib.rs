//! Gridtoe command-line front end.
//!
//! Wires configuration, the stdio console and tracing around the
//! [`gridtoe`] game library.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod setup;

pub use cli::Cli;
pub use config::GameConfig;
pub use console::Console;
pub use setup::{ask_config, parse_size, parse_strategy};

use gridtoe::PlayerError;
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the tracing subscriber.
///
/// Logs go to stderr so the board on stdout stays readable. `RUST_LOG`
/// overrides the default `warn` filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Loads configuration from `cli` and plays one game on stdio.
///
/// # Errors
///
/// Returns an error if the config file is unreadable or invalid, or the
/// console fails. Running out of input mid-game is not an error.
#[instrument(skip(cli))]
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_overrides(&cli);

    let mut console = Console::stdio();
    let config = if cli.ask {
        match ask_config(&mut console, config)? {
            Some(config) => config,
            None => {
                info!("Input closed during setup");
                return Ok(());
            }
        }
    } else {
        config
    };

    let mut session = config.build_session()?;
    match session.run(&mut console) {
        Ok(outcome) => {
            info!(%outcome, "Session complete");
            Ok(())
        }
        Err(PlayerError::InputClosed { mark }) => {
            warn!(%mark, "Input closed mid-game");
            console.say("")?;
            console.say(format!("No more input for player {}. Goodbye.", mark))?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
