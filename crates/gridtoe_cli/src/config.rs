//! Game configuration loaded from TOML and command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use gridtoe::{BoardSize, ConfigError, Gameboard, Mark, Player, Session, Strategy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board side length.
    size: usize,

    /// Strategy for player X.
    player_x: Strategy,

    /// Strategy for player O.
    player_o: Strategy,

    /// Seed for random players. Player O uses `seed + 1`.
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BoardSize::DEFAULT,
            player_x: Strategy::Human,
            player_o: Strategy::Human,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(size: usize, player_x: Strategy, player_o: Strategy, seed: Option<u64>) -> Self {
        Self {
            size,
            player_x,
            player_o,
            seed,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies any values given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(size) = cli.size {
            self.size = size;
        }
        if let Some(strategy) = cli.player_x {
            self.player_x = strategy;
        }
        if let Some(strategy) = cli.player_o {
            self.player_o = strategy;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        self
    }

    /// Replaces the board size.
    pub fn with_size(mut self, size: BoardSize) -> Self {
        self.size = size.get();
        self
    }

    /// Replaces both strategies.
    pub fn with_strategies(mut self, player_x: Strategy, player_o: Strategy) -> Self {
        self.player_x = player_x;
        self.player_o = player_o;
        self
    }

    /// Validates the configuration, returning the checked board size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the size is outside the playable range.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<BoardSize, ConfigError> {
        BoardSize::new(self.size)
    }

    /// Builds a ready-to-run session.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    #[instrument(skip(self))]
    pub fn build_session(&self) -> Result<Session, ConfigError> {
        let board = Gameboard::new(self.validate()?);
        let player_x = Player::new(self.player_x, Mark::X, self.seed);
        let player_o = Player::new(self.player_o, Mark::O, self.seed.map(|s| s.wrapping_add(1)));
        Session::new(board, player_x, player_o)
    }
}
