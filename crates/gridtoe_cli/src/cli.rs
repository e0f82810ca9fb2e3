//! Command-line interface for gridtoe.

use clap::Parser;
use gridtoe::Strategy;
use std::path::PathBuf;

/// Gridtoe - N×N tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "gridtoe")]
#[command(about = "Play N×N tic-tac-toe against a person or a random player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length (at least 3)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Strategy for player X (human or random)
    #[arg(long = "x", value_name = "STRATEGY")]
    pub player_x: Option<Strategy>,

    /// Strategy for player O (human or random)
    #[arg(long = "o", value_name = "STRATEGY")]
    pub player_o: Option<Strategy>,

    /// Seed for random players, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ask for board size and player strategies before starting
    #[arg(long)]
    pub ask: bool,
}
