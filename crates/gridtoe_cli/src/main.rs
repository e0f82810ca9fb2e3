//! Gridtoe - N×N tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use gridtoe_cli::Cli;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    gridtoe_cli::init_tracing();

    gridtoe_cli::run(cli)
}
