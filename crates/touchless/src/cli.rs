//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Touchless - tic-tac-toe against the machine, one typed position at a time
#[derive(Parser, Debug)]
#[command(name = "touchless")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ignore moves after a game ends; start a new round only with `new`
    #[arg(long)]
    pub explicit_reset: bool,

    /// Let the machine open every round
    #[arg(long)]
    pub second_player_first: bool,
}
