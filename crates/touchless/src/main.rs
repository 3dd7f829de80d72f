//! Touchless - console tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use touchless::{AppConfig, Cli, ConsoleSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::resolve(&cli)?;
    info!(?config, "Starting console session");

    println!("Type a position (1-9 or a name like \"top left\"), `new` or `quit`.");
    let mut session = ConsoleSession::new(&config, std::io::stdout());
    session.run(std::io::stdin().lock())?;

    Ok(())
}
