//! Advisor CLI - value-table guided move recommendations
//!
//! Loads the per-player value tables, replays the supplied board into a
//! fresh rule engine and prints the recommended move as JSON.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "advisor")]
#[command(version, about = "Tic-Tac-Toe move advisor", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the next move for a board
    Recommend(tictactoe_engine::cli::commands::recommend::RecommendArgs),

    /// Report whether a board is ongoing, won or drawn
    Status(tictactoe_engine::cli::commands::status::StatusArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Recommend(args) => tictactoe_engine::cli::commands::recommend::execute(args),
        Commands::Status(args) => tictactoe_engine::cli::commands::status::execute(args),
    }
}
