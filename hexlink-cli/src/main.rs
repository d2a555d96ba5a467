//! hexlink CLI - Command-line interface
//!
//! Commands:
//! - serve: start the HTTP server for the game frontend
//! - match: play self-play games between two difficulty tiers

mod match_cmd;
mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hexlink")]
#[command(about = "Hex connection-game engine")]
struct Cli {
    /// RNG seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Play self-play games between two strategies
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
    }
}
