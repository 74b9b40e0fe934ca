//! oxo CLI - noughts and crosses against people, dice and minimax
//!
//! This CLI provides:
//! - Interactive play at the terminal
//! - Headless series between automated players
//! - Minimax analysis of arbitrary positions

use anyhow::Result;
use clap::{Parser, Subcommand};
use oxo::cli::{self, commands, config::CommonConfig};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Noughts and crosses with an exhaustive minimax opponent", long_about = None)]
struct Cli {
    /// Random seed for reproducibility
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Hide progress bars
    #[arg(long, global = true)]
    no_progress: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play at the terminal
    Play(commands::play::PlayArgs),

    /// Play a headless series between automated players
    Simulate(commands::simulate::SimulateArgs),

    /// Score every move on a board
    Analyze(commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let common = CommonConfig {
        seed: cli.seed,
        progress: !cli.no_progress,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Play(args) => commands::play::execute(args, &common),
        Commands::Simulate(args) => commands::simulate::execute(args, &common),
        Commands::Analyze(args) => commands::analyze::execute(args),
    }
}
