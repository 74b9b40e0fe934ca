//! Simulate command - headless series between two automated players

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    cli::{
        config::CommonConfig,
        output::{format_share, print_kv, print_section},
    },
    pipeline::{
        JsonlObserver, ProgressObserver, Series, SeriesConfig, SeriesResult, create_player,
    },
    ports::PlayerKind,
    tictactoe::Mark,
};

#[derive(Parser, Debug)]
#[command(about = "Play a series of rounds between two automated players")]
pub struct SimulateArgs {
    /// Player holding X
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    pub x: PlayerKind,

    /// Player holding O
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    pub o: PlayerKind,

    /// Number of rounds
    #[arg(long, short = 'r', default_value_t = 100)]
    pub rounds: usize,

    /// Write the tally as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write every round, move by move, as JSON lines
    #[arg(long)]
    pub trace: Option<PathBuf>,
}

pub fn execute(args: SimulateArgs, common: &CommonConfig) -> Result<()> {
    for (mark, kind) in [(Mark::X, args.x), (Mark::O, args.o)] {
        if kind.is_interactive() {
            bail!("{mark} cannot be '{kind}' in a headless series (use random or minimax)");
        }
    }

    print_section("Series Configuration");
    print_kv("X", &args.x.to_string());
    print_kv("O", &args.o.to_string());
    print_kv("Rounds", &args.rounds.to_string());
    if let Some(seed) = common.seed {
        print_kv("Seed", &seed.to_string());
    }

    let result = run_series(&args, common)?;

    print_section("Series Results");
    print_kv("Rounds", &result.rounds.to_string());
    print_kv("X wins", &format_share(result.x_wins, result.x_win_rate));
    print_kv("O wins", &format_share(result.o_wins, result.o_win_rate));
    print_kv("Draws", &format_share(result.draws, result.draw_rate));
    print_kv("Average moves", &format!("{:.2}", result.avg_plies));

    if let Some(path) = &args.export {
        result
            .save(path)
            .with_context(|| format!("failed to export results to {}", path.display()))?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}

/// Build both players and the series from the arguments and run it
pub fn run_series(args: &SimulateArgs, common: &CommonConfig) -> Result<SeriesResult> {
    let config = SeriesConfig {
        rounds: args.rounds,
        seed: common.seed,
    };
    let mut series = Series::new(config);

    if common.progress {
        series = series.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.trace {
        let observer = JsonlObserver::create(path)
            .with_context(|| format!("failed to open trace file {}", path.display()))?;
        series = series.with_observer(Box::new(observer));
    }

    // Seeds are applied by the series itself when one is configured.
    let mut x = create_player(args.x, Mark::X, None);
    let mut o = create_player(args.o, Mark::O, None);

    let result = series.run(x.as_mut(), o.as_mut())?;
    Ok(result)
}
