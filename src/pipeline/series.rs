//! Headless series of rounds between two automated players

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::round::TurnController;
use crate::{
    Error, Result,
    adapters::ScriptedConsole,
    ports::{Observer, Player},
    tictactoe::{GameOutcome, Mark},
};

/// Series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of rounds to play
    pub rounds: usize,

    /// Random seed. The controller gets `seed`, the players `seed + 1` and
    /// `seed + 2`.
    pub seed: Option<u64>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            seed: None,
        }
    }
}

/// Tally of a finished series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    /// Rounds played
    pub rounds: usize,

    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,

    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,

    /// Mean number of moves per round
    pub avg_plies: f64,
}

impl SeriesResult {
    /// Build a result from raw counts
    pub fn new(x_wins: usize, o_wins: usize, draws: usize, total_plies: usize) -> Self {
        let rounds = x_wins + o_wins + draws;
        let rate = |count: usize| {
            if rounds > 0 {
                count as f64 / rounds as f64
            } else {
                0.0
            }
        };

        Self {
            rounds,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
            avg_plies: rate(total_plies),
        }
    }

    /// Wins recorded for `mark`
    pub fn wins(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a fixed number of rounds with nobody watching
pub struct Series {
    config: SeriesConfig,
    controller: TurnController,
}

impl Series {
    pub fn new(config: SeriesConfig) -> Self {
        let controller = match config.seed {
            Some(seed) => TurnController::with_seed(seed),
            None => TurnController::new(),
        };
        Self { config, controller }
    }

    /// Add an observer to the series
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.controller = self.controller.with_observer(observer);
        self
    }

    /// Run every round between `first` and `second`.
    ///
    /// Rounds are played on a [`ScriptedConsole`] with no queued answers, so a
    /// player that asks for input fails the series with
    /// [`Error::InputClosed`].
    pub fn run(&mut self, first: &mut dyn Player, second: &mut dyn Player) -> Result<SeriesResult> {
        if let Some(seed) = self.config.seed {
            first.set_rng_seed(seed.wrapping_add(1))?;
            second.set_rng_seed(seed.wrapping_add(2))?;
        }

        for observer in self.controller.observers_mut() {
            observer.on_series_start(self.config.rounds)?;
        }

        let mut console = ScriptedConsole::silent();
        let (mut x_wins, mut o_wins, mut draws) = (0, 0, 0);
        let mut total_plies = 0;

        for _ in 0..self.config.rounds {
            let summary = self.controller.play_round(first, second, &mut console)?;
            console.clear_transcript();

            match summary.outcome {
                GameOutcome::Win(Mark::X) => x_wins += 1,
                GameOutcome::Win(Mark::O) => o_wins += 1,
                GameOutcome::Draw => draws += 1,
            }
            total_plies += summary.moves.len();
        }

        for observer in self.controller.observers_mut() {
            observer.on_series_end()?;
        }

        let result = SeriesResult::new(x_wins, o_wins, draws, total_plies);
        info!(
            rounds = result.rounds,
            x_wins, o_wins, draws, "series finished"
        );
        Ok(result)
    }
}
