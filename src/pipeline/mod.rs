//! Game-flow pipeline
//!
//! This module provides:
//! - The three player implementations
//! - The turn controller for a single round
//! - Headless series of rounds
//! - Observers recording what happens during play

pub mod observers;
pub mod players;
pub mod round;
pub mod series;

pub use observers::{JsonlObserver, PlyRecord, ProgressObserver, RoundRecord};
pub use players::{HumanPlayer, MinimaxPlayer, RandomPlayer, create_player};
pub use round::{RoundSummary, TurnController};
pub use series::{Series, SeriesConfig, SeriesResult};

pub use crate::ports::{Observer, Player};
