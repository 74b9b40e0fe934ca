//! Noughts and crosses with an exhaustive minimax opponent
//!
//! This crate provides:
//! - The 3x3 board with checked place/restore and winner detection
//! - A full-depth minimax engine
//! - Human, random and minimax players behind one trait
//! - A turn controller, headless series and the `oxo` CLI

pub mod adapters;
pub mod cli;
pub mod error;
pub mod minimax;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
pub use minimax::{Minimax, ScoredMove};
