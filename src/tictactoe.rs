//! Tic-Tac-Toe board, lines and game records

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, CELL_COUNT, Cell, Mark, Position, SIZE, Trial};
pub use game::{GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
