//! Exhaustive minimax search
//!
//! The engine explores the whole remaining game tree with no pruning. Each
//! lookahead placement is made through [`Board::trial`], so the board is
//! back in its original state whenever control returns to the caller; only
//! [`Minimax::play`] leaves a mark behind.
//!
//! Scores are taken from the engine's point of view: a win at depth `d`
//! scores `10 - d`, a loss `-10 + d`, a draw `0`. Faster wins and slower
//! losses are therefore preferred.

use serde::Serialize;
use tracing::debug;

use crate::{
    Error, Result,
    tictactoe::{Board, Mark, Move, Position},
};

/// Score of a win found at depth 0
pub const WIN_SCORE: i32 = 10;

/// A candidate move and its minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    pub position: Position,
    pub score: i32,
}

/// Minimax search for one mark
#[derive(Debug, Clone)]
pub struct Minimax {
    mark: Mark,
    nodes: u64,
}

impl Minimax {
    pub fn new(mark: Mark) -> Self {
        Self { mark, nodes: 0 }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Nodes visited by the most recent top-level search
    pub fn last_nodes(&self) -> u64 {
        self.nodes
    }

    /// Static value of a terminal board at `depth`
    pub fn evaluate(&self, board: &Board, depth: i32) -> i32 {
        match board.winner() {
            Some(winner) if winner == self.mark => WIN_SCORE - depth,
            Some(_) => -WIN_SCORE + depth,
            None => 0,
        }
    }

    /// Value of `board` with `maximizing` telling whether the engine moves next.
    ///
    /// # Errors
    ///
    /// Only fails if the board is mutated behind the search's back.
    pub fn minimax(&mut self, board: &mut Board, depth: i32, maximizing: bool) -> Result<i32> {
        self.nodes += 1;

        if board.is_terminal() {
            return Ok(self.evaluate(board, depth));
        }

        let mark = if maximizing {
            self.mark
        } else {
            self.mark.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for position in board.empty_positions() {
            let mut trial = board.trial(position, mark)?;
            let value = self.minimax(&mut trial, depth + 1, !maximizing)?;

            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        Ok(best)
    }

    /// Every candidate for the engine's mark with its score, in row-major order.
    ///
    /// # Errors
    ///
    /// [`Error::GameOver`] if the board already has a winner,
    /// [`Error::NoValidMoves`] if it is full.
    pub fn score_moves(&mut self, board: &mut Board) -> Result<Vec<ScoredMove>> {
        if let Some(winner) = board.winner() {
            return Err(Error::GameOver { winner });
        }

        self.nodes = 0;
        let mut scored = Vec::new();
        for position in board.empty_positions() {
            let mut trial = board.trial(position, self.mark)?;
            let score = self.minimax(&mut trial, 0, false)?;
            scored.push(ScoredMove { position, score });
        }

        if scored.is_empty() {
            return Err(Error::NoValidMoves);
        }
        Ok(scored)
    }

    /// Highest-scoring candidate; ties keep the first in row-major order.
    /// The board is left as it was.
    pub fn best_move(&mut self, board: &mut Board) -> Result<ScoredMove> {
        let candidates = self.score_moves(board)?;
        let best = Self::pick_best(&candidates).ok_or(Error::NoValidMoves)?;
        debug!(
            mark = %self.mark,
            position = %best.position,
            score = best.score,
            nodes = self.nodes,
            "minimax selected move"
        );
        Ok(best)
    }

    /// Highest score among already scored candidates; ties keep the earliest.
    pub fn pick_best(candidates: &[ScoredMove]) -> Option<ScoredMove> {
        let mut best: Option<ScoredMove> = None;
        for &candidate in candidates {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Search, then commit the best move.
    pub fn play(&mut self, board: &mut Board) -> Result<Move> {
        let best = self.best_move(board)?;
        board.place_move(best.position, self.mark)?;
        Ok(Move::new(best.position, self.mark))
    }
}
