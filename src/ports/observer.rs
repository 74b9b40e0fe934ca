//! Observer port - hooks into rounds as they are played
//!
//! Observers are composed onto the turn controller to collect data without
//! coupling the game loop to any output format.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Mark, Move},
};

/// Observer trait for monitoring rounds
///
/// # Event Sequence
///
/// 1. `on_series_start(total_rounds)` - once, when a series begins
/// 2. For each round:
///    - `on_round_start(round, starter)`
///    - `on_move(round, ply, mv, board)` - after every committed move
///    - `on_round_end(round, outcome)`
/// 3. `on_series_end()` - once, when a series completes
///
/// A single interactive round only produces the per-round events.
///
/// # Examples
///
/// ```no_run
/// use oxo::{ports::Observer, tictactoe::GameOutcome};
///
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl Observer for DrawCounter {
///     fn on_round_end(&mut self, _round: usize, outcome: GameOutcome) -> oxo::Result<()> {
///         if outcome == GameOutcome::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when a series of rounds starts.
    fn on_series_start(&mut self, _total_rounds: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a round starts, after the coin flip.
    fn on_round_start(&mut self, _round: usize, _starter: Mark) -> Result<()> {
        Ok(())
    }

    /// Called after each committed move.
    ///
    /// # Parameters
    ///
    /// * `round` - Index of the current round
    /// * `ply` - Move number within the round (0-based)
    /// * `mv` - The move just committed
    /// * `board` - Board after the move
    fn on_move(&mut self, _round: usize, _ply: usize, _mv: &Move, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called when a round reaches a win or a draw.
    fn on_round_end(&mut self, _round: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called when a series completes.
    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}
