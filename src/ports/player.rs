//! Player port - one turn-taking interface for every kind of player
//!
//! Interactive, random and minimax players are interchangeable behind
//! [`Player`]; which one sits at a seat is chosen at construction through
//! [`PlayerKind`].

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::console::Console;
use crate::{
    Result,
    tictactoe::{Board, Mark, Move},
};

/// Player trait - takes exactly one turn on a shared board
///
/// # Examples
///
/// ```no_run
/// use oxo::{
///     adapters::ScriptedConsole,
///     pipeline::RandomPlayer,
///     ports::Player,
///     tictactoe::{Board, Mark},
/// };
///
/// let mut board = Board::new();
/// let mut console = ScriptedConsole::silent();
/// let mut player = RandomPlayer::with_seed(Mark::O, 7);
/// player.play(&mut board, &mut console)?;
/// assert_eq!(board.occupied_count(), 1);
/// # Ok::<(), oxo::Error>(())
/// ```
pub trait Player: Send {
    /// The mark this player places
    fn mark(&self) -> Mark;

    /// Display name used in announcements and logs
    fn name(&self) -> &str;

    /// Take one turn.
    ///
    /// On `Ok` the board holds exactly one more mark than before, placed on
    /// a cell that was valid at call time, and the returned [`Move`]
    /// describes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no valid cell left, or if the
    /// console collaborator fails (e.g. input closed).
    fn play(&mut self, board: &mut Board, console: &mut dyn Console) -> Result<Move>;

    /// Reseed the player's random source, if it has one.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}

/// Which [`Player`] implementation to build for a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Coordinates typed at the console
    Human,
    /// Uniformly random valid cell
    Random,
    /// Exhaustive minimax search
    Minimax,
}

impl PlayerKind {
    /// Whether this kind needs a person at the console
    pub fn is_interactive(self) -> bool {
        matches!(self, PlayerKind::Human)
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Random => "random",
            PlayerKind::Minimax => "minimax",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_human_is_interactive() {
        assert!(PlayerKind::Human.is_interactive());
        assert!(!PlayerKind::Random.is_interactive());
        assert!(!PlayerKind::Minimax.is_interactive());
    }

    #[test]
    fn display_matches_serde_name() {
        for kind in [PlayerKind::Human, PlayerKind::Random, PlayerKind::Minimax] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
