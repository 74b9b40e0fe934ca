//! Console port - the I/O collaborator shared by players and the turn
//! controller

use serde::{Deserialize, Serialize};

use super::player::PlayerKind;
use crate::{Result, tictactoe::Board};

/// Menu choice at the start of each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsRandom,
    HumanVsMinimax,
    Exit,
}

impl GameMode {
    /// Kind of the second seat, `None` for [`GameMode::Exit`]
    pub fn opponent(self) -> Option<PlayerKind> {
        match self {
            GameMode::HumanVsHuman => Some(PlayerKind::Human),
            GameMode::HumanVsRandom => Some(PlayerKind::Random),
            GameMode::HumanVsMinimax => Some(PlayerKind::Minimax),
            GameMode::Exit => None,
        }
    }

    /// Mode that puts `opponent` in the second seat
    pub fn against(opponent: PlayerKind) -> Self {
        match opponent {
            PlayerKind::Human => GameMode::HumanVsHuman,
            PlayerKind::Random => GameMode::HumanVsRandom,
            PlayerKind::Minimax => GameMode::HumanVsMinimax,
        }
    }
}

/// Console trait - messages out, coordinates and menu choices in
pub trait Console {
    /// Show a message. Callers include their own trailing newline.
    fn message(&mut self, text: &str) -> Result<()>;

    /// Render the board
    fn show_board(&mut self, board: &Board) -> Result<()>;

    /// Ask for a single coordinate until one in `0..=2` is given
    ///
    /// # Errors
    ///
    /// Returns [`InputClosed`](crate::Error::InputClosed) when no more input
    /// can arrive.
    fn ask_coordinate(&mut self, prompt: &str) -> Result<usize>;

    /// Show the menu and read a choice until a valid one is given
    fn select_mode(&mut self) -> Result<GameMode>;
}
