//! Moves and outcomes

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark, Position};

/// A committed placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub mark: Mark,
}

impl Move {
    pub fn new(position: Position, mark: Mark) -> Self {
        Self { position, mark }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.mark, self.position)
    }
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl GameOutcome {
    /// Outcome of a finished board, `None` while play can continue.
    ///
    /// A winner is checked before fullness, so a board completed by a
    /// winning move counts as a win.
    pub fn of(board: &Board) -> Option<Self> {
        if let Some(winner) = board.winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_of_open_board_is_none() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(GameOutcome::of(&board), None);
    }

    #[test]
    fn winning_last_move_is_a_win_not_a_draw() {
        let board = Board::from_string("XOX OXO OXX").unwrap();
        assert!(board.is_full());
        assert_eq!(GameOutcome::of(&board), Some(GameOutcome::Win(Mark::X)));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = Board::from_string("XOX XOO OXX").unwrap();
        assert_eq!(GameOutcome::of(&board), Some(GameOutcome::Draw));
    }

    #[test]
    fn move_display() {
        let mv = Move::new(Position::new(0, 2), Mark::O);
        assert_eq!(mv.to_string(), "O at (0, 2)");
    }
}
