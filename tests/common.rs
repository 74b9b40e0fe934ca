//! Common test utilities for the oxo test suite.

#![allow(dead_code)]

use oxo::tictactoe::{Board, Mark, Position};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Console answers that make a human fill the first free cell in row-major
/// order, repeated `times` times
pub fn scan_cells(times: usize) -> Vec<usize> {
    (0..times)
        .flat_map(|_| Position::all().flat_map(|p| [p.row, p.col]))
        .collect()
}

/// Play `plies` random alternating moves from an empty board, stopping early
/// if the game ends. X moves first.
pub fn random_board(seed: u64, plies: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut mark = Mark::X;

    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        let empty = board.empty_positions();
        let position = empty[rng.random_range(0..empty.len())];
        board.place_move(position, mark).unwrap();
        mark = mark.opponent();
    }
    board
}

/// Mark whose turn it is on a board reached by alternating play from X
pub fn side_to_move(board: &Board) -> Mark {
    if board.occupied_count().is_multiple_of(2) {
        Mark::X
    } else {
        Mark::O
    }
}
