//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Mark, board::CELL_COUNT};

/// Winning line indices on the 3x3 board, in scan priority order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Mark owning all three cells of `line`, if any
    pub fn line_owner(cells: &[Cell; CELL_COUNT], line: &[usize; 3]) -> Option<Mark> {
        let [a, b, c] = *line;
        let first = cells[a];
        if first != Cell::Empty && first == cells[b] && first == cells[c] {
            first.to_mark()
        } else {
            None
        }
    }

    /// First complete line in [`WINNING_LINES`] order
    pub fn first_winning_line(cells: &[Cell; CELL_COUNT]) -> Option<(Mark, [usize; 3])> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(cells, line).map(|mark| (mark, *line)))
    }
}
