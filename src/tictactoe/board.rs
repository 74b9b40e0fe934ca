//! Board state representation and basic operations

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Side length of the board
pub const SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Compact character used by [`Board::encode`]
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// Character used when rendering the grid for people
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opponent's mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, column) coordinate, both 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index (0-8). Only meaningful for in-bounds positions.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self::new(index / SIZE, index % SIZE))
    }

    /// All positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|index| Self::new(index / SIZE, index % SIZE))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 3x3 grid
///
/// A cell only goes `Empty -> marked` through [`Board::place_move`] and
/// `marked -> Empty` through [`Board::restore_move`] (or a dropped [`Trial`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored; the remaining characters must be exactly 9
    /// cells (`X`/`x`, `O`/`o`, or `.`/`_` for empty). A space is never a
    /// cell. No turn-order validation is performed.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly 9 cells or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Self { cells })
    }

    /// Both coordinates lie in `[0, SIZE)`
    pub fn is_in_bounds(&self, position: Position) -> bool {
        position.row < SIZE && position.col < SIZE
    }

    /// The cell holds a mark. Out-of-bounds positions are never occupied.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some_and(|cell| cell != Cell::Empty)
    }

    /// In bounds and empty
    pub fn is_valid(&self, position: Position) -> bool {
        self.is_in_bounds(position) && !self.is_occupied(position)
    }

    /// Get the cell at a position, or `None` when out of bounds
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.is_in_bounds(position)
            .then(|| self.cells[position.index()])
    }

    /// Place `mark` on an empty in-bounds cell.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`](crate::Error::OutOfBounds) or
    /// [`CellOccupied`](crate::Error::CellOccupied); the board is unchanged.
    pub fn place_move(&mut self, position: Position, mark: Mark) -> Result<(), crate::Error> {
        self.ensure_in_bounds(position)?;
        if self.is_occupied(position) {
            return Err(crate::Error::CellOccupied { position });
        }
        self.cells[position.index()] = mark.to_cell();
        Ok(())
    }

    /// Clear a previously marked cell.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`](crate::Error::OutOfBounds) or
    /// [`CellAlreadyEmpty`](crate::Error::CellAlreadyEmpty).
    pub fn restore_move(&mut self, position: Position) -> Result<(), crate::Error> {
        self.ensure_in_bounds(position)?;
        if !self.is_occupied(position) {
            return Err(crate::Error::CellAlreadyEmpty { position });
        }
        self.cells[position.index()] = Cell::Empty;
        Ok(())
    }

    /// Place `mark` for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the board, so lookahead can keep mutating
    /// through it; dropping it clears the cell again.
    pub fn trial(&mut self, position: Position, mark: Mark) -> Result<Trial<'_>, crate::Error> {
        self.place_move(position, mark)?;
        Ok(Trial {
            board: self,
            index: position.index(),
        })
    }

    fn ensure_in_bounds(&self, position: Position) -> Result<(), crate::Error> {
        if self.is_in_bounds(position) {
            Ok(())
        } else {
            Err(crate::Error::OutOfBounds {
                row: position.row,
                col: position.col,
            })
        }
    }

    /// No cell is empty, regardless of any winner
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Mark of the first complete line, scanning rows, then columns, then the
    /// main diagonal, then the anti-diagonal
    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::first_winning_line(&self.cells).map(|(mark, _)| mark)
    }

    /// Full or won
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&p| !self.is_occupied(p)).collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Compact 9-character representation, row-major
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(SIZE).enumerate() {
            let symbols: Vec<String> = cells.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", symbols.join(" | "))?;
            if row < SIZE - 1 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

/// A mark placed for lookahead, cleared on drop
pub struct Trial<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Cell::Empty;
    }
}
