use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::types::{BOARD_SIZE, Cell, Mark, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected 3 rows separated by '/', got {0}")]
    RowCount(usize),
    #[error("row {row} must have 3 cells, got {len}")]
    RowLength { row: usize, len: usize },
    #[error("unexpected cell symbol '{0}'")]
    Symbol(char),
}

/// 3x3 grid, row-major. Copying is cheap, so lookahead works on copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Callers check occupancy first; the board itself does not.
    pub fn place_mark(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = Cell::from(mark);
    }

    /// Copy of this board with one extra mark. The original is untouched.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Board {
        let mut copy = *self;
        copy.place_mark(pos, mark);
        copy
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    pub fn count(&self, mark: Mark) -> usize {
        let target = Cell::from(mark);
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == target)
            .count()
    }
}

/// Parses the compact `"XOX/OXO/__X"` form. `_` and `-` both mean empty.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.trim().chars().collect();
            if symbols.len() != BOARD_SIZE {
                return Err(BoardParseError::RowLength { row, len: symbols.len() });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    'X' | 'x' => Cell::X,
                    'O' | 'o' => Cell::O,
                    '_' | '-' => Cell::Empty,
                    other => return Err(BoardParseError::Symbol(other)),
                };
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '_',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
