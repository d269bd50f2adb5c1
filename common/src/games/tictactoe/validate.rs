use thiserror::Error;

use super::board::Board;
use super::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("cell {0} is invalid, enter a number between 1 and 9")]
    OutOfRange(i64),
    #[error("cell {} is already occupied", .0.cell_number())]
    CellOccupied(Position),
}

impl MoveError {
    /// Input that could never be a move, as opposed to a move onto a taken cell.
    pub fn is_format_error(&self) -> bool {
        matches!(self, MoveError::NotANumber(_) | MoveError::OutOfRange(_))
    }
}

/// Maps a raw `1`-`9` entry onto an empty cell. Retrying is left to the caller.
pub fn parse_human_move(raw: &str, board: &Board) -> Result<Position, MoveError> {
    let trimmed = raw.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| MoveError::NotANumber(trimmed.to_string()))?;

    let pos = Position::from_cell_number(number).ok_or(MoveError::OutOfRange(number))?;

    if !board.is_empty_at(pos) {
        return Err(MoveError::CellOccupied(pos));
    }

    Ok(pos)
}
