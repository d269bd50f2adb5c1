use super::board::Board;
use super::types::{Cell, Mark, Position, WinningLine};

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Rows, then columns, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

pub fn has_win(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

pub fn winning_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    let target = Cell::from(mark);
    LINES
        .iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == target))
        .map(|line| WinningLine::new(mark, line[0], line[2]))
}

/// Checks X before O. A legal game never has both.
pub fn check_win(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_win(board, mark))
}
