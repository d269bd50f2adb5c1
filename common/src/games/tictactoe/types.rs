use std::fmt;

pub const BOARD_SIZE: usize = 3;

/// The human always plays X and moves first.
pub const HUMAN_MARK: Mark = Mark::X;
pub const BOT_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Zero-based grid coordinate. Cell numbers 1-9 map row-major onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_cell_number(number: i64) -> Option<Self> {
        if !(1..=(BOARD_SIZE * BOARD_SIZE) as i64).contains(&number) {
            return None;
        }
        let index = (number - 1) as usize;
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn cell_number(&self) -> usize {
        self.row * BOARD_SIZE + self.col + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of a finished match, seen from the human's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    HumanWin,
    Draw,
    HumanLoss,
}

impl GameOutcome {
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(GameOutcome::Draw),
            GameStatus::Won(mark) if mark == HUMAN_MARK => Some(GameOutcome::HumanWin),
            GameStatus::Won(_) => Some(GameOutcome::HumanLoss),
        }
    }

    pub fn score(&self) -> i64 {
        match self {
            GameOutcome::HumanWin => 1,
            GameOutcome::Draw => 0,
            GameOutcome::HumanLoss => -1,
        }
    }

    pub fn is_human_winner(&self) -> bool {
        *self == GameOutcome::HumanWin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_map_row_major() {
        assert_eq!(Position::from_cell_number(1), Some(Position::new(0, 0)));
        assert_eq!(Position::from_cell_number(3), Some(Position::new(0, 2)));
        assert_eq!(Position::from_cell_number(4), Some(Position::new(1, 0)));
        assert_eq!(Position::from_cell_number(9), Some(Position::new(2, 2)));
        assert_eq!(Position::from_cell_number(0), None);
        assert_eq!(Position::from_cell_number(10), None);
        assert_eq!(Position::new(1, 2).cell_number(), 6);
    }

    #[test]
    fn test_outcome_scores() {
        assert_eq!(GameOutcome::from_status(GameStatus::Won(Mark::X)), Some(GameOutcome::HumanWin));
        assert_eq!(GameOutcome::from_status(GameStatus::Won(Mark::O)), Some(GameOutcome::HumanLoss));
        assert_eq!(GameOutcome::from_status(GameStatus::Draw), Some(GameOutcome::Draw));
        assert_eq!(GameOutcome::from_status(GameStatus::InProgress), None);

        assert_eq!(GameOutcome::HumanWin.score(), 1);
        assert_eq!(GameOutcome::Draw.score(), 0);
        assert_eq!(GameOutcome::HumanLoss.score(), -1);
        assert!(GameOutcome::HumanWin.is_human_winner());
        assert!(!GameOutcome::Draw.is_human_winner());
    }
}
