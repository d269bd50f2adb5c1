use thiserror::Error;

use super::board::Board;
use super::types::{GameOutcome, GameStatus, HUMAN_MARK, Mark, Position};
use super::win_detector::has_win;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("game is already over")]
    GameOver,
    #[error("not your turn, {expected} moves next")]
    OutOfTurn { expected: Mark },
    #[error("cell {} is already marked", .0.cell_number())]
    CellOccupied(Position),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    pub moves_played: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: HUMAN_MARK,
            status: GameStatus::InProgress,
            last_move: None,
            moves_played: 0,
        }
    }

    /// Resumes from an arbitrary position, e.g. for puzzles or tests.
    pub fn from_board(board: Board, next_mark: Mark) -> Self {
        let mut state = Self {
            moves_played: board.count(Mark::X) + board.count(Mark::O),
            board,
            current_mark: next_mark,
            status: GameStatus::InProgress,
            last_move: None,
        };
        state.status = evaluate_status(&state.board);
        state
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = HUMAN_MARK;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.moves_played = 0;
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == HUMAN_MARK
    }

    pub fn place_mark(&mut self, mark: Mark, pos: Position) -> Result<GameStatus, PlaceError> {
        if self.status.is_over() {
            return Err(PlaceError::GameOver);
        }

        if mark != self.current_mark {
            return Err(PlaceError::OutOfTurn { expected: self.current_mark });
        }

        if !self.board.is_empty_at(pos) {
            return Err(PlaceError::CellOccupied(pos));
        }

        self.board.place_mark(pos, mark);
        self.last_move = Some(pos);
        self.moves_played += 1;

        self.check_game_over(mark);

        if self.status == GameStatus::InProgress {
            self.current_mark = mark.opponent();
        }

        Ok(self.status)
    }

    /// Only the mover can have completed a line, so the check is limited to them.
    fn check_game_over(&mut self, mover: Mark) {
        if has_win(&self.board, mover) {
            self.status = GameStatus::Won(mover);
            return;
        }

        if self.board.empty_cells().is_empty() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::from_status(self.status)
    }
}

fn evaluate_status(board: &Board) -> GameStatus {
    for mark in [Mark::X, Mark::O] {
        if has_win(board, mark) {
            return GameStatus::Won(mark);
        }
    }
    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
