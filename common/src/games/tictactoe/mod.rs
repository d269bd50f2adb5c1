mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod validate;
mod win_detector;

pub use board::{Board, BoardParseError};
pub use bot_controller::{BotDecision, HeuristicBot};
pub use game_state::{PlaceError, TicTacToeGameState};
pub use session::{GameOverSummary, SessionError, TicTacToeSession, TurnError};
pub use settings::{DEFAULT_BOT_DELAY, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIZE, BOT_MARK, Cell, GameOutcome, GameStatus, HUMAN_MARK, Mark, Position, WinningLine,
};
pub use validate::{MoveError, parse_human_move};
pub use win_detector::{LINES, check_win, has_win, winning_line};
