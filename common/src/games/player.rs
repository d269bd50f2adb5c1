use super::tictactoe::{MoveError, TicTacToeGameState};

/// Source of the human's raw move entries.
pub trait HumanPlayer {
    /// Next raw entry, or `None` once input is exhausted.
    fn read_move(&mut self, state: &TicTacToeGameState) -> Option<String>;

    fn reject_move(&mut self, error: &MoveError);
}
