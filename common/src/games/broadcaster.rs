use super::tictactoe::{GameOverSummary, Mark, TicTacToeGameState};

/// Receives match progress so a front end can render it.
pub trait GameBroadcaster {
    fn match_started(&mut self, state: &TicTacToeGameState);

    fn mark_placed(&mut self, state: &TicTacToeGameState, mark: Mark);

    fn game_over(&mut self, summary: &GameOverSummary);
}
