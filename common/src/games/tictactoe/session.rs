use thiserror::Error;

use crate::games::{GameBroadcaster, HumanPlayer, SessionRng};
use crate::{log, log_warn};
use super::board::Board;
use super::bot_controller::{BotDecision, HeuristicBot};
use super::game_state::{PlaceError, TicTacToeGameState};
use super::settings::TicTacToeSessionSettings;
use super::types::{BOT_MARK, GameOutcome, GameStatus, HUMAN_MARK, WinningLine};
use super::validate::{MoveError, parse_human_move};
use super::win_detector::winning_line;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Place(#[from] PlaceError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("input closed before the match finished")]
    InputClosed,
    #[error("match stopped before reaching a result")]
    Unfinished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverSummary {
    pub outcome: GameOutcome,
    pub winning_line: Option<WinningLine>,
    pub board: Board,
}

impl GameOverSummary {
    pub fn score(&self) -> i64 {
        self.outcome.score()
    }

    pub fn is_human_winner(&self) -> bool {
        self.outcome.is_human_winner()
    }
}

/// Owns the board and the bot for a series of matches. Every match starts on a reset board.
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    bot: HeuristicBot,
    settings: TicTacToeSessionSettings,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings) -> Self {
        let rng = SessionRng::from_optional_seed(settings.seed);
        Self::with_bot(settings, HeuristicBot::new(rng))
    }

    pub fn with_bot(settings: TicTacToeSessionSettings, bot: HeuristicBot) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            bot,
            settings,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn start_match(&mut self) {
        self.state.reset();
        log!("Match started, bot seed {}", self.bot.seed());
    }

    /// On error nothing changes and the human is still to move.
    pub fn submit_human_move(&mut self, raw: &str) -> Result<GameStatus, TurnError> {
        let pos = parse_human_move(raw, &self.state.board)?;
        Ok(self.state.place_mark(HUMAN_MARK, pos)?)
    }

    /// Waits `bot_delay`, then places the bot's mark. `None` when it is not the bot's turn.
    pub fn play_bot_turn(&mut self) -> Option<BotDecision> {
        if self.state.status.is_over() || self.state.current_mark != BOT_MARK {
            return None;
        }

        if !self.settings.bot_delay.is_zero() {
            std::thread::sleep(self.settings.bot_delay);
        }

        let decision = self.bot.decide(&self.state.board)?;
        match self.state.place_mark(BOT_MARK, decision.position()) {
            Ok(_) => Some(decision),
            Err(e) => {
                log!("Bot failed to place mark at {}: {}", decision.position(), e);
                None
            }
        }
    }

    pub fn summary(&self) -> Option<GameOverSummary> {
        let outcome = self.state.outcome()?;
        let winning_line = match self.state.status {
            GameStatus::Won(mark) => winning_line(&self.state.board, mark),
            _ => None,
        };
        Some(GameOverSummary {
            outcome,
            winning_line,
            board: self.state.board,
        })
    }

    /// Plays one full match. Rejected human input is reported and asked for again.
    pub fn run<F>(&mut self, frontend: &mut F) -> Result<GameOverSummary, SessionError>
    where
        F: HumanPlayer + GameBroadcaster,
    {
        self.start_match();
        frontend.match_started(&self.state);

        while !self.state.status.is_over() {
            if self.state.is_human_turn() {
                let Some(raw) = frontend.read_move(&self.state) else {
                    log!("Human input closed mid-match");
                    return Err(SessionError::InputClosed);
                };
                match self.submit_human_move(&raw) {
                    Ok(_) => frontend.mark_placed(&self.state, HUMAN_MARK),
                    Err(TurnError::Move(e)) => frontend.reject_move(&e),
                    Err(TurnError::Place(PlaceError::CellOccupied(pos))) => {
                        frontend.reject_move(&MoveError::CellOccupied(pos));
                    }
                    // Input is only read on the human's turn of a running match.
                    Err(TurnError::Place(e)) => {
                        log_warn!("Human placement refused: {}", e);
                    }
                }
            } else {
                match self.play_bot_turn() {
                    Some(_) => frontend.mark_placed(&self.state, BOT_MARK),
                    None => break,
                }
            }
        }

        let Some(summary) = self.summary() else {
            return Err(SessionError::Unfinished);
        };
        log!("Match finished: {:?}, score {}", summary.outcome, summary.score());
        frontend.game_over(&summary);
        Ok(summary)
    }
}
