use std::time::Duration;

pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    /// Pause before the bot moves so the human can follow the game.
    pub bot_delay: Duration,
    /// Fixed seed for the bot's random fallback. `None` draws one.
    pub seed: Option<u64>,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            bot_delay: DEFAULT_BOT_DELAY,
            seed: None,
        }
    }
}
