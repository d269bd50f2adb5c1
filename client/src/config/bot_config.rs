use noughts_common::games::tictactoe::TicTacToeSessionSettings;
use noughts_common::storage::Validate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MAX_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BotConfig {
    pub delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        if self.delay_ms > MAX_DELAY_MS {
            return Err(format!("bot delay_ms must not exceed {}", MAX_DELAY_MS));
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            seed: None,
        }
    }
}

impl From<&BotConfig> for TicTacToeSessionSettings {
    fn from(config: &BotConfig) -> Self {
        Self {
            bot_delay: Duration::from_millis(config.delay_ms),
            seed: config.seed,
        }
    }
}
