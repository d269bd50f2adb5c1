use noughts_common::storage::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LeaderboardConfig {
    pub path: String,
}

impl Validate for LeaderboardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("leaderboard path must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            path: "leaderboard.txt".to_string(),
        }
    }
}
