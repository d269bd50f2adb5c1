mod bot_config;
mod config;
mod leaderboard_config;
mod logging_config;

pub use bot_config::BotConfig;
pub use config::get_config_manager;
pub use leaderboard_config::LeaderboardConfig;
pub use logging_config::LoggingConfig;
