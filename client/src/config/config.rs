use noughts_common::storage::{ConfigManager, FileContentProvider, Validate, YamlSerializer};
use serde::{Deserialize, Serialize};

use super::{BotConfig, LeaderboardConfig, LoggingConfig};

const CONFIG_FILE_NAME: &str = "noughts_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

/// Uses `path` when given, otherwise the file next to the executable.
pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentProvider, Config, YamlSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.leaderboard.validate()?;
        self.bot.validate()?;
        Ok(())
    }
}
