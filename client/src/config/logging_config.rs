use noughts_common::logger::LogLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    #[serde(default)]
    pub use_prefix: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            use_prefix: false,
        }
    }
}
