pub mod games;
pub mod identifiers;
pub mod leaderboard;
pub mod logger;
pub mod storage;

pub use identifiers::{Username, UsernameError};
