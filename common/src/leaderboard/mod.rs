mod scores;
mod store;

pub use scores::Leaderboard;
pub use store::{
    ContentLeaderboardStore, LeaderboardError, LeaderboardLoad, LeaderboardSave, LeaderboardStore,
    LoadWarning,
};
