use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::identifiers::Username;

/// Cumulative score per username. Stored as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    scores: BTreeMap<String, i64>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn get(&self, username: &str) -> Option<i64> {
        self.scores.get(username).copied()
    }

    /// Unknown names start from zero.
    pub fn add(&mut self, username: &Username, delta: i64) -> i64 {
        let entry = self.scores.entry(username.as_str().to_string()).or_insert(0);
        *entry = entry.saturating_add(delta);
        *entry
    }

    /// Highest score first, ties by name.
    pub fn ranked(&self) -> Vec<(&str, i64)> {
        let mut entries: Vec<(&str, i64)> = self
            .scores
            .iter()
            .map(|(name, &score)| (name.as_str(), score))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> Username {
        Username::parse(raw).unwrap()
    }

    #[test]
    fn test_add_accumulates() {
        let mut board = Leaderboard::new();
        assert_eq!(board.add(&name("alice"), 1), 1);
        assert_eq!(board.add(&name("alice"), 2), 3);
        assert_eq!(board.add(&name("bob"), -1), -1);
        assert_eq!(board.get("alice"), Some(3));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_ranked_orders_by_score_then_name() {
        let mut board = Leaderboard::new();
        board.add(&name("carol"), 2);
        board.add(&name("bob"), 5);
        board.add(&name("alice"), 2);
        board.add(&name("dave"), -3);

        assert_eq!(board.ranked(), vec![("bob", 5), ("alice", 2), ("carol", 2), ("dave", -3)]);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut board = Leaderboard::new();
        board.add(&name("alice"), 3);
        board.add(&name("bob"), -1);

        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"alice":3,"bob":-1}"#);

        let parsed: Leaderboard = serde_json::from_str(r#"{"bob": -1, "alice": 3}"#).unwrap();
        assert_eq!(parsed, board);
    }
}
