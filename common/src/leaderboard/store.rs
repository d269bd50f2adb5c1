use std::path::PathBuf;
use thiserror::Error;

use crate::identifiers::Username;
use crate::storage::{
    ContentProvider, FileContentProvider, JsonSerializer, Serializer, StorageError,
};
use crate::{log, log_warn};
use super::Leaderboard;

/// Non-fatal problem met while loading. The returned leaderboard is empty.
#[derive(Debug, Error)]
pub enum LoadWarning {
    #[error("couldn't read the leaderboard")]
    Unreadable(#[source] StorageError),
    #[error("couldn't read data from the leaderboard file")]
    Corrupt(#[source] StorageError),
}

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("couldn't read the existing leaderboard, nothing was saved")]
    Unreadable(#[source] StorageError),
    #[error("failed to save the leaderboard")]
    StorageWrite(#[source] StorageError),
    #[error("failed to encode the leaderboard")]
    Serialize(#[source] StorageError),
}

#[derive(Debug, Default)]
pub struct LeaderboardLoad {
    pub leaderboard: Leaderboard,
    pub warning: Option<LoadWarning>,
}

/// Result of a successful save. `replaced` carries the problem with the content that was overwritten.
#[derive(Debug)]
pub struct LeaderboardSave {
    pub leaderboard: Leaderboard,
    pub replaced: Option<LoadWarning>,
}

/// Flat username to score storage. Every save re-reads, updates and rewrites the whole mapping.
/// There is no locking, so two processes saving at once can lose an update.
/// Corrupt content is replaced on save. Content that can't be read at all is left alone.
pub trait LeaderboardStore {
    fn load(&self) -> LeaderboardLoad;

    fn save(&self, username: &Username, delta: i64) -> Result<LeaderboardSave, LeaderboardError>;
}

pub struct ContentLeaderboardStore<TContentProvider, TSerializer = JsonSerializer>
where
    TContentProvider: ContentProvider,
    TSerializer: Serializer<Leaderboard>,
{
    content_provider: TContentProvider,
    serializer: TSerializer,
}

impl ContentLeaderboardStore<FileContentProvider, JsonSerializer> {
    pub fn from_json_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentProvider::new(file_path), JsonSerializer::new())
    }
}

impl<TContentProvider, TSerializer> ContentLeaderboardStore<TContentProvider, TSerializer>
where
    TContentProvider: ContentProvider,
    TSerializer: Serializer<Leaderboard>,
{
    pub fn new(content_provider: TContentProvider, serializer: TSerializer) -> Self {
        Self {
            content_provider,
            serializer,
        }
    }

    pub fn content_provider(&self) -> &TContentProvider {
        &self.content_provider
    }
}

impl<TContentProvider, TSerializer> LeaderboardStore
    for ContentLeaderboardStore<TContentProvider, TSerializer>
where
    TContentProvider: ContentProvider,
    TSerializer: Serializer<Leaderboard>,
{
    fn load(&self) -> LeaderboardLoad {
        let content = match self.content_provider.read_content() {
            Ok(Some(content)) => content,
            Ok(None) => {
                log!("Leaderboard not found, starting empty");
                return LeaderboardLoad::default();
            }
            Err(e @ StorageError::Parse(_)) => {
                log_warn!("Leaderboard content is corrupt: {}", e);
                return LeaderboardLoad {
                    leaderboard: Leaderboard::new(),
                    warning: Some(LoadWarning::Corrupt(e)),
                };
            }
            Err(e) => {
                log_warn!("Leaderboard unreadable: {}", e);
                return LeaderboardLoad {
                    leaderboard: Leaderboard::new(),
                    warning: Some(LoadWarning::Unreadable(e)),
                };
            }
        };

        match self.serializer.deserialize(&content) {
            Ok(leaderboard) => LeaderboardLoad {
                leaderboard,
                warning: None,
            },
            Err(e) => {
                log_warn!("Leaderboard content is corrupt: {}", e);
                LeaderboardLoad {
                    leaderboard: Leaderboard::new(),
                    warning: Some(LoadWarning::Corrupt(e)),
                }
            }
        }
    }

    fn save(&self, username: &Username, delta: i64) -> Result<LeaderboardSave, LeaderboardError> {
        let LeaderboardLoad {
            mut leaderboard,
            warning,
        } = self.load();
        let replaced = match warning {
            Some(LoadWarning::Unreadable(e)) => return Err(LeaderboardError::Unreadable(e)),
            other => other,
        };
        let total = leaderboard.add(username, delta);

        let serialized = self
            .serializer
            .serialize(&leaderboard)
            .map_err(LeaderboardError::Serialize)?;
        self.content_provider
            .write_content(&serialized)
            .map_err(LeaderboardError::StorageWrite)?;

        log!("Saved {} for {}, total {}", delta, username, total);
        Ok(LeaderboardSave {
            leaderboard,
            replaced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryContentProvider;

    fn name(raw: &str) -> Username {
        Username::parse(raw).unwrap()
    }

    fn memory_store(provider: MemoryContentProvider) -> ContentLeaderboardStore<MemoryContentProvider> {
        ContentLeaderboardStore::new(provider, JsonSerializer::new())
    }

    #[test]
    fn test_scores_accumulate_across_saves() {
        let store = memory_store(MemoryContentProvider::new());
        store.save(&name("alice"), 1).unwrap();
        store.save(&name("alice"), 2).unwrap();

        let load = store.load();
        assert!(load.warning.is_none());
        assert_eq!(load.leaderboard.get("alice"), Some(3));
        assert_eq!(load.leaderboard.len(), 1);
    }

    #[test]
    fn test_save_keeps_other_players() {
        let store = memory_store(MemoryContentProvider::with_content(r#"{"bob": -1}"#));
        let saved = store.save(&name("alice"), 1).unwrap();

        assert!(saved.replaced.is_none());
        assert_eq!(saved.leaderboard.get("bob"), Some(-1));
        assert_eq!(saved.leaderboard.get("alice"), Some(1));
    }

    #[test]
    fn test_missing_store_loads_empty_without_warning() {
        let store = memory_store(MemoryContentProvider::new());
        let load = store.load();
        assert!(load.leaderboard.is_empty());
        assert!(load.warning.is_none());
    }

    #[test]
    fn test_corrupt_store_loads_empty_with_warning() {
        let store = memory_store(MemoryContentProvider::with_content("not json at all"));
        let load = store.load();

        assert!(load.leaderboard.is_empty());
        assert!(matches!(load.warning, Some(LoadWarning::Corrupt(_))));
    }

    #[test]
    fn test_save_over_corrupt_store_replaces_it_and_reports() {
        let store = memory_store(MemoryContentProvider::with_content("[1, 2"));
        let saved = store.save(&name("alice"), 1).unwrap();

        assert!(matches!(saved.replaced, Some(LoadWarning::Corrupt(_))));
        assert_eq!(store.content_provider().content().as_deref(), Some(r#"{"alice":1}"#));
    }

    #[test]
    fn test_non_integer_scores_count_as_corrupt() {
        let store = memory_store(MemoryContentProvider::with_content(r#"{"alice": "three"}"#));
        assert!(matches!(store.load().warning, Some(LoadWarning::Corrupt(_))));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let store = memory_store(MemoryContentProvider::with_content(r#"{"bob": 2}"#).read_only());
        let result = store.save(&name("alice"), 1);

        assert!(matches!(result, Err(LeaderboardError::StorageWrite(_))));
        assert_eq!(store.load().leaderboard.get("alice"), None);
    }

    #[test]
    fn test_unreadable_store_is_not_overwritten() {
        let store = memory_store(MemoryContentProvider::with_content(r#"{"bob": 5}"#).unreadable());

        assert!(matches!(store.load().warning, Some(LoadWarning::Unreadable(_))));
        let result = store.save(&name("alice"), 1);

        assert!(matches!(result, Err(LeaderboardError::Unreadable(_))));
        assert_eq!(store.content_provider().content().as_deref(), Some(r#"{"bob": 5}"#));
    }

    #[test]
    fn test_directory_in_place_of_file_is_unreadable() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("noughts_leaderboard_dir_{}", random_number));
        std::fs::create_dir_all(&path).unwrap();
        let store = ContentLeaderboardStore::from_json_file(&path);

        assert!(matches!(store.load().warning, Some(LoadWarning::Unreadable(_))));
        assert!(matches!(store.save(&name("alice"), 1), Err(LeaderboardError::Unreadable(_))));
        assert!(path.is_dir());

        std::fs::remove_dir_all(path).ok();
    }

    #[test]
    fn test_non_utf8_file_counts_as_corrupt() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("noughts_leaderboard_bin_{}.txt", random_number));
        std::fs::write(&path, [0xff, 0xfe, b'{']).unwrap();
        let store = ContentLeaderboardStore::from_json_file(&path);

        assert!(matches!(store.load().warning, Some(LoadWarning::Corrupt(_))));
        let saved = store.save(&name("alice"), 2).unwrap();
        assert!(matches!(saved.replaced, Some(LoadWarning::Corrupt(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"alice":2}"#);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_file_store_round_trip() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("noughts_leaderboard_{}.txt", random_number));
        let store = ContentLeaderboardStore::from_json_file(&path);

        assert!(store.load().leaderboard.is_empty());
        store.save(&name("alice"), 1).unwrap();
        store.save(&name("alice"), 2).unwrap();
        store.save(&name("bob"), -1).unwrap();

        let reopened = ContentLeaderboardStore::from_json_file(&path);
        let load = reopened.load();
        assert_eq!(load.leaderboard.get("alice"), Some(3));
        assert_eq!(load.leaderboard.get("bob"), Some(-1));

        std::fs::remove_file(path).ok();
    }
}
