mod config_manager;
mod content_provider;
mod error;
mod serializer;
mod validate;

pub use config_manager::ConfigManager;
pub use content_provider::{ContentProvider, FileContentProvider, MemoryContentProvider};
pub use error::StorageError;
pub use serializer::{JsonSerializer, Serializer, YamlSerializer};
pub use validate::Validate;
