use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use super::{ContentProvider, FileContentProvider, Serializer, StorageError, Validate, YamlSerializer};

/// Loads a config once and caches it. A missing backing file yields `TConfig::default()`.
pub struct ConfigManager<TContentProvider, TConfig, TSerializer = YamlSerializer>
where
    TContentProvider: ContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: Serializer<TConfig>,
{
    serializer: TSerializer,
    content_provider: TContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentProvider, TConfig, YamlSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentProvider::new(file_path), YamlSerializer::new())
    }
}

impl<TContentProvider, TConfig, TSerializer> ConfigManager<TContentProvider, TConfig, TSerializer>
where
    TContentProvider: ContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: Serializer<TConfig>,
{
    pub fn new(content_provider: TContentProvider, serializer: TSerializer) -> Self {
        Self {
            serializer,
            content_provider,
            config: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, StorageError> {
        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.content_provider.read_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config.validate().map_err(StorageError::Validation)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), StorageError> {
        config.validate().map_err(StorageError::Validation)?;

        let serialized = self.serializer.serialize(config)?;
        self.content_provider.write_content(&serialized)?;

        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(config.clone());
        Ok(())
    }
}
