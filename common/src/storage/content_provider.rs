use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use super::StorageError;

/// Raw text backing for a persisted value. `Ok(None)` means nothing stored yet.
pub trait ContentProvider {
    fn read_content(&self) -> Result<Option<String>, StorageError>;
    fn write_content(&self, content: &str) -> Result<(), StorageError>;
}

pub struct FileContentProvider {
    file_path: PathBuf,
}

impl FileContentProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    fn location(&self) -> String {
        self.file_path.display().to_string()
    }
}

impl ContentProvider for FileContentProvider {
    fn read_content(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                Err(StorageError::Parse(format!("{}: {}", self.location(), err)))
            }
            Err(source) => Err(StorageError::Read {
                location: self.location(),
                source,
            }),
        }
    }

    /// Replaces the whole file.
    fn write_content(&self, content: &str) -> Result<(), StorageError> {
        std::fs::write(&self.file_path, content).map_err(|source| StorageError::Write {
            location: self.location(),
            source,
        })
    }
}

/// In-memory stand-in for a file. Reads and writes can be made to fail.
#[derive(Default)]
pub struct MemoryContentProvider {
    content: Mutex<Option<String>>,
    reject_reads: bool,
    reject_writes: bool,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Mutex::new(Some(content.into())),
            reject_reads: false,
            reject_writes: false,
        }
    }

    pub fn unreadable(mut self) -> Self {
        self.reject_reads = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.reject_writes = true;
        self
    }

    pub fn content(&self) -> Option<String> {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ContentProvider for MemoryContentProvider {
    fn read_content(&self) -> Result<Option<String>, StorageError> {
        if self.reject_reads {
            return Err(StorageError::Read {
                location: "memory".to_string(),
                source: std::io::Error::new(ErrorKind::PermissionDenied, "store is unreadable"),
            });
        }
        Ok(self.content())
    }

    fn write_content(&self, content: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Write {
                location: "memory".to_string(),
                source: std::io::Error::new(ErrorKind::PermissionDenied, "store is read-only"),
            });
        }
        *self.content.lock().unwrap_or_else(PoisonError::into_inner) = Some(content.to_string());
        Ok(())
    }
}
