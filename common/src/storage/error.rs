use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {location}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {location}")]
    Write {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content: {0}")]
    Parse(String),
    #[error("failed to serialize content: {0}")]
    Serialize(String),
    #[error("validation error: {0}")]
    Validation(String),
}
