//! Error types for scout-core

use thiserror::Error;

use crate::config::ConfigError;
use crate::record::RecordError;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors from reading or writing the record file.
///
/// The store's public mutators log these and carry on; only the `try_*`
/// methods hand them back.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a JSON array of records, or a record failed to encode
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record decoded but holds values outside its scales
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),

    /// The backing file path could not be resolved
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl StoreError {
    /// True when the backing file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
