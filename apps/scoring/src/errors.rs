use thiserror::Error;

/// Failures of the persistence adapters. Only writes surface these: reads
/// recover to "absent" so a damaged store never blocks scoring.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not persist {key}: {source}")]
    Persist {
        key: String,
        #[source]
        source: tempfile::PersistError,
    },
}
