use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Reading or writing a backing file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data is not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The key cannot be mapped to a file name.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
