use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("history file is corrupt: {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
