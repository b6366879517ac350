//! Error types for the KV store module.

use thiserror::Error;

/// Errors that can occur during KV store operations.
#[derive(Error, Debug)]
pub enum KvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "kv")]
    #[error("Fjall error: {0}")]
    Fjall(#[from] fjall::Error),

    #[error("Invalid stored value: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Store not initialized at {0}")]
    NotInitialized(String),
}
