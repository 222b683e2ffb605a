//! Core error types for `apiagg`.

use thiserror::Error;

/// Core error type for `apiagg` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Unknown provider name.
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
