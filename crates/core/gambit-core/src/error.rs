//! Error types for Gambit

use thiserror::Error;

/// Main error type for Gambit operations
#[derive(Debug, Error)]
pub enum GambitError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Completion provider error (upstream LLM call failed)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),
}

impl GambitError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a server error
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }
}

/// Convenient Result type using GambitError
pub type Result<T> = std::result::Result<T, GambitError>;
