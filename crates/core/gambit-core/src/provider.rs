//! Completion provider seam
//!
//! Provider crates implement [`CompletionProvider`] for a concrete vendor; the
//! evaluator only sees this trait, so credentials and client construction stay
//! with the caller instead of ambient module state.

use crate::Result;
use async_trait::async_trait;

/// One chat-completion call: a system instruction block and a user block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// System-role instruction text
    pub system: String,

    /// User-role message text
    pub user: String,
}

/// A chat-completion backend
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Perform one blocking completion call and return the raw reply text
    ///
    /// Any upstream failure (network, auth, malformed provider response) maps
    /// to [`crate::GambitError::Provider`]; callers never retry.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
