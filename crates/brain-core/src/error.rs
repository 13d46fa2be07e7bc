//! Error types for model client operations.

use thiserror::Error;

/// Errors that can occur while invoking a model client.
#[derive(Debug, Error)]
pub enum BrainError {
    /// The client is misconfigured (missing model name, bad URL, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The model server could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The HTTP client gave up waiting for the model server.
    #[error("request timed out")]
    Timeout,

    /// The model server answered, but not with a usable reply.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
