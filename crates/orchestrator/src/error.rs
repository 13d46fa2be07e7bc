//! Error types for orchestrator operations.

use brain_core::BrainError;
use thiserror::Error;

/// Errors that can occur while routing a request.
///
/// Classification and handler selection cannot fail, so every variant comes
/// from a collaborator: the model client or the output stage.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The model client failed; the request produced no result.
    #[error("model error: {0}")]
    Brain(#[from] BrainError),

    /// The output stage could not deliver the result.
    #[error("presentation failed: {0}")]
    PresentFailed(String),
}
