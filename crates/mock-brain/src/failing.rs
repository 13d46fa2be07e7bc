//! Failing brain implementation - every call errors.

use std::sync::atomic::{AtomicUsize, Ordering};

use brain_core::{async_trait, Brain, BrainError};

/// A brain whose every call fails, as if the model server were down.
#[derive(Debug, Default)]
pub struct FailingBrain {
    reason: String,
    attempts: AtomicUsize,
}

impl FailingBrain {
    /// Create a brain that fails with a `Network` error carrying `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Create a brain that fails with "connection refused".
    pub fn connection_refused() -> Self {
        Self::new("connection refused")
    }

    /// Number of calls attempted so far.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Brain for FailingBrain {
    async fn invoke(&self, _prompt: &str) -> Result<String, BrainError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(BrainError::Network(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "FailingBrain"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}
