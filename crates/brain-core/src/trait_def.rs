//! The Brain trait definition.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BrainError;

/// A language-model client: turns a prompt into a reply.
///
/// Implementations range from canned test doubles to HTTP clients for a
/// model server. The trait is object-safe and can be used as `Arc<dyn Brain>`.
/// One instance is expected to be built at startup and shared by every request,
/// so implementations must be safe for concurrent use.
#[async_trait]
pub trait Brain: Send + Sync {
    /// Send a prompt to the model and return its reply verbatim.
    ///
    /// Transport failures are returned as errors; they are never turned into
    /// an empty reply.
    async fn invoke(&self, prompt: &str) -> Result<String, BrainError>;

    /// Get a human-readable name for this implementation.
    fn name(&self) -> &str;

    /// Check if the backing model can serve requests.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}

#[async_trait]
impl<B: Brain + ?Sized> Brain for Arc<B> {
    async fn invoke(&self, prompt: &str) -> Result<String, BrainError> {
        (**self).invoke(prompt).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    async fn is_ready(&self) -> bool {
        (**self).is_ready().await
    }
}

#[async_trait]
impl<B: Brain + ?Sized> Brain for Box<B> {
    async fn invoke(&self, prompt: &str) -> Result<String, BrainError> {
        (**self).invoke(prompt).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    async fn is_ready(&self) -> bool {
        (**self).is_ready().await
    }
}
