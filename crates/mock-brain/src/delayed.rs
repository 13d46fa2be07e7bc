//! Delayed brain implementation - wraps another brain with artificial delay.

use std::time::Duration;

use brain_core::{async_trait, Brain, BrainError};
use tokio::time::sleep;

/// A brain that wraps another brain and adds artificial delay.
///
/// Simulates model latency, e.g. to check that independent requests can be
/// in flight at the same time.
pub struct DelayedBrain<B: Brain> {
    inner: B,
    delay: Duration,
}

impl<B: Brain> DelayedBrain<B> {
    /// Create a new DelayedBrain wrapping the given brain with the specified delay.
    pub fn new(inner: B, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a brain with a delay in milliseconds.
    pub fn with_millis(inner: B, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Access the wrapped brain.
    pub fn inner(&self) -> &B {
        &self.inner
    }
}

#[async_trait]
impl<B: Brain> Brain for DelayedBrain<B> {
    async fn invoke(&self, prompt: &str) -> Result<String, BrainError> {
        sleep(self.delay).await;
        self.inner.invoke(prompt).await
    }

    fn name(&self) -> &str {
        "DelayedBrain"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}
