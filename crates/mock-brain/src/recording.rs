//! Recording brain implementation - canned reply, remembers prompts.

use brain_core::{async_trait, Brain, BrainError};
use tokio::sync::Mutex;

/// A brain that returns a fixed reply and records every prompt it is sent.
pub struct RecordingBrain {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingBrain {
    /// Create a brain that always replies with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// All prompts received so far, oldest first.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }

    /// Number of calls made so far.
    pub async fn call_count(&self) -> usize {
        self.prompts.lock().await.len()
    }

    /// The most recent prompt, if any.
    pub async fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().await.last().cloned()
    }
}

#[async_trait]
impl Brain for RecordingBrain {
    async fn invoke(&self, prompt: &str) -> Result<String, BrainError> {
        self.prompts.lock().await.push(prompt.to_string());
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "RecordingBrain"
    }
}
