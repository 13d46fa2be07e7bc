//! Per-intent handlers.
//!
//! Each handler turns the raw request into a task-specific prompt, sends it to
//! the model client, and hands back whatever the model replied. No validation
//! of the request, no retries, no post-processing of the reply.

use async_trait::async_trait;
use brain_core::Brain;
use tracing::debug;

use crate::error::OrchestratorError;

/// Instruction prepended to arithmetic requests.
pub const MATH_PROMPT_PREFIX: &str = "Solve this: ";

/// Instruction prepended to summarization requests.
pub const SUMMARIZE_PROMPT_PREFIX: &str = "Summarize this: ";

/// Instruction prepended to requests no other handler claims.
pub const FALLBACK_PROMPT_PREFIX: &str = "Cannot identify action for: ";

/// Literal marker removed from summarization requests. Case-sensitive.
pub const SUMMARIZE_MARKER: &str = "summarize:";

/// A handler for one intent.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Build the prompt sent to the model for this request.
    fn build_prompt(&self, text: &str) -> String;

    /// Run the request through the model and return its reply unchanged.
    ///
    /// A model client failure is returned as-is; it is never replaced by an
    /// empty reply.
    async fn handle(&self, text: &str, brain: &dyn Brain) -> Result<String, OrchestratorError> {
        let prompt = self.build_prompt(text);
        debug!(handler = self.name(), prompt = %prompt, "HANDLER_PROMPT");

        let reply = brain.invoke(&prompt).await?;
        debug!(handler = self.name(), reply_len = reply.len(), "HANDLER_REPLY");

        Ok(reply)
    }
}

/// Sends arithmetic requests to the model verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathHandler;

impl Handler for MathHandler {
    fn name(&self) -> &'static str {
        "math"
    }

    fn build_prompt(&self, text: &str) -> String {
        format!("{}{}", MATH_PROMPT_PREFIX, text)
    }
}

/// Strips the `summarize:` marker and asks the model for a summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummarizerHandler;

impl SummarizerHandler {
    /// Remove every occurrence of [`SUMMARIZE_MARKER`] and trim whitespace.
    ///
    /// The match is case-sensitive, so `"Summarize: text"` keeps its prefix.
    pub fn clean(text: &str) -> String {
        text.replace(SUMMARIZE_MARKER, "").trim().to_string()
    }
}

impl Handler for SummarizerHandler {
    fn name(&self) -> &'static str {
        "summarizer"
    }

    fn build_prompt(&self, text: &str) -> String {
        format!("{}{}", SUMMARIZE_PROMPT_PREFIX, Self::clean(text))
    }
}

/// Passes unrecognized requests to the model with a note that no action matched.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackHandler;

impl Handler for FallbackHandler {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn build_prompt(&self, text: &str) -> String {
        format!("{}{}", FALLBACK_PROMPT_PREFIX, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_brain::{EchoBrain, FailingBrain, RecordingBrain};

    #[test]
    fn test_math_prompt_is_verbatim() {
        assert_eq!(MathHandler.build_prompt("2 + 2"), "Solve this: 2 + 2");
        assert_eq!(MathHandler.build_prompt("  1 +  "), "Solve this:   1 +  ");
    }

    #[test]
    fn test_fallback_prompt() {
        assert_eq!(
            FallbackHandler.build_prompt("hello there"),
            "Cannot identify action for: hello there"
        );
        assert_eq!(FallbackHandler.build_prompt(""), "Cannot identify action for: ");
    }

    #[test]
    fn test_summarizer_strips_marker_and_whitespace() {
        assert_eq!(
            SummarizerHandler.build_prompt("summarize: The quick brown fox jumps."),
            "Summarize this: The quick brown fox jumps."
        );
        assert_eq!(SummarizerHandler::clean("  summarize:   padded  "), "padded");
    }

    #[test]
    fn test_summarizer_without_marker_is_noop() {
        assert_eq!(SummarizerHandler::clean("summarize 3 + 4"), "summarize 3 + 4");
    }

    #[test]
    fn test_summarizer_marker_anywhere() {
        assert_eq!(
            SummarizerHandler::clean("please summarize: this text"),
            "please  this text"
        );
        assert_eq!(SummarizerHandler::clean("summarize:a summarize:b"), "a b");
    }

    #[test]
    fn test_summarizer_marker_is_case_sensitive() {
        assert_eq!(SummarizerHandler::clean("Summarize: text"), "Summarize: text");
        assert_eq!(SummarizerHandler::clean("SUMMARIZE: text"), "SUMMARIZE: text");
    }

    #[tokio::test]
    async fn test_handle_returns_model_reply_unchanged() {
        let brain = RecordingBrain::new("  4\n");

        let reply = MathHandler.handle("2 + 2", &brain).await.unwrap();

        assert_eq!(reply, "  4\n");
        assert_eq!(brain.prompts().await, vec!["Solve this: 2 + 2"]);
    }

    #[tokio::test]
    async fn test_handle_empty_reply_is_success() {
        let brain = RecordingBrain::new("");
        let reply = FallbackHandler.handle("hi", &brain).await.unwrap();
        assert_eq!(reply, "");
    }

    #[tokio::test]
    async fn test_handle_through_echo_brain() {
        let reply = SummarizerHandler
            .handle("summarize: abc", &EchoBrain::new())
            .await
            .unwrap();
        assert_eq!(reply, "Summarize this: abc");
    }

    #[tokio::test]
    async fn test_handle_propagates_model_failure() {
        let brain = FailingBrain::connection_refused();

        let err = SummarizerHandler.handle("summarize: x", &brain).await.unwrap_err();

        assert!(matches!(err, OrchestratorError::Brain(_)));
        assert_eq!(brain.attempts(), 1);
    }
}
