//! Main orchestrator that routes a request to exactly one handler.

use brain_core::Brain;
use ollama_brain::OllamaBrain;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::OrchestratorError;
use crate::handlers::{FallbackHandler, Handler, MathHandler, SummarizerHandler};
use crate::intent::{classify, Intent};
use crate::output::Presenter;

/// The record of one completed routing pass.
///
/// Only built once a handler has returned, so holding an `Invocation` means
/// the request was classified exactly once and has a result. A failed pass
/// yields an error instead and no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// The request text as received.
    pub request: String,
    /// The intent the classifier assigned.
    pub intent: Intent,
    /// The model's reply, unchanged.
    pub result: String,
}

/// Look up the handler for an intent.
///
/// Exhaustive over [`Intent`]: adding an intent without a handler does not compile.
pub fn handler_for(intent: Intent) -> &'static dyn Handler {
    match intent {
        Intent::Math => &MathHandler,
        Intent::Summarize => &SummarizerHandler,
        Intent::Fallback => &FallbackHandler,
    }
}

/// Routes requests: classify, pick one handler, run it, return its result.
///
/// The orchestrator holds only the model client. Nothing is kept between
/// calls, so one instance can serve any number of callers.
pub struct Orchestrator<B: Brain> {
    brain: B,
}

impl<B: Brain> Orchestrator<B> {
    /// Create an orchestrator around an already constructed model client.
    pub fn new(brain: B) -> Self {
        Self { brain }
    }

    /// The model client every handler uses.
    pub fn brain(&self) -> &B {
        &self.brain
    }

    /// Route a request and return the handler's result.
    pub async fn route(&self, text: &str) -> Result<String, OrchestratorError> {
        self.dispatch(text).await.map(|invocation| invocation.result)
    }

    /// Route a request and return the full invocation record.
    ///
    /// `Start → Classify → {Math | Summarize | Fallback} → Done`; a model client
    /// failure ends the pass with an error.
    pub async fn dispatch(&self, text: &str) -> Result<Invocation, OrchestratorError> {
        let intent = classify(text);
        let handler = handler_for(intent);

        info!(
            intent = %intent,
            handler = handler.name(),
            brain = self.brain.name(),
            request_len = text.len(),
            "ROUTE_SELECTED"
        );

        let result = match handler.handle(text, &self.brain).await {
            Ok(result) => result,
            Err(e) => {
                warn!(intent = %intent, error = %e, "ROUTE_FAILED");
                return Err(e);
            }
        };

        Ok(Invocation {
            request: text.to_string(),
            intent,
            result,
        })
    }

    /// Route a request and hand the result to `presenter`.
    ///
    /// The presenter is only called when routing succeeded.
    pub async fn process<P: Presenter>(
        &self,
        text: &str,
        presenter: &P,
    ) -> Result<P::Output, OrchestratorError> {
        let result = self.route(text).await?;
        presenter.present(result).await
    }
}

impl Orchestrator<OllamaBrain> {
    /// Create an orchestrator backed by Ollama, configured from the environment.
    ///
    /// See [`ollama_brain::OllamaBrainConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, OrchestratorError> {
        let brain = OllamaBrain::from_env()?;
        Ok(Self::new(brain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{ConsolePresenter, ReturnPresenter};
    use mock_brain::{DelayedBrain, EchoBrain, FailingBrain, RecordingBrain};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_math_request() {
        let orchestrator = Orchestrator::new(RecordingBrain::new("4"));

        let invocation = orchestrator.dispatch("2 + 2").await.unwrap();

        assert_eq!(invocation.intent, Intent::Math);
        assert_eq!(invocation.request, "2 + 2");
        assert_eq!(invocation.result, "4");
        assert_eq!(
            orchestrator.brain().prompts().await,
            vec!["Solve this: 2 + 2"]
        );
    }

    #[tokio::test]
    async fn test_summarize_request() {
        let orchestrator = Orchestrator::new(RecordingBrain::new("A fox jumps."));

        let invocation = orchestrator
            .dispatch("summarize: The quick brown fox jumps.")
            .await
            .unwrap();

        assert_eq!(invocation.intent, Intent::Summarize);
        assert_eq!(invocation.result, "A fox jumps.");
        assert_eq!(
            orchestrator.brain().last_prompt().await.as_deref(),
            Some("Summarize this: The quick brown fox jumps.")
        );
    }

    #[tokio::test]
    async fn test_fallback_request() {
        let orchestrator = Orchestrator::new(RecordingBrain::new("?"));

        let invocation = orchestrator.dispatch("hello there").await.unwrap();

        assert_eq!(invocation.intent, Intent::Fallback);
        assert_eq!(
            orchestrator.brain().last_prompt().await.as_deref(),
            Some("Cannot identify action for: hello there")
        );
    }

    #[tokio::test]
    async fn test_summarize_takes_precedence_over_math() {
        let orchestrator = Orchestrator::new(RecordingBrain::new("7"));

        let invocation = orchestrator.dispatch("summarize 3 + 4").await.unwrap();

        assert_eq!(invocation.intent, Intent::Summarize);
        assert_eq!(
            orchestrator.brain().last_prompt().await.as_deref(),
            Some("Summarize this: summarize 3 + 4")
        );
    }

    #[tokio::test]
    async fn test_capitalized_marker_is_kept() {
        let orchestrator = Orchestrator::new(EchoBrain::new());
        let result = orchestrator.route("Summarize: text").await.unwrap();
        assert_eq!(result, "Summarize this: Summarize: text");
    }

    #[tokio::test]
    async fn test_empty_request_goes_to_fallback() {
        let orchestrator = Orchestrator::new(EchoBrain::new());
        let invocation = orchestrator.dispatch("").await.unwrap();
        assert_eq!(invocation.intent, Intent::Fallback);
        assert_eq!(invocation.result, "Cannot identify action for: ");
    }

    #[tokio::test]
    async fn test_exactly_one_model_call_per_request() {
        let orchestrator = Orchestrator::new(RecordingBrain::new("ok"));

        for text in ["1 - 1", "summarize: a", "what?", ""] {
            orchestrator.route(text).await.unwrap();
        }

        assert_eq!(orchestrator.brain().call_count().await, 4);
    }

    #[tokio::test]
    async fn test_route_returns_result_unchanged() {
        let orchestrator = Orchestrator::new(RecordingBrain::new("\n  raw reply \n"));
        assert_eq!(orchestrator.route("3 * 3").await.unwrap(), "\n  raw reply \n");
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let orchestrator = Orchestrator::new(FailingBrain::connection_refused());

        let err = orchestrator.route("2 + 2").await.unwrap_err();

        assert!(matches!(err, OrchestratorError::Brain(_)));
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(orchestrator.brain().attempts(), 1);
    }

    #[tokio::test]
    async fn test_presenter_not_called_on_failure() {
        let orchestrator = Orchestrator::new(FailingBrain::connection_refused());
        let presenter = ConsolePresenter::new(Vec::new());

        let result = orchestrator.process("summarize: x", &presenter).await;

        assert!(result.is_err());
        assert!(presenter.into_inner().is_empty());
    }

    #[tokio::test]
    async fn test_process_with_console_presenter() {
        let orchestrator = Orchestrator::new(RecordingBrain::new("4"));
        let presenter = ConsolePresenter::new(Vec::new());

        orchestrator.process("2 + 2", &presenter).await.unwrap();

        assert_eq!(presenter.into_inner(), b"Output: 4\n");
    }

    #[tokio::test]
    async fn test_process_with_return_presenter() {
        let orchestrator = Orchestrator::new(EchoBrain::with_prefix("> "));

        let result = orchestrator.process("hi", &ReturnPresenter).await.unwrap();

        assert_eq!(result, "> Cannot identify action for: hi");
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_client() {
        let brain = Arc::new(DelayedBrain::with_millis(RecordingBrain::new("done"), 50));
        let orchestrator = Orchestrator::new(brain.clone());

        let (a, b) = tokio::join!(orchestrator.route("1 + 1"), orchestrator.route("hello"));

        assert_eq!(a.unwrap(), "done");
        assert_eq!(b.unwrap(), "done");

        let mut prompts = brain.inner().prompts().await;
        prompts.sort();
        assert_eq!(
            prompts,
            vec!["Cannot identify action for: hello", "Solve this: 1 + 1"]
        );
    }

    #[test]
    fn test_handler_table_is_total() {
        let names: Vec<&str> = Intent::ALL.iter().map(|i| handler_for(*i).name()).collect();
        assert_eq!(names, vec!["summarizer", "math", "fallback"]);
    }
}
