//! Intent routing for free-text requests.
//!
//! This crate provides the [`Orchestrator`] type, which turns one request into
//! one model call:
//!
//! # Architecture
//!
//! ```text
//! request text
//!      ↓
//! ┌────────────────────────────────────────────────────┐
//! │                   ORCHESTRATOR                     │
//! │                                                    │
//! │  1. classify (pure)                                │
//! │       "summarize" (any case)  → summarize          │
//! │       one of + - * /          → math               │
//! │       anything else           → fallback           │
//! │         ↓                                          │
//! │  2. pick the single handler for that intent        │
//! │         ↓                                          │
//! │  3. handler builds a prompt, calls the Brain       │
//! │         ↓                                          │
//! │  4. reply returned unchanged                       │
//! └────────────────────────────────────────────────────┘
//!      ↓
//! Presenter (console line, HTTP response, ...)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use orchestrator::{ConsolePresenter, Orchestrator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = Orchestrator::from_env()?;
//!     orchestrator.process("2 + 2", &ConsolePresenter::stdout()).await?;
//!     Ok(())
//! }
//! ```

mod error;
mod handlers;
mod intent;
mod orchestrator;
mod output;

// Public exports
pub use error::OrchestratorError;
pub use handlers::{
    FallbackHandler, Handler, MathHandler, SummarizerHandler, FALLBACK_PROMPT_PREFIX,
    MATH_PROMPT_PREFIX, SUMMARIZE_MARKER, SUMMARIZE_PROMPT_PREFIX,
};
pub use intent::{classify, Intent, ARITHMETIC_OPERATORS, SUMMARIZE_KEYWORD};
pub use orchestrator::{handler_for, Invocation, Orchestrator};
pub use output::{ConsolePresenter, LoggingPresenter, Presenter, ReturnPresenter, OUTPUT_LABEL};

// Re-export commonly used types from dependencies
pub use brain_core::{Brain, BrainError};
pub use ollama_brain::{OllamaBrain, OllamaBrainConfig};
