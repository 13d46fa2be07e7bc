//! Output stage: where a routed result ends up.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::OrchestratorError;

/// Label printed before each result by [`ConsolePresenter`].
pub const OUTPUT_LABEL: &str = "Output: ";

/// Trait for delivering a result to whatever consumes the router.
///
/// Abstracted to support different front ends (console, HTTP, tests).
/// Implementations must pass the result through verbatim.
#[async_trait]
pub trait Presenter: Send + Sync {
    /// What the caller gets back after presenting.
    type Output: Send;

    /// Present a result.
    async fn present(&self, result: String) -> Result<Self::Output, OrchestratorError>;
}

/// Writes each result as an `Output: <result>` line.
///
/// Defaults to stdout; any writer can be used, which is how tests capture it.
pub struct ConsolePresenter<W: Write + Send = Stdout> {
    writer: Mutex<W>,
}

impl ConsolePresenter<Stdout> {
    /// Create a presenter that prints to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsolePresenter<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> ConsolePresenter<W> {
    /// Create a presenter that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Take back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> Presenter for ConsolePresenter<W> {
    type Output = ();

    async fn present(&self, result: String) -> Result<(), OrchestratorError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| OrchestratorError::PresentFailed("output writer poisoned".to_string()))?;

        writeln!(writer, "{}{}", OUTPUT_LABEL, result)
            .and_then(|_| writer.flush())
            .map_err(|e| OrchestratorError::PresentFailed(e.to_string()))
    }
}

/// Hands the result back to the caller, for request/response front ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnPresenter;

#[async_trait]
impl Presenter for ReturnPresenter {
    type Output = String;

    async fn present(&self, result: String) -> Result<String, OrchestratorError> {
        Ok(result)
    }
}

/// Emits each result through `tracing` instead of a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPresenter;

#[async_trait]
impl Presenter for LoggingPresenter {
    type Output = ();

    async fn present(&self, result: String) -> Result<(), OrchestratorError> {
        tracing::info!(result_len = result.len(), "Output: {}", result);
        Ok(())
    }
}
