//! Echo brain implementation - replies with the prompt.

use brain_core::{async_trait, Brain, BrainError};

/// A brain that replies with the prompt it receives.
///
/// Useful for checking exactly which prompt a handler built.
#[derive(Debug, Clone, Default)]
pub struct EchoBrain {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoBrain {
    /// Create a new EchoBrain with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoBrain with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_brain::EchoBrain;
    ///
    /// let brain = EchoBrain::with_prefix("Echo: ");
    /// // Will reply with "Echo: <prompt>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Brain for EchoBrain {
    async fn invoke(&self, prompt: &str) -> Result<String, BrainError> {
        Ok(match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, prompt),
            None => prompt.to_string(),
        })
    }

    fn name(&self) -> &str {
        "EchoBrain"
    }
}
