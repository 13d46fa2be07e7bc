//! Intent classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Keyword that marks a summarization request (matched case-insensitively).
pub const SUMMARIZE_KEYWORD: &str = "summarize";

/// Characters that mark an arithmetic request.
pub const ARITHMETIC_OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// The category of a request. Selects which handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Arithmetic expression to solve.
    Math,
    /// Text to summarize.
    Summarize,
    /// Anything else.
    Fallback,
}

impl Intent {
    /// Every intent, in classification priority order.
    pub const ALL: [Intent; 3] = [Intent::Summarize, Intent::Math, Intent::Fallback];

    /// Stable lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Math => "math",
            Intent::Summarize => "summarize",
            Intent::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a request.
///
/// First match wins:
/// 1. contains "summarize" (any case) → [`Intent::Summarize`]
/// 2. contains one of `+ - * /` → [`Intent::Math`]
/// 3. otherwise → [`Intent::Fallback`]
///
/// Total and pure: every string, including the empty one, gets a label.
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();

    if lowered.contains(SUMMARIZE_KEYWORD) {
        return Intent::Summarize;
    }

    if text.contains(&ARITHMETIC_OPERATORS[..]) {
        return Intent::Math;
    }

    Intent::Fallback
}
