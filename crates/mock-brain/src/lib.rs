//! Mock model clients for the intent router.
//!
//! This crate provides implementations of the `Brain` trait for testing:
//! - `EchoBrain` - Replies with the prompt it was given
//! - `RecordingBrain` - Replies with a canned answer and records every prompt
//! - `FailingBrain` - Fails every call, simulating an unreachable model server
//! - `DelayedBrain` - Wraps another brain with artificial latency
//!
//! For production use, see the `ollama-brain` crate.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{Brain, RecordingBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let brain = RecordingBrain::new("4");
//!
//!     let reply = brain.invoke("Solve this: 2 + 2").await?;
//!     assert_eq!(reply, "4");
//!     assert_eq!(brain.prompts().await, vec!["Solve this: 2 + 2".to_string()]);
//!     Ok(())
//! }
//! ```

mod delayed;
mod echo;
mod failing;
mod recording;

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, BrainError};

pub use delayed::DelayedBrain;
pub use echo::EchoBrain;
pub use failing::FailingBrain;
pub use recording::RecordingBrain;
