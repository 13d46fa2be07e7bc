//! Core trait and types for model client implementations.
//!
//! The intent router only needs one capability from a language model:
//! "given a prompt, return text". This crate defines that seam:
//!
//! - [`Brain`] - The trait every model client implements
//! - [`BrainError`] - Error types for model client operations
//!
//! # Example
//!
//! ```rust
//! use brain_core::{async_trait, Brain, BrainError};
//!
//! struct ShoutBrain;
//!
//! #[async_trait]
//! impl Brain for ShoutBrain {
//!     async fn invoke(&self, prompt: &str) -> Result<String, BrainError> {
//!         Ok(prompt.to_uppercase())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "ShoutBrain"
//!     }
//! }
//! ```

mod error;
mod trait_def;

pub use error::BrainError;
pub use trait_def::Brain;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
