//! Ollama-backed model client.
//!
//! This crate provides a [`Brain`] implementation that sends each prompt to an
//! Ollama server's `/api/generate` endpoint and returns the model's reply.
//!
//! # Features
//!
//! - One long-lived HTTP client, shared by every request
//! - Model name fixed at construction time
//! - Optional system prompt (inline or loaded from a file)
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use ollama_brain::{Brain, OllamaBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = OllamaBrain::from_env()?;
//!     let reply = brain.invoke("Solve this: 2 + 2").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;

pub use brain::OllamaBrain;
pub use config::{OllamaBrainConfig, OllamaBrainConfigBuilder, DEFAULT_API_URL, DEFAULT_MODEL};

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, BrainError};
