//! Send a single prompt to the configured Ollama model.
//!
//! Run with: cargo run -p ollama-brain --example test_generate
//! Or with a custom prompt: cargo run -p ollama-brain --example test_generate -- "Your prompt here"
//!
//! Optional environment variables (or .env):
//!   OLLAMA_API_URL - Server URL (default: http://localhost:11434)
//!   OLLAMA_MODEL   - Model name (default: mistral)

use ollama_brain::{Brain, OllamaBrain};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let prompt = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Reply with a one-line greeting.".to_string()
    };

    let brain = OllamaBrain::from_env()?;

    println!("API URL: {}", brain.config().api_url);
    println!("Model: {}", brain.model());
    println!("Ready: {}", brain.is_ready().await);
    println!();
    println!("Sending: \"{}\"", prompt);
    println!("Waiting for response...\n");

    let reply = brain.invoke(&prompt).await?;

    println!("=== Response ===");
    println!("{}", reply);
    println!("================");

    Ok(())
}
