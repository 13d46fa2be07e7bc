//! Route a single request through the orchestrator.
//!
//! Run with: cargo run -p orchestrator --example route_once -- "summarize: Rust is a systems language."
//!
//! Configuration via .env file or environment variables:
//!   OLLAMA_API_URL - Ollama server URL (default: http://localhost:11434)
//!   OLLAMA_MODEL   - Model name (default: mistral)

use orchestrator::{classify, LoggingPresenter, Orchestrator};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("orchestrator=debug".parse()?)
                .add_directive("ollama_brain=info".parse()?),
        )
        .init();

    let text = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() { "2 + 2".to_string() } else { text };

    println!("Request: {}", text);
    println!("Intent:  {}", classify(&text));

    let orchestrator = Orchestrator::from_env()?;
    orchestrator.process(&text, &LoggingPresenter).await?;

    Ok(())
}
