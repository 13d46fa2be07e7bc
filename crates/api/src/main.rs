use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use api::{app, AppState, SharedBrain};
use orchestrator::{Brain, OllamaBrain, Orchestrator};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("orchestrator=info,api=info,ollama_brain=info")),
        )
        .init();

    let addr = env::var("ROUTER_API_ADDR").unwrap_or_else(|_| "127.0.0.1:8787".to_string());
    let api_token = env::var("ROUTER_API_TOKEN").ok().filter(|t| !t.trim().is_empty());

    let brain = OllamaBrain::from_env()?;
    info!(model = brain.model(), url = %brain.config().api_url, "Model client configured");
    if !brain.is_ready().await {
        tracing::warn!("Ollama is not ready yet; requests will fail until it is");
    }

    let brain: SharedBrain = Arc::new(brain);
    let state = AppState::new(Orchestrator::new(brain), api_token);

    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| format!("Invalid ROUTER_API_ADDR {:?}: {}", addr, e))?;
    info!(%addr, "Router API listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
