use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use orchestrator::{Brain, ConsolePresenter, OllamaBrain, OllamaBrainConfig, Orchestrator};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Shown before every interactive read.
const PROMPT: &str = "\nEnter your request/query (or type 'exit' to quit): ";

#[derive(Debug, Parser)]
#[command(name = "router")]
#[command(about = "Route a request to the math, summarize or fallback handler")]
struct Args {
    /// Request to route once. Omit to start the interactive prompt.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,

    /// Model name. Falls back to OLLAMA_MODEL env.
    #[arg(long)]
    model: Option<String>,

    /// Ollama server URL. Falls back to OLLAMA_API_URL env.
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout only carries prompts and results.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = OllamaBrainConfig::from_env()?;
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(url) = args.api_url {
        config.api_url = url.trim().trim_end_matches('/').to_string();
    }

    let orchestrator = Orchestrator::new(OllamaBrain::new(config)?);
    info!(
        "Router ready (brain: {}, model: {})",
        orchestrator.brain().name(),
        orchestrator.brain().model()
    );

    let presenter = ConsolePresenter::stdout();

    if !args.text.is_empty() {
        let text = args.text.join(" ");
        return Ok(match orchestrator.process(&text, &presenter).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        });
    }

    run_interactive(&orchestrator, &presenter).await?;
    Ok(ExitCode::SUCCESS)
}

/// Read requests from stdin until `exit`/`quit` or end of input.
///
/// A failed request is reported on stderr and the loop keeps going.
async fn run_interactive<B: Brain>(
    orchestrator: &Orchestrator<B>,
    presenter: &ConsolePresenter,
) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        if is_exit_command(&line) {
            println!("Exiting...");
            break;
        }

        if let Err(e) = orchestrator.process(&line, presenter).await {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

/// Whole-line match, case-insensitive. Surrounding spaces make it a request.
fn is_exit_command(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "exit" | "quit")
}
