mod config;
mod errors;
mod interview;
mod llm_client;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::CoachError;
use crate::interview::console::Console;
use crate::interview::runner::WorkflowRunner;
use crate::llm_client::LlmClient;

#[tokio::main]
async fn main() {
    // Load configuration first — a missing credential means the run never
    // starts and no client is built.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", CoachError::Config(format!("{e:#}")));
            eprintln!("Set ANTHROPIC_API_KEY in your environment or .env file.");
            std::process::exit(1);
        }
    };

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview Coach v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());

    println!("Welcome to Interview Coach!");
    println!("One question, one answer, one round of coaching feedback.");
    println!("{}", "-".repeat(50));

    let runner = WorkflowRunner::new(&llm);
    if let Err(e) = runner.run(&mut console).await {
        // Single recovery point: report and end, no stack trace.
        eprintln!("\nThe interview could not be completed: {e}");
        std::process::exit(1);
    }
}
