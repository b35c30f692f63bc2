//! OpenAlex Research Assistant - Entry Point
//!
//! Serves the HTTP JSON API or answers questions interactively in the
//! terminal; both modes share one pipeline.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use openalex_assistant::{Config, ResearchPipeline, server, terminal};

#[derive(Parser, Debug)]
#[command(name = "openalex-assistant")]
#[command(about = "Research assistant over OpenAlex and a hosted LLM")]
#[command(version)]
struct Cli {
    /// OpenRouter API key (optional; search keeps working without it)
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Contact email for the OpenAlex polite pool
    #[arg(long, env = "OPENALEX_MAILTO")]
    mailto: Option<String>,

    /// Completion model identifier
    #[arg(long)]
    model: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API
    Serve {
        /// HTTP server port
        #[arg(long, default_value = "5000", env = "PORT")]
        port: u16,
    },

    /// Ask one question, or start an interactive session
    Ask {
        /// Research question; omit to start an interactive loop
        query: Option<String>,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::new(cli.api_key, cli.mailto);
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }

    if !config.has_api_key() {
        tracing::warn!("OPENROUTER_API_KEY not set; summaries are disabled, search still works");
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.model,
        "Starting OpenAlex research assistant"
    );

    let pipeline = ResearchPipeline::new(&config)?;

    match cli.command {
        Command::Serve { port } => {
            tracing::info!(port, "Running in HTTP mode");
            server::run_http(pipeline, port).await?;
        }
        Command::Ask { query: Some(query) } => {
            terminal::run_once(&pipeline, &query).await?;
        }
        Command::Ask { query: None } => {
            terminal::run_interactive(&pipeline).await?;
        }
    }

    Ok(())
}
