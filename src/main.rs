// src/main.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use tempo::api::http::http_router;
use tempo::config::TempoConfig;
use tempo::llm::client::OpenAIClient;
use tempo::pipeline::{ChatRequest, Pipeline};
use tempo::services::router::ChatRouter;
use tempo::setup;
use tempo::state::AppState;

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "Time-aware conversational router")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Route a single message and print the response
    Chat {
        /// The message to route
        message: String,
    },

    /// Write the graph descriptor for the external graph-hosting CLI
    Setup {
        /// Output path for the descriptor
        #[arg(long, default_value = setup::DEFAULT_DESCRIPTOR_PATH)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Chat { message }) => run_chat(&message).await,
        Some(Commands::Setup { out }) => run_setup(&out),
        Some(Commands::Serve) | None => run_server().await,
    }
}

fn init_tracing(config: &TempoConfig) -> Result<()> {
    let level = Level::from_str(&config.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn build_pipeline(config: &TempoConfig) -> Result<Pipeline> {
    let client = OpenAIClient::new(config)?;
    let router = ChatRouter::new(client, config);
    Ok(Pipeline::new(router))
}

async fn run_server() -> Result<()> {
    let config = TempoConfig::from_env()?;
    init_tracing(&config)?;

    info!("Starting Tempo");
    info!("Model: {}", config.model);
    info!(
        "Keyword fast path: {}",
        if config.keyword_fast_path {
            "enabled"
        } else {
            "disabled"
        }
    );

    let pipeline = build_pipeline(&config)?;
    let app_state = Arc::new(AppState { pipeline });

    let app = http_router(
        app_state,
        Duration::from_secs(config.request_timeout_secs),
    );

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_chat(message: &str) -> Result<()> {
    let config = TempoConfig::from_env()?;
    init_tracing(&config)?;

    let pipeline = build_pipeline(&config)?;
    let output = pipeline
        .run(ChatRequest {
            message: message.to_string(),
        })
        .await?;

    println!("{}", output.response);
    Ok(())
}

fn run_setup(out: &Path) -> Result<()> {
    setup::write_descriptor(out)?;
    println!("{} written, point your graph host at it", out.display());
    Ok(())
}
