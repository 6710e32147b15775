mod doctor_cmd;
mod status_cmd;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info, warn};

use inkwiz_config::{validate, InkwizConfig, LoadedConfig};
use inkwiz_gateway::{start_server, GatewayState};
use inkwiz_logging::init_logger;
use inkwiz_understanding::{GeminiProvider, ImageTextService};

#[derive(Parser)]
#[command(name = "inkwiz")]
#[command(about = "Inkwiz: extract and grammar-correct text from images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind the HTTP server to
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Query a running server's health endpoint
    Status {
        /// Base URL of the server (defaults to the configured local port)
        #[arg(long)]
        url: Option<String>,
    },
    /// Validate configuration without starting the server
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let LoadedConfig {
        config,
        dotenv_path,
    } = inkwiz_config::load()?;

    init_logger(&config.log_level, config.log_dir.as_deref());
    if let Some(path) = dotenv_path {
        debug!(path = %path.display(), "Loaded .env file");
    }

    match cli.command {
        Commands::Serve { port, bind } => {
            let config = InkwizConfig {
                port: port.unwrap_or(config.port),
                bind_address: bind.unwrap_or(config.bind_address),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Status { url } => {
            let url = url.unwrap_or_else(|| format!("http://localhost:{}", config.port));
            status_cmd::run(&url).await?;
        }
        Commands::Doctor => {
            if !doctor_cmd::run(&config) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn run_server(config: InkwizConfig) -> Result<()> {
    // Refuse to start before binding anything if the config is unusable.
    let report = validate(&config);
    for warning in &report.warnings {
        warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    if !report.is_valid() {
        for err in &report.errors {
            error!(path = %err.path, message = %err.message, "Config error");
        }
        let summary: Vec<String> = report.errors.iter().map(|e| e.message.clone()).collect();
        bail!("Invalid configuration: {}", summary.join("; "));
    }

    info!(config = ?config, "Starting Inkwiz");

    let provider = GeminiProvider::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?
    .with_base_url(config.gemini_base_url.clone())
    .with_safety_filters(config.safety_filters);

    let service =
        ImageTextService::new(Arc::new(provider)).with_reject_empty_text(config.reject_empty_text);
    let state = GatewayState::new(service, config.max_concurrent_requests);

    start_server(&config.listen_addr(), state).await
}
