//! # Main Entry Point
//!
//! Initializes the character wizard:
//! - Domain: Configuration, Records and Validation
//! - Infrastructure: Backend Gateway, Console Host
//! - Application: Wizard Controller, Router
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::router::{CommandRouter, RouteOutcome};
use crate::application::wizard::WizardController;
use crate::domain::config::AppConfig;
use crate::domain::paths;
use crate::infrastructure::console::ConsoleHost;
use crate::infrastructure::gateway::HttpGateway;

#[derive(Debug, Parser)]
#[command(name = "character-wizard", about = "Two-step character creation wizard")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value_t = paths::config_path())]
    config: String,

    /// Only log to the session file
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    if !std::path::Path::new(paths::DATA_DIR).exists() {
        fs::create_dir(paths::DATA_DIR).context("Failed to create data directory")?;
    }

    // Clear previous session log
    let log_path = std::path::Path::new(paths::DATA_DIR).join(paths::LOG_FILE);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(paths::DATA_DIR, paths::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,hyper=warn,reqwest=warn"));

    // Layer for file (Always active)
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let console_layer = if !args.quiet {
        Some(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
    } else {
        None
    };

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("Starting character wizard...");

    // 3. Initialize Infrastructure
    let init_data = config.services.backend.resolve_init_data()?;
    let gateway =
        Arc::new(HttpGateway::new(&config.services.backend).context("Failed to create backend client")?);
    let host = Arc::new(ConsoleHost::new(init_data));

    // 4. Initialize Application Components
    let wizard = Arc::new(WizardController::new(
        config.wizard.clone(),
        host.clone(),
        host.clone(),
        gateway,
    ));
    let router = CommandRouter::new(wizard.clone());

    wizard.start().await;
    host.print(strings::help::MAIN);

    // 5. Event Loop
    let mut closed = host.closed();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    tracing::info!("Input closed, leaving without saving");
                    break;
                };
                match router.route(host.as_ref(), &line).await {
                    Ok(RouteOutcome::Quit) => break,
                    Ok(RouteOutcome::Continue) => {}
                    Err(e) => tracing::error!("Command failed: {:#}", e),
                }
            }
            _ = closed.changed() => {
                if host.is_closed() {
                    break;
                }
            }
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}
