//! Embernote — note capture service with per-owner actors and a
//! time-decayed note lifecycle.

use anyhow::Result;
use clap::{Parser, Subcommand};
use embernote::{
    api::build_app,
    config::EmbernoteConfig,
    notes::NotesState,
    router::{IdentityResolver, NoteRegistry},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "embernote")]
#[command(version)]
#[command(about = "Note capture service with a time-decayed note lifecycle")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "EMBERNOTE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the embernote server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("embernote={},tower_http=debug", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = if let Some(config_path) = cli.config {
        let content = std::fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        EmbernoteConfig::default()
    };

    match cli.command {
        Commands::Serve { host, port } => {
            run_server(config, host, port).await?;
        }
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
    }

    Ok(())
}

async fn run_server(
    mut config: EmbernoteConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.gateway.host = host;
    }
    if let Some(port) = port {
        config.gateway.port = port;
    }

    let notes_dir = config.storage.notes_dir();
    tokio::fs::create_dir_all(&notes_dir).await?;

    let state = NotesState {
        registry: Arc::new(NoteRegistry::new(notes_dir)),
        identity: Arc::new(IdentityResolver::new(&config.identity)),
    };
    let app = build_app(state, &config.gateway.cors_origins);

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "Embernote listening on {} (storage: {})",
        addr,
        config.storage.base_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Embernote stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down...");
}

fn show_config(config: Option<&EmbernoteConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    let toml = toml::to_string_pretty(&config)?;
    println!("{}", toml);
    Ok(())
}
