//! localchat server entry point.
//!
//! Binary name: `localchat`
//!
//! Parses CLI arguments, loads the TOML configuration, wires the chat
//! service to the HTTP completion engine, and serves the axum router
//! until Ctrl+C or SIGTERM.

mod http;
mod state;

use std::path::PathBuf;

use clap::Parser;
use localchat_types::config::ServerConfig;
use tracing_subscriber::EnvFilter;

use state::AppState;

/// Conversational text generation server backed by a local completion engine.
#[derive(Debug, Parser)]
#[command(name = "localchat", version, about)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "localchat.toml")]
    config: PathBuf,

    /// Override the bind host from the config file.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port from the config file.
    #[arg(long)]
    port: Option<u16>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,localchat=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let mut config = ServerConfig::load(&cli.config)?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    tracing::info!(
        engine_url = %config.engine_url,
        model = %config.model,
        device = %config.device,
        "starting localchat"
    );

    let state = AppState::new(&config);
    let router = http::router::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
