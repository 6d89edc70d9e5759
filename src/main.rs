//! User-facing web service (usuarios-web).
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                 USUARIOS-WEB                  │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌───────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ dispatcher│──▶│  users   │  │
//!                    │  │ server  │   │(axum)     │   │ handlers │  │
//!                    │  └─────────┘   └─────┬─────┘   └──────────┘  │
//!                    │                      │ built from            │
//!                    │                ┌─────▼─────┐                 │
//!                    │                │  routing  │ (named table,   │
//!                    │                │   table   │  reverse lookup)│
//!                    │                └───────────┘                 │
//!                    │                                               │
//!                    │  ┌──────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns          │ │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐  │ │
//!                    │  │  │ config │ │observability│ │lifecycle│  │ │
//!                    │  │  └────────┘ └─────────────┘ └─────────┘  │ │
//!                    │  └──────────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use usuarios_web::config::{load_config, AppConfig};
use usuarios_web::observability::{logging, metrics};
use usuarios_web::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "usuarios-web")]
#[command(about = "User-facing web service: login and signup pages", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file (defaults apply when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!("usuarios-web v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_connections = config.listener.max_connections,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Route table misconfiguration surfaces here, before serving traffic.
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    shutdown.listen_for_signals();

    server.run(listener, rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
