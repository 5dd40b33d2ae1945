//! Locale edge server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request ID ─▶ trace ─▶ timeout ─▶ metrics
//!                                                         │
//!                                                         ▼
//!                                              ┌────────────────────┐
//!                                              │  locale routing    │
//!                                              │  classify → decide │
//!                                              └─────────┬──────────┘
//!                        308 Location ◀──── redirect     │ pass / rewrite
//!                                                        ▼
//!                                              ┌────────────────────┐
//!                                              │  content router    │
//!                                              │  page view, sitemap│
//!                                              │  robots, manifest  │
//!                                              └────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use locale_edge::config::load_or_default;
use locale_edge::http::HttpServer;
use locale_edge::lifecycle::{bootstrap, signals, Shutdown};
use locale_edge::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "locale-edge")]
#[command(about = "Locale-aware edge server for a bilingual site", long_about = None)]
struct Args {
    /// Path to the TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    logging::init(&config.observability)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "locale-edge starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_url = %config.site.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let bind_address = config.listener.bind_address.clone();
    let state = bootstrap(config)?;

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    HttpServer::new(state).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
