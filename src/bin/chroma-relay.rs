//! Chroma palette relay.
//!
//! Serves `POST /api/generate-palette` so browser or terminal clients can
//! generate palettes without holding the API key themselves.
//!
//! # Usage
//!
//! ```bash
//! GEMINI_API_KEY=... chroma-relay --port 3002
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chroma_tui::config::Config;
use chroma_tui::web::{self, RelayState};

/// Chroma relay - palette generation over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3002")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    if config.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; every generation request will fail with 500");
    }
    info!(model = %config.model, timeout = ?config.timeout, "relay configured");

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", args.host, args.port))?;

    web::run_server(RelayState::from_config(&config)?, addr).await
}
