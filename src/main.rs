//! Mini Cache - interactive shell
//!
//! Reads cache commands from stdin and writes one reply per line to stdout.
//! Logs go to stderr so replies stay machine-readable.

use anyhow::Context;
use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_cache::shell::{self, ShellConfig};
use mini_cache::SharedCache;

/// Main entry point for the Mini Cache shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache
/// 4. Serve stdin until end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ShellConfig::from_env();
    info!(size = config.size, ttl = config.ttl, "configuration loaded");

    let cache = SharedCache::from_config(config.cache_config());

    shell::run(cache, BufReader::new(io::stdin()), io::stdout())
        .await
        .context("shell terminated on I/O error")?;

    info!("stdin closed, shutting down");
    Ok(())
}
