use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{CrawlerResult, CrawlerServerError};

/// Initialize logging based on environment configuration
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
/// - `LOG_LEVEL`: Fallback filter used when `RUST_LOG` is not set
///
/// Logging stays off when neither is set. Output goes to stderr because
/// stdout carries the MCP stdio transport.
pub fn init_logging() -> CrawlerResult<()> {
    let Some(env_filter) = env_filter() else {
        return Ok(());
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| CrawlerServerError::LoggingInitialization(e.to_string()))?;

    Ok(())
}

fn env_filter() -> Option<EnvFilter> {
    if std::env::var("RUST_LOG").is_ok() {
        return Some(EnvFilter::from_default_env());
    }
    std::env::var("LOG_LEVEL").ok().map(EnvFilter::new)
}
