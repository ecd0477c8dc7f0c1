//! Tracing subscriber setup for the binary.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `--log`, then `RUST_LOG`, then the roster's
fn resolve_filter(cli: Option<&str>, roster: &str) -> EnvFilter {
    if let Some(directive) = cli {
        return EnvFilter::new(directive);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(roster))
}

/// Install the global subscriber, logging to stderr
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init(cli: Option<&str>, roster: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(cli, roster))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
