//! Tracing subscriber setup

use crate::config::RunMode;
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

fn default_filter(mode: RunMode) -> &'static str {
    match mode {
        RunMode::Local => "info,quotes_server=debug,tower_http=debug",
        RunMode::Dev | RunMode::Prod => "info",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the mode's default level.
pub fn init_tracing(mode: RunMode) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(mode)));

    let result = match mode {
        RunMode::Local => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .try_init(),
        RunMode::Dev => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init(),
        RunMode::Prod => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(false)
            .try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
