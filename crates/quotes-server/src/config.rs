//! Server configuration
//!
//! Resolved from built-in defaults, then an optional `quotes.toml` (or the
//! file named by `QUOTES_CONFIG`), then `QUOTES_*` environment variables.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "QUOTES_CONFIG";

/// Config file looked up in the working directory when `QUOTES_CONFIG` is unset
pub const DEFAULT_CONFIG_NAME: &str = "quotes";

const ENV_PREFIX: &str = "QUOTES";

/// Deployment mode, selects the log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Local,
    Dev,
    Prod,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub env: RunMode,
    pub host: String,
    pub port: u16,
    pub shutdown_grace_secs: u64,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        let file = std::env::var(CONFIG_PATH_VAR).ok();
        Self::from_sources(
            file.as_deref().map(Path::new),
            ::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    /// Build from an explicit file (required when given) and environment source
    pub fn from_sources(file: Option<&Path>, env: ::config::Environment) -> Result<Self> {
        let mut builder = ::config::Config::builder()
            .set_default("env", "local")?
            .set_default("host", "localhost")?
            .set_default("port", 8080)?
            .set_default("shutdown_grace_secs", 5)?
            .set_default("request_timeout_secs", 10)?;

        builder = match file {
            Some(path) => builder.add_source(::config::File::from(path).required(true)),
            None => builder
                .add_source(::config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        let config: ServerConfig = builder
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Failed to parse configuration")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            bail!("host must not be empty");
        }
        if self.shutdown_grace_secs == 0 {
            bail!("shutdown_grace_secs must be greater than zero");
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
