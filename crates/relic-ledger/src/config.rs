//! Server configuration from environment variables
//!
//! - `RELIC_LEDGER_PORT` (default `8080`)
//! - `RELIC_LEDGER_LOG_LEVEL` (default `info`)
//! - `RELIC_LEDGER_NAME` (optional)
//! - `RELIC_LEDGER_DATABASE_URL` (optional, used with the `postgres` feature)

use std::env;
use thiserror::Error;
use tracing::Level;

pub const PORT_VAR: &str = "RELIC_LEDGER_PORT";
pub const LOG_LEVEL_VAR: &str = "RELIC_LEDGER_LOG_LEVEL";
pub const NAME_VAR: &str = "RELIC_LEDGER_NAME";
pub const DATABASE_URL_VAR: &str = "RELIC_LEDGER_DATABASE_URL";

const DEFAULT_PORT: u16 = 8080;

/// Configuration errors, reported at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a valid port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },
}

/// Relic ledger server configuration
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// HTTP listen port
    pub port: u16,
    /// Maximum log level
    pub log_level: Level,
    /// Human-readable name of this ledger instance
    pub name: Option<String>,
    /// PostgreSQL connection string
    pub database_url: Option<String>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_level: Level::INFO,
            name: None,
            database_url: None,
        }
    }
}

impl LedgerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read configuration through `lookup`
    ///
    /// An unparsable log level falls back to `info`; an unparsable port is
    /// an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_VAR) {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let log_level = lookup(LOG_LEVEL_VAR)
            .and_then(|v| v.parse().ok())
            .unwrap_or(Level::INFO);

        let non_empty = |v: String| if v.is_empty() { None } else { Some(v) };

        Ok(Self {
            port,
            log_level,
            name: lookup(NAME_VAR).and_then(non_empty),
            database_url: lookup(DATABASE_URL_VAR).and_then(non_empty),
        })
    }

    /// Socket address to bind
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
