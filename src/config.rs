//! Command-line and environment configuration.
//!
//! Every flag can also be set through an environment variable:
//! - `TASKBOARD_HOST` - Server host. Defaults to `127.0.0.1`.
//! - `TASKBOARD_PORT` - Server port. Defaults to `3000`.
//! - `TASKBOARD_DATABASE_URL` - `PostgreSQL` URL. Tasks are kept in memory
//!   when unset.
//! - `TASKBOARD_DB_POOL_SIZE` - Maximum pooled connections. Defaults to `8`.
//! - `TASKBOARD_LOG` - Fallback tracing filter when `RUST_LOG` is unset.
//! - `TASKBOARD_LOG_JSON` - Emit JSON log lines.

use clap::Parser;
use thiserror::Error;

/// Errors raised by [`Config::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The host is empty.
    #[error("host must not be empty")]
    EmptyHost,

    /// The connection pool would hold no connections.
    #[error("database pool size must be at least 1")]
    ZeroPoolSize,
}

/// Which task store the server runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local storage, lost on exit.
    InMemory,
    /// `PostgreSQL` at the given URL.
    Postgres {
        /// Connection URL.
        database_url: String,
        /// Maximum pooled connections.
        pool_size: u32,
    },
}

/// Server configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskboard", version, about = "Task-tracking backend")]
pub struct Config {
    /// Server host.
    #[arg(long, env = "TASKBOARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Server port.
    #[arg(long, env = "TASKBOARD_PORT", default_value_t = 3000)]
    pub port: u16,

    /// `PostgreSQL` connection URL; in-memory storage when omitted.
    #[arg(long, env = "TASKBOARD_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections.
    #[arg(long, env = "TASKBOARD_DB_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[arg(
        long,
        env = "TASKBOARD_LOG",
        default_value = "taskboard=info,tower_http=info"
    )]
    pub log_filter: String,

    /// Emit logs as JSON lines.
    #[arg(long, env = "TASKBOARD_LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    /// Checks values clap cannot express as argument constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty host or a zero pool size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.pool_size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }
        Ok(())
    }

    /// Returns the `host:port` address to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the storage backend selected by the configuration.
    #[must_use]
    pub fn storage(&self) -> StorageBackend {
        match &self.database_url {
            Some(url) if !url.trim().is_empty() => StorageBackend::Postgres {
                database_url: url.clone(),
                pool_size: self.pool_size,
            },
            _ => StorageBackend::InMemory,
        }
    }
}
