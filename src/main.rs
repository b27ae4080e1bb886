//! Taskboard HTTP server entry point.
//!
//! Parses configuration, installs tracing, wires the lifecycle service to the
//! configured task store, and serves the HTTP API.

use clap::Parser;
use eyre::WrapErr;
use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::{
    api,
    config::{Config, StorageBackend},
    task::{
        adapters::{
            memory::InMemoryTaskRepository,
            postgres::{PostgresTaskRepository, build_pool},
        },
        services::TaskLifecycleService,
    },
    telemetry,
};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = Config::parse();
    config.validate()?;
    telemetry::init(&config.log_filter, config.log_json)?;

    let address = config.bind_address();
    let clock = Arc::new(DefaultClock);
    let router = match config.storage() {
        StorageBackend::InMemory => {
            info!("using in-memory task store");
            let repository = Arc::new(InMemoryTaskRepository::new());
            api::router(TaskLifecycleService::new(repository, clock))
        }
        StorageBackend::Postgres {
            database_url,
            pool_size,
        } => {
            info!(pool_size, "using PostgreSQL task store");
            let pool = build_pool(&database_url, pool_size)
                .wrap_err("failed to open PostgreSQL connection pool")?;
            let repository = Arc::new(PostgresTaskRepository::new(pool));
            repository
                .apply_schema()
                .await
                .wrap_err("failed to apply task schema")?;
            api::router(TaskLifecycleService::new(repository, clock))
        }
    };

    api::serve(router, &address)
        .await
        .wrap_err_with(|| format!("server on {address} failed"))
}
