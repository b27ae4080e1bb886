//! HTTP surface for the task lifecycle service.
//!
//! Decodes requests into [`TaskLifecycleService`] calls and encodes results
//! as JSON. Status code mapping:
//!
//! | Operation | Success | Failure |
//! |---|---|---|
//! | create | 201 | blank title → 400 |
//! | list by status / priority / due date | 200 | unparsable path → 400 |
//! | advance | 200 | missing task or task already done → 400 |
//! | update | 200 | missing task → 404 |
//! | delete | 204 | missing task → 404 |
//! | overdue report | 200 | none |
//!
//! Storage failures map to 500.

mod error;
pub mod tasks;

pub use error::ApiError;

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use axum::{Json, Router, routing::get};
use mockable::Clock;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Service handle shared across request handlers.
pub type SharedService<R, C> = Arc<TaskLifecycleService<R, C>>;

/// Builds the application router around a lifecycle service.
pub fn router<R, C>(service: TaskLifecycleService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .nest("/tasks", tasks::routes::<R, C>())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(service))
}

/// Binds `address` and serves `router` until Ctrl-C.
///
/// # Errors
///
/// Returns an I/O error when the listener cannot bind or the server fails.
pub async fn serve(router: Router, address: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!(address = %listener.local_addr()?, "listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
