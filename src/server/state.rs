//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::scheduler::metrics::SchedulerMetrics;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection and reqwest client share
/// their pools, and the metrics sink is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client used by the auth pass-through middleware.
    pub http_client: reqwest::Client,

    /// External auth endpoint. Requests are not checked when unset.
    pub auth_url: Option<String>,

    /// Counters emitted by the lifecycle scheduler.
    pub metrics: Arc<dyn SchedulerMetrics>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for the auth service
    /// - `auth_url` - Optional external auth endpoint
    /// - `metrics` - Scheduler metrics sink shared with the lifecycle jobs
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        auth_url: Option<String>,
        metrics: Arc<dyn SchedulerMetrics>,
    ) -> Self {
        Self {
            db,
            http_client,
            auth_url,
            metrics,
        }
    }
}
