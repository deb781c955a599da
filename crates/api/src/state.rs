use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the config sits behind `Arc`.
/// Handlers never hold a connection in here; each request opens its own
/// session from the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinema_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
