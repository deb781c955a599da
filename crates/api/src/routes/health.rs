use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use cinema_db::DbStatus;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Pool usage and applied schema version; `None` when the probe failed.
    pub database: Option<DbStatus>,
}

/// GET /health
///
/// 200 with pool and schema details when the database answers, 503 with
/// `database: null` when it does not.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match cinema_db::status(&state.pool).await {
        Ok(status) => Some(status),
        Err(e) => {
            tracing::warn!(error = %e, "Database health probe failed");
            None
        }
    };

    let (code, status) = match database {
        Some(_) => (StatusCode::OK, "ok"),
        None => (StatusCode::SERVICE_UNAVAILABLE, "degraded"),
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

/// `/health`, mounted at the root next to `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
