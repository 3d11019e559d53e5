//! Liveness check, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether the upload directory exists. Reported only; uploads recreate it.
    pub storage_ready: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = folio_db::health_check(&state.pool).await.is_ok();
    let storage_ready = tokio::fs::metadata(&state.config.storage.root)
        .await
        .is_ok_and(|meta| meta.is_dir());

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        storage_ready,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
