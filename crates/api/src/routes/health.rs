use axum::extract::State;
use axum::{routing::get, Json, Router};
use folio_source::loader::DocumentOrigin;
use folio_source::provider::LoadState;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` with live data, `degraded` on fallback data, `loading` before
    /// the first load settles.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the current mount has settled.
    pub portfolio_ready: bool,
}

/// GET /health -- returns service and data provider health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let current = state.mount.read().await.state();

    let status = match &current {
        LoadState::Ready(outcome) if outcome.origin == DocumentOrigin::Live => "ok",
        LoadState::Ready(_) => "degraded",
        LoadState::Idle | LoadState::Loading => "loading",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        portfolio_ready: !current.is_loading(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
