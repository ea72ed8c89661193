pub mod health;
pub mod media;
pub mod portfolio;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /site                          site flags (under construction, source mode)
///
/// /portfolio                     { data, loading, error }
/// /portfolio/projects            project section
/// /portfolio/multimedia          multimedia section with render hints
/// /portfolio/wip                 work-in-progress section
/// /portfolio/reload              fresh mount (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/site", get(handlers::site::get_site))
        .nest("/portfolio", portfolio::router())
}
