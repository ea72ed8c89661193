use axum::routing::{get, post};
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Portfolio routes (mounted at `/portfolio`).
///
/// ```text
/// GET  /               { data, loading, error }
/// GET  /projects       project section
/// GET  /multimedia     multimedia section with render hints (?width=)
/// GET  /wip            work-in-progress section
/// POST /reload         start a fresh mount
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio::get_portfolio))
        .route("/projects", get(portfolio::list_projects))
        .route("/multimedia", get(portfolio::list_multimedia))
        .route("/wip", get(portfolio::list_wip))
        .route("/reload", post(portfolio::reload_portfolio))
}
