use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Media routes, mounted at root so stored images are same-origin paths.
///
/// ```text
/// GET /media/{id}      stored image bytes
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/media/{id}", get(media::get_media))
}
