//! Handler serving media objects fetched with the source credential.

use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;
use folio_core::error::CoreError;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /media/{id}
///
/// Objects belong to the current mount; ids from a previous mount are gone
/// after a reload.
pub async fn get_media(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Media object",
            id: id.clone(),
        })
    };

    let uuid: Uuid = id.parse().map_err(|_| not_found())?;
    let media = state.mount.read().await.media().clone();
    let object = media.get(&uuid).await.ok_or_else(not_found)?;

    Ok((
        [
            (CONTENT_TYPE, object.content_type.clone()),
            (CACHE_CONTROL, "private, max-age=3600".to_string()),
        ],
        object.bytes.clone(),
    ))
}
