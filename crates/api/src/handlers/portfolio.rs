//! Handlers for the portfolio document and its sections.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::gallery::{
    loading_strategy, responsive_sizes, ContainerWidth, LoadingStrategy, DEFAULT_EAGER_THRESHOLD,
};
use folio_core::model::{MultimediaItem, PortfolioDocument};
use folio_core::types::Timestamp;
use folio_source::loader::{DocumentOrigin, LoadOutcome};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// The settled outcome of the current mount, or `NotReady` while loading.
async fn settled_outcome(state: &AppState) -> AppResult<LoadOutcome> {
    let mount = state.mount.read().await;
    mount.state().outcome().cloned().ok_or(AppError::NotReady)
}

// ---------------------------------------------------------------------------
// Whole document
// ---------------------------------------------------------------------------

/// `{ data, loading, error }` view of the provider state.
///
/// `data` is `null` only while loading. `error` carries the retrieval
/// failure when fallback data is being served.
#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub data: Option<Arc<PortfolioDocument>>,
    pub loading: bool,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<DocumentOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<Timestamp>,
}

/// GET /api/v1/portfolio
///
/// Never fails: answers with `loading: true` until the mount settles.
pub async fn get_portfolio(State(state): State<AppState>) -> Json<PortfolioResponse> {
    let current = state.mount.read().await.state();

    let response = match current.outcome() {
        Some(outcome) => PortfolioResponse {
            data: Some(Arc::clone(&outcome.document)),
            loading: false,
            error: outcome.source_error.clone(),
            origin: Some(outcome.origin),
            settled_at: Some(outcome.settled_at),
        },
        None => PortfolioResponse {
            data: None,
            loading: true,
            error: None,
            origin: None,
            settled_at: None,
        },
    };

    Json(response)
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// GET /api/v1/portfolio/projects
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let outcome = settled_outcome(&state).await?;
    Ok(Json(DataResponse {
        data: outcome.document.projects.clone(),
    }))
}

/// GET /api/v1/portfolio/wip
pub async fn list_wip(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let outcome = settled_outcome(&state).await?;
    Ok(Json(DataResponse {
        data: outcome.document.wip.clone(),
    }))
}

/// Query parameters for the multimedia gallery.
#[derive(Debug, Deserialize)]
pub struct GalleryParams {
    /// Container width class: `full`, `half`, `third`, `quarter`.
    pub width: Option<String>,
}

/// A multimedia item annotated with image render hints.
#[derive(Debug, Serialize)]
pub struct GalleryItem {
    #[serde(flatten)]
    pub item: MultimediaItem,
    pub loading: LoadingStrategy,
    pub sizes: &'static str,
}

fn parse_width(width: Option<&str>) -> AppResult<ContainerWidth> {
    match width {
        None => Ok(ContainerWidth::Auto),
        Some("full") => Ok(ContainerWidth::Full),
        Some("half") => Ok(ContainerWidth::Half),
        Some("third") => Ok(ContainerWidth::Third),
        Some("quarter") => Ok(ContainerWidth::Quarter),
        Some(other) => Err(AppError::BadRequest(format!(
            "Unknown width '{other}'. Must be one of: full, half, third, quarter"
        ))),
    }
}

/// GET /api/v1/portfolio/multimedia
///
/// Items in display order, each with a `loading` strategy and `sizes` hint.
pub async fn list_multimedia(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> AppResult<impl IntoResponse> {
    let width = parse_width(params.width.as_deref())?;
    let outcome = settled_outcome(&state).await?;

    let items: Vec<GalleryItem> = outcome
        .document
        .multimedia
        .iter()
        .enumerate()
        .map(|(index, item)| GalleryItem {
            item: item.clone(),
            loading: loading_strategy(index, DEFAULT_EAGER_THRESHOLD),
            sizes: responsive_sizes(width),
        })
        .collect();

    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// Reload
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub source: &'static str,
    pub loading: bool,
}

/// POST /api/v1/portfolio/reload
///
/// Start a fresh mount. The previous mount's pending result, if any, is
/// discarded.
pub async fn reload_portfolio(State(state): State<AppState>) -> impl IntoResponse {
    state.remount().await;
    tracing::info!(source = state.provider.source_name(), "Portfolio reload requested");

    (
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: ReloadResponse {
                source: state.provider.source_name(),
                loading: true,
            },
        }),
    )
}
