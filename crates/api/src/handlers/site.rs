//! Handler exposing site-level flags to the page.

use axum::extract::State;
use axum::Json;
use folio_core::config::DataSourceMode;
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SiteInfo {
    /// When set, the page shows its placeholder view instead of the content.
    pub under_construction: bool,
    pub data_source_mode: DataSourceMode,
}

/// GET /api/v1/site
pub async fn get_site(State(state): State<AppState>) -> Json<DataResponse<SiteInfo>> {
    let site = &state.config.site;
    Json(DataResponse {
        data: SiteInfo {
            under_construction: site.under_construction,
            data_source_mode: site.data_source_mode,
        },
    })
}
