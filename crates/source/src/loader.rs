//! The load operation: one retrieval attempt, normalization, fallback.

use std::sync::Arc;

use chrono::Utc;
use folio_core::fallback::fallback_document;
use folio_core::model::PortfolioDocument;
use folio_core::types::Timestamp;
use serde::Serialize;

use crate::images::ImageResolver;
use crate::source::PortfolioSource;

/// Where the settled document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentOrigin {
    Live,
    Fallback,
}

/// Terminal result of a load. Always carries a renderable document.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub document: Arc<PortfolioDocument>,
    /// Description of the retrieval failure when `origin` is `Fallback`.
    pub source_error: Option<String>,
    pub origin: DocumentOrigin,
    pub settled_at: Timestamp,
}

impl LoadOutcome {
    fn live(document: PortfolioDocument) -> Self {
        Self {
            document: Arc::new(document),
            source_error: None,
            origin: DocumentOrigin::Live,
            settled_at: Utc::now(),
        }
    }

    fn fallback(error: String) -> Self {
        Self {
            document: Arc::new(fallback_document()),
            source_error: Some(error),
            origin: DocumentOrigin::Fallback,
            settled_at: Utc::now(),
        }
    }
}

/// Combines a source with image normalization and the fallback policy.
#[derive(Clone)]
pub struct PortfolioLoader {
    source: Arc<dyn PortfolioSource>,
    images: ImageResolver,
}

impl PortfolioLoader {
    pub fn new(source: Arc<dyn PortfolioSource>, images: ImageResolver) -> Self {
        Self { source, images }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Retrieve the document exactly once.
    ///
    /// Any retrieval failure settles to the fallback document with the
    /// failure description attached. Image failures never surface here.
    pub async fn load(&self) -> LoadOutcome {
        let source = self.source.name();
        tracing::info!(source, "Fetching portfolio data");

        match self.source.fetch().await {
            Ok(mut document) => {
                self.images.normalize_document(&mut document).await;
                let counts = document.counts();
                tracing::info!(
                    source,
                    projects = counts.projects,
                    multimedia = counts.multimedia,
                    wip = counts.wip,
                    "Portfolio data loaded"
                );
                LoadOutcome::live(document)
            }
            Err(err) => {
                tracing::error!(source, error = %err, "Failed to fetch portfolio data");
                tracing::warn!(source, "Using fallback portfolio data");
                LoadOutcome::fallback(err.to_string())
            }
        }
    }
}
