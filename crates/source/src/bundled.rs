//! Document shipped with the application.

use std::path::PathBuf;

use async_trait::async_trait;
use folio_core::model::PortfolioDocument;

use crate::error::SourceError;
use crate::source::PortfolioSource;

/// Document compiled into the binary.
const EMBEDDED_DOCUMENT: &str = include_str!("../data/portfolio.json");

/// Reads the document from the binary or from a file next to it.
#[derive(Debug, Clone)]
pub enum BundledSource {
    /// JSON text fixed at build time.
    Embedded(&'static str),
    /// JSON file read on every fetch.
    File(PathBuf),
}

impl BundledSource {
    /// The document embedded at build time.
    pub fn embedded() -> Self {
        Self::Embedded(EMBEDDED_DOCUMENT)
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }
}

#[async_trait]
impl PortfolioSource for BundledSource {
    fn name(&self) -> &'static str {
        match self {
            Self::Embedded(_) => "bundled",
            Self::File(_) => "bundled-file",
        }
    }

    async fn fetch(&self) -> Result<PortfolioDocument, SourceError> {
        match self {
            Self::Embedded(json) => Ok(PortfolioDocument::from_json_slice(json.as_bytes())?),
            Self::File(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(PortfolioDocument::from_json_slice(&bytes)?)
            }
        }
    }
}
