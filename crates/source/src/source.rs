//! Retrieval strategy interface and variant selection.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::config::{DataSourceMode, SiteConfig};
use folio_core::model::PortfolioDocument;

use crate::bundled::BundledSource;
use crate::error::SourceError;
use crate::github::GithubContentsSource;
use crate::public::PublicJsonSource;

/// A place the raw portfolio document can be retrieved from.
///
/// Implementations make exactly one attempt per call and never retry.
/// Image references in the returned document are left as the source
/// provided them.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Retrieve and decode the document.
    async fn fetch(&self) -> Result<PortfolioDocument, SourceError>;
}

/// Build the source variant selected by `config.data_source_mode`.
pub fn from_config(config: &SiteConfig, client: reqwest::Client) -> Arc<dyn PortfolioSource> {
    let endpoints = &config.endpoints;
    match config.data_source_mode {
        DataSourceMode::RemoteAuthenticated => Arc::new(GithubContentsSource::with_client(
            client,
            endpoints.contents_api_url.clone(),
            config.credential().map(str::to_owned),
        )),
        DataSourceMode::RemotePublic => Arc::new(PublicJsonSource::with_client(
            client,
            endpoints.public_url.clone(),
        )),
        DataSourceMode::Bundled => match &endpoints.bundled_path {
            Some(path) => Arc::new(BundledSource::from_path(path.clone())),
            None => Arc::new(BundledSource::embedded()),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use folio_core::config::SourceEndpoints;

    use super::*;

    fn source_for(mode: DataSourceMode, bundled_path: Option<PathBuf>) -> Arc<dyn PortfolioSource> {
        let config = SiteConfig {
            data_source_mode: mode,
            endpoints: SourceEndpoints {
                bundled_path,
                ..Default::default()
            },
            ..Default::default()
        };
        from_config(&config, reqwest::Client::new())
    }

    #[test]
    fn selects_variant_by_mode() {
        assert_eq!(
            source_for(DataSourceMode::RemoteAuthenticated, None).name(),
            "github-contents"
        );
        assert_eq!(source_for(DataSourceMode::RemotePublic, None).name(), "public-json");
        assert_eq!(source_for(DataSourceMode::Bundled, None).name(), "bundled");
        assert_eq!(
            source_for(DataSourceMode::Bundled, Some(PathBuf::from("data.json"))).name(),
            "bundled-file"
        );
    }
}
