//! Unauthenticated retrieval of a raw JSON document.

use async_trait::async_trait;
use folio_core::model::PortfolioDocument;

use crate::error::SourceError;
use crate::http::ensure_success;
use crate::source::PortfolioSource;

const SOURCE_NAME: &str = "public-json";

/// Fetches the document from a public URL whose body is the document itself.
pub struct PublicJsonSource {
    client: reqwest::Client,
    url: String,
}

impl PublicJsonSource {
    pub fn new(url: String) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl PortfolioSource for PublicJsonSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<PortfolioDocument, SourceError> {
        tracing::debug!(url = %self.url, "Requesting public portfolio document");

        let response = self.client.get(&self.url).send().await?;
        let bytes = ensure_success(SOURCE_NAME, response).await?.bytes().await?;

        // Raw-content hosts often serve JSON as text/plain, so decode the
        // bytes directly instead of trusting the content type.
        Ok(PortfolioDocument::from_json_slice(&bytes)?)
    }
}
