//! Authenticated retrieval through the GitHub contents API.
//!
//! The contents API wraps the file in a JSON envelope whose `content` field
//! is base64 with embedded line breaks.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use folio_core::model::PortfolioDocument;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;

use crate::error::SourceError;
use crate::http::ensure_success;
use crate::source::PortfolioSource;

const SOURCE_NAME: &str = "github-contents";
const CONTENTS_ACCEPT: &str = "application/vnd.github.v3+json";
const CLIENT_USER_AGENT: &str = "Portfolio-App";

/// Envelope returned by `GET /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    #[serde(default)]
    encoding: Option<String>,
}

/// Fetches the document file from a repository with a bearer credential.
pub struct GithubContentsSource {
    client: reqwest::Client,
    api_url: String,
    credential: Option<String>,
}

impl GithubContentsSource {
    /// * `api_url` - full contents URL including `?ref=`.
    pub fn new(api_url: String, credential: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, credential)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, api_url: String, credential: Option<String>) -> Self {
        Self {
            client,
            api_url,
            credential,
        }
    }
}

#[async_trait]
impl PortfolioSource for GithubContentsSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<PortfolioDocument, SourceError> {
        let credential = self
            .credential
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or(SourceError::MissingCredential)?;

        tracing::debug!(url = %self.api_url, "Requesting portfolio document from contents API");

        let response = self
            .client
            .get(&self.api_url)
            .bearer_auth(credential)
            .header(ACCEPT, CONTENTS_ACCEPT)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await?;

        let envelope: ContentsResponse = ensure_success(SOURCE_NAME, response).await?.json().await?;
        decode_contents(&envelope)
    }
}

/// Decode the base64 `content` of a contents-API envelope into a document.
fn decode_contents(envelope: &ContentsResponse) -> Result<PortfolioDocument, SourceError> {
    if let Some(encoding) = envelope.encoding.as_deref() {
        if encoding != "base64" {
            return Err(SourceError::UnsupportedEncoding(encoding.to_string()));
        }
    }

    let compact: String = envelope
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = BASE64.decode(compact)?;
    let text = std::str::from_utf8(&bytes)?;

    Ok(PortfolioDocument::from_json_slice(text.as_bytes())?)
}
