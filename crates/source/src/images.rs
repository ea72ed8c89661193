//! Image reference normalization, including credentialed retrieval.
//!
//! The two terminal outcomes for a credential-gated reference are a stored
//! media path (`/media/<id>`) or a substitute local path. Neither is an
//! error to the caller.

use std::sync::Arc;

use folio_core::image_ref::{self, ImageRef};
use folio_core::model::PortfolioDocument;
use futures::future::join_all;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;
use uuid::Uuid;

use crate::error::SourceError;
use crate::http::ensure_success;
use crate::media::{content_type_for, MediaObject, MediaStore};

const IMAGE_SOURCE_NAME: &str = "image host";

/// Rewrites image references into directly renderable paths or URLs.
#[derive(Clone)]
pub struct ImageResolver {
    client: reqwest::Client,
    /// Bearer credential for gated images. `None` passes them through.
    credential: Option<String>,
    media: Arc<MediaStore>,
}

impl ImageResolver {
    pub fn new(client: reqwest::Client, credential: Option<String>, media: Arc<MediaStore>) -> Self {
        Self {
            client,
            credential: credential.filter(|c| !c.trim().is_empty()),
            media,
        }
    }

    /// Resolver that never fetches. Gated URLs pass through unchanged.
    pub fn offline(media: Arc<MediaStore>) -> Self {
        Self::new(reqwest::Client::new(), None, media)
    }

    /// Normalize a single reference. Never fails.
    pub async fn resolve(&self, raw: &str) -> String {
        match (image_ref::classify(raw), self.credential.as_deref()) {
            (ImageRef::CredentialGated(url), Some(token)) => match self.fetch_media(&url, token).await {
                Ok(id) => image_ref::media_path(&id.to_string()),
                Err(err) => {
                    let substitute = image_ref::local_fallback_path(&url);
                    tracing::warn!(
                        url = %url,
                        substitute = %substitute,
                        error = %err,
                        "Failed to fetch image, using local path"
                    );
                    substitute
                }
            },
            (other, _) => other.normalize_offline(),
        }
    }

    /// Normalize every image in `document`. Fetches run concurrently.
    pub async fn normalize_document(&self, document: &mut PortfolioDocument) {
        let originals: Vec<String> = document.images().map(str::to_owned).collect();
        let resolved = join_all(originals.iter().map(|raw| self.resolve(raw))).await;

        for ((slot, original), new) in document.images_mut().zip(&originals).zip(resolved) {
            if *original != new {
                tracing::debug!(from = %original, to = %new, "Rewrote image reference");
            }
            *slot = new;
        }
    }

    async fn fetch_media(&self, url: &Url, token: &str) -> Result<Uuid, SourceError> {
        let response = self
            .client
            .get(url.as_str())
            .bearer_auth(token)
            .header(ACCEPT, "application/octet-stream")
            .send()
            .await?;
        let response = ensure_success(IMAGE_SOURCE_NAME, response).await?;

        let header = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await?;

        let object = MediaObject {
            content_type: content_type_for(header.as_deref(), &bytes),
            bytes: bytes.to_vec(),
        };
        Ok(self.media.insert(object).await)
    }
}
