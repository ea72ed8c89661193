//! In-memory store for image bytes fetched with a credential.
//!
//! Each mount owns one store, so objects from a previous mount disappear
//! with it.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

const OCTET_STREAM: &str = "application/octet-stream";

/// Image bytes plus the content type to serve them with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaObject {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Locally addressable media objects keyed by random id.
#[derive(Debug, Default)]
pub struct MediaStore {
    objects: RwLock<HashMap<Uuid, Arc<MediaObject>>>,
}

impl MediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object and return its id.
    pub async fn insert(&self, object: MediaObject) -> Uuid {
        let id = Uuid::new_v4();
        self.objects.write().await.insert(id, Arc::new(object));
        id
    }

    pub async fn get(&self, id: &Uuid) -> Option<Arc<MediaObject>> {
        self.objects.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

/// Content type for fetched image bytes.
///
/// Prefers an `image/*` header, then sniffs the bytes, then falls back to
/// `application/octet-stream`.
pub fn content_type_for(header: Option<&str>, bytes: &[u8]) -> String {
    if let Some(value) = header {
        let mime = value.split(';').next().unwrap_or("").trim();
        if mime.starts_with("image/") {
            return mime.to_string();
        }
    }
    image::guess_format(bytes)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| OCTET_STREAM.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn image_header_wins() {
        assert_eq!(content_type_for(Some("image/webp"), b"anything"), "image/webp");
    }

    #[test]
    fn header_parameters_are_dropped() {
        assert_eq!(
            content_type_for(Some("image/svg+xml; charset=utf-8"), b"<svg/>"),
            "image/svg+xml"
        );
    }

    #[test]
    fn octet_stream_header_is_sniffed() {
        assert_eq!(
            content_type_for(Some("application/octet-stream"), PNG_MAGIC),
            "image/png"
        );
    }

    #[test]
    fn unknown_bytes_fall_back_to_octet_stream() {
        assert_eq!(content_type_for(None, b"plain text"), OCTET_STREAM);
    }

    #[tokio::test]
    async fn insert_then_get() {
        let store = MediaStore::new();
        assert!(store.is_empty().await);

        let id = store
            .insert(MediaObject {
                content_type: "image/png".into(),
                bytes: PNG_MAGIC.to_vec(),
            })
            .await;

        let object = store.get(&id).await.unwrap();
        assert_eq!(object.content_type, "image/png");
        assert_eq!(store.len().await, 1);
        assert!(store.get(&Uuid::new_v4()).await.is_none());
    }
}
