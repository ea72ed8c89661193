//! Shared helpers for source integration tests.
//!
//! Upstream services are real axum routers bound to an ephemeral local port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use folio_core::model::PortfolioDocument;
use folio_source::error::SourceError;
use folio_source::source::PortfolioSource;

/// The single-project document used across scenarios.
pub const SCENARIO_JSON: &str = r#"{"projects":[{"id":1,"title":"A","description":"d","image":"images/x.png","githubUrl":"g","liveUrl":"l","technologies":["X"]}],"multimedia":[],"wip":[]}"#;

/// First bytes of a PNG file; enough for format sniffing.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

/// Serve `router` on `127.0.0.1:<ephemeral>` and return its address.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing listens on: connections are refused.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Source that counts attempts and returns a fixed result after a delay.
pub struct ScriptedSource {
    pub attempts: AtomicUsize,
    delay: Duration,
    result: Result<PortfolioDocument, String>,
}

impl ScriptedSource {
    pub fn ok(document: PortfolioDocument) -> Arc<Self> {
        Self::delayed_ok(document, Duration::ZERO)
    }

    pub fn delayed_ok(document: PortfolioDocument, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            attempts: AtomicUsize::new(0),
            delay,
            result: Ok(document),
        })
    }

    /// Fails with a bundled-file read error carrying `message`.
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            attempts: AtomicUsize::new(0),
            delay: Duration::ZERO,
            result: Err(message.to_string()),
        })
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PortfolioSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self) -> Result<PortfolioDocument, SourceError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.result {
            Ok(document) => Ok(document.clone()),
            Err(message) => Err(SourceError::Io {
                path: "scripted.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, message.clone()),
            }),
        }
    }
}

pub fn scenario_document() -> PortfolioDocument {
    PortfolioDocument::from_json_slice(SCENARIO_JSON.as_bytes()).unwrap()
}
