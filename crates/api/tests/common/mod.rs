//! Shared helpers for API integration tests.
//!
//! The app is built with the same [`build_app_router`] the binary uses, so
//! every request passes through the full middleware stack.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::config::SiteConfig;
use folio_core::model::PortfolioDocument;
use folio_source::error::SourceError;
use folio_source::provider::PortfolioProvider;
use folio_source::source::PortfolioSource;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const SCENARIO_JSON: &str = r#"{"projects":[{"id":1,"title":"A","description":"d","image":"images/x.png","githubUrl":"g","liveUrl":"l","technologies":["X"]}],"multimedia":[{"title":"P1","description":"d","image":"images/m/1.png"},{"title":"P2","description":"d","image":"images/m/2.png"},{"title":"P3","description":"d","image":"images/m/3.png"},{"title":"P4","description":"d","image":"images/m/4.png"}],"wip":[]}"#;

pub fn scenario_document() -> PortfolioDocument {
    PortfolioDocument::from_json_slice(SCENARIO_JSON.as_bytes()).unwrap()
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Static files are served from `static_dir`; detail is exposed in panic
/// responses only when `expose_error_detail` is set by the caller.
pub fn test_config(static_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5174".to_string()],
        request_timeout_secs: 30,
        expose_error_detail: false,
        static_dir: static_dir.to_path_buf(),
        site: SiteConfig::default(),
    }
}

/// Build the full app for `provider`. The first load starts immediately.
pub fn build_test_app(config: ServerConfig, provider: PortfolioProvider) -> (Router, AppState) {
    let state = AppState::new(config.clone(), provider);
    let app = build_app_router(state.clone(), &config);
    (app, state)
}

/// Wait until the current mount has settled.
///
/// The mount lock is released before waiting, so a concurrent reload is
/// never blocked by a waiter.
pub async fn wait_settled(state: &AppState) {
    let settled = state.mount.read().await.settled();
    settled.await.expect("mount settles");
}

pub async fn get(app: &Router, uri: &str) -> Response<axum::body::Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post(app: &Router, uri: &str) -> Response<axum::body::Body> {
    let request = Request::post(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<axum::body::Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Serve `router` on `127.0.0.1:<ephemeral>` and return its address.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Source returning a fixed document, or failing, after a delay.
pub struct SlowSource {
    delay: Duration,
    document: Option<PortfolioDocument>,
}

impl SlowSource {
    pub fn ok(document: PortfolioDocument, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay,
            document: Some(document),
        })
    }

    pub fn failing(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay,
            document: None,
        })
    }
}

#[async_trait]
impl PortfolioSource for SlowSource {
    fn name(&self) -> &'static str {
        "slow"
    }

    async fn fetch(&self) -> Result<PortfolioDocument, SourceError> {
        tokio::time::sleep(self.delay).await;
        self.document.clone().ok_or(SourceError::MissingCredential)
    }
}
