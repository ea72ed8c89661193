use std::sync::Arc;

use folio_source::provider::{Mount, PortfolioProvider};
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Builds fresh mounts for the configured source.
    pub provider: PortfolioProvider,
    /// The current mount. Replaced wholesale on reload.
    pub mount: Arc<RwLock<Mount>>,
}

impl AppState {
    /// Build state and start the first load. Must run inside a tokio runtime.
    pub fn new(config: ServerConfig, provider: PortfolioProvider) -> Self {
        let mount = provider.mount();
        Self {
            config: Arc::new(config),
            provider,
            mount: Arc::new(RwLock::new(mount)),
        }
    }

    /// Replace the current mount with a fresh one.
    ///
    /// The previous mount is unmounted; if its load is still in flight the
    /// result is discarded.
    pub async fn remount(&self) {
        let fresh = self.provider.mount();
        let previous = std::mem::replace(&mut *self.mount.write().await, fresh);
        let handle = previous.unmount();

        tokio::spawn(async move {
            if let Ok(settlement) = handle.await {
                tracing::debug!(?settlement, "Previous portfolio mount finished");
            }
        });
    }
}
