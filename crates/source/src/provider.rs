//! Mount lifecycle around a [`PortfolioLoader`].
//!
//! State machine: `Idle -> Loading -> Ready`. `Ready` is absorbing; loading
//! again requires a fresh [`Mount`]. A mount that is dropped or unmounted
//! before its load settles discards the result instead of publishing it.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use folio_core::config::{DataSourceMode, SiteConfig};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::images::ImageResolver;
use crate::loader::{LoadOutcome, PortfolioLoader};
use crate::media::MediaStore;
use crate::source::{self, PortfolioSource};

/// Observable provider state.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(LoadOutcome),
}

impl LoadState {
    /// `true` until a terminal state is reached.
    pub fn is_loading(&self) -> bool {
        !matches!(self, LoadState::Ready(_))
    }

    pub fn outcome(&self) -> Option<&LoadOutcome> {
        match self {
            LoadState::Ready(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Whether a background load published its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// The mount was gone by the time the load finished.
    Discarded,
}

/// Builds mounts for one configured source.
#[derive(Clone)]
pub struct PortfolioProvider {
    source: Arc<dyn PortfolioSource>,
    client: reqwest::Client,
    image_credential: Option<String>,
}

impl PortfolioProvider {
    /// Provider for an explicit source. Gated images pass through unless
    /// [`with_image_credential`](Self::with_image_credential) is set.
    pub fn new(source: Arc<dyn PortfolioSource>) -> Self {
        Self::with_client(source, reqwest::Client::new())
    }

    pub fn with_client(source: Arc<dyn PortfolioSource>, client: reqwest::Client) -> Self {
        Self {
            source,
            client,
            image_credential: None,
        }
    }

    /// Provider for the source variant selected by `config`.
    ///
    /// Only the authenticated mode fetches gated images with the credential.
    pub fn from_config(config: &SiteConfig) -> Self {
        let client = reqwest::Client::new();
        let source = source::from_config(config, client.clone());
        let provider = Self::with_client(source, client);

        match (config.data_source_mode, config.credential()) {
            (DataSourceMode::RemoteAuthenticated, Some(credential)) => {
                provider.with_image_credential(credential)
            }
            _ => provider,
        }
    }

    pub fn with_image_credential(mut self, credential: impl Into<String>) -> Self {
        self.image_credential = Some(credential.into());
        self
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Start one load in the background and return immediately.
    ///
    /// Must be called within a tokio runtime. The returned mount is already
    /// in [`LoadState::Loading`].
    pub fn mount(&self) -> Mount {
        let media = Arc::new(MediaStore::new());
        let images = ImageResolver::new(
            self.client.clone(),
            self.image_credential.clone(),
            Arc::clone(&media),
        );
        let loader = PortfolioLoader::new(Arc::clone(&self.source), images);

        let (tx, rx) = watch::channel(LoadState::Idle);
        tx.send_replace(LoadState::Loading);

        let mounted = Arc::new(Mutex::new(true));
        let task_mounted = Arc::clone(&mounted);
        let source = loader.source_name();
        tracing::debug!(source, "Mounting portfolio provider");

        let task = tokio::spawn(async move {
            let outcome = loader.load().await;

            // Hold the flag while publishing so unmount cannot interleave.
            let mounted = task_mounted.lock().unwrap_or_else(PoisonError::into_inner);
            if !*mounted {
                tracing::debug!(source, "Provider unmounted before load settled, discarding result");
                return Settlement::Discarded;
            }
            tx.send_replace(LoadState::Ready(outcome));
            Settlement::Applied
        });

        Mount {
            state: rx,
            guard: MountGuard(mounted),
            media,
            task,
        }
    }
}

/// Clears the mounted flag when dropped.
struct MountGuard(Arc<Mutex<bool>>);

impl Drop for MountGuard {
    fn drop(&mut self) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = false;
    }
}

/// One provider lifetime. Dropping it has the same effect as
/// [`unmount`](Mount::unmount) without returning the task handle.
pub struct Mount {
    state: watch::Receiver<LoadState>,
    guard: MountGuard,
    media: Arc<MediaStore>,
    task: JoinHandle<Settlement>,
}

impl Mount {
    /// Current state snapshot.
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Media objects created by this mount's image resolution.
    pub fn media(&self) -> &Arc<MediaStore> {
        &self.media
    }

    /// Wait for the terminal state.
    ///
    /// The returned future does not borrow the mount, so a lock guarding it
    /// can be released before awaiting. Resolves to `None` if the load task
    /// ended without publishing (the mount was unmounted, or the task
    /// panicked).
    pub fn settled(&self) -> impl Future<Output = Option<LoadOutcome>> + Send + 'static {
        let mut rx = self.state.clone();
        async move {
            let state = rx.wait_for(|s| !s.is_loading()).await.ok()?;
            state.outcome().cloned()
        }
    }

    /// Clear the mounted flag. In-flight fetches keep running; their result
    /// is discarded. The returned handle reports what happened.
    pub fn unmount(self) -> JoinHandle<Settlement> {
        let Mount { guard, task, .. } = self;
        drop(guard);
        task
    }
}
