//! Application state shared across handlers.

use std::sync::Arc;

use testimony_hub_core::Hub;
use tokio::sync::{Mutex, MutexGuard};

use crate::config::HubConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The hub sits behind a mutex
/// so operations apply one at a time, in arrival order.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: HubConfig,
    hub: Mutex<Hub>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Hub configuration
    /// * `hub` - Hub already opened on its store
    #[must_use]
    pub fn new(config: HubConfig, hub: Hub) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                hub: Mutex::new(hub),
            }),
        }
    }

    /// Get a reference to the hub configuration.
    #[must_use]
    pub fn config(&self) -> &HubConfig {
        &self.inner.config
    }

    /// Lock the hub for one operation.
    ///
    /// Hold the guard only while calling hub methods; never across other
    /// awaits.
    pub async fn hub(&self) -> MutexGuard<'_, Hub> {
        self.inner.hub.lock().await
    }
}
