//! Application state shared across front-end commands.

use std::sync::Arc;
use std::sync::atomic::AtomicI64;

use crate::checkout::CheckoutService;
use crate::config::PosConfig;
use crate::session::SessionStore;
use crate::settings::SettingsStore;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::transport::{ApiClient, MockTransport};

/// Application state shared across all commands.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources: configuration, the key-value store, and the API client.
#[derive(Clone)]
pub struct PosState {
    inner: Arc<PosStateInner>,
}

struct PosStateInner {
    config: PosConfig,
    storage: Box<dyn KeyValueStore>,
    client: ApiClient,
    invoice_token: AtomicI64,
}

impl PosState {
    /// Create the application state from configuration, with file-backed
    /// persistence under the configured data directory.
    #[must_use]
    pub fn new(config: PosConfig) -> Self {
        let storage = Box::new(FileStore::new(config.data_dir.clone()));
        let client = ApiClient::new(MockTransport::new(), config.mock_latency);
        Self::build(config, storage, client)
    }

    /// In-memory state with zero latency, for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::build(
            PosConfig::for_tests(std::path::PathBuf::new()),
            Box::new(MemoryStore::new()),
            ApiClient::instant(),
        )
    }

    fn build(config: PosConfig, storage: Box<dyn KeyValueStore>, client: ApiClient) -> Self {
        Self {
            inner: Arc::new(PosStateInner {
                config,
                storage,
                client,
                invoice_token: AtomicI64::new(0),
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &PosConfig {
        &self.inner.config
    }

    /// Get a reference to the key-value store.
    #[must_use]
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.inner.storage.as_ref()
    }

    /// Get a reference to the mock API client.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    /// Session store over the shared backend.
    #[must_use]
    pub fn sessions(&self) -> SessionStore<'_> {
        SessionStore::new(self.storage())
    }

    /// Settings store over the shared backend.
    #[must_use]
    pub fn settings(&self) -> SettingsStore<'_> {
        SettingsStore::new(self.storage())
    }

    /// Checkout service over the shared collaborators.
    #[must_use]
    pub fn checkout(&self) -> CheckoutService<'_> {
        CheckoutService::new(self.client(), self.storage(), &self.inner.invoice_token)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_state_starts_clean() {
        let state = PosState::in_memory();
        assert!(state.sessions().load().unwrap().is_none());
        assert!(state.config().mock_latency.is_zero());
    }

    #[test]
    fn test_clones_share_storage() {
        let state = PosState::in_memory();
        let clone = state.clone();

        state.storage().put_raw("probe", "\"x\"").unwrap();
        assert_eq!(
            clone.storage().get_raw("probe").unwrap(),
            Some("\"x\"".to_owned())
        );
    }
}
