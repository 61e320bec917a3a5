//! Application state for the HTTP service.
//!
//! Axum handlers share a single [`FileStore`] behind a mutex: mutations
//! serialize against each other, and a route query holds the lock while it
//! takes its station/path snapshot, so every query sees a consistent view.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use cargonet_lib::{FileStore, Result};

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` internally); share via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<FileStore>>,
}

impl AppState {
    /// Open state over a data directory, creating the directory if needed.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let store = FileStore::create(data_dir.as_ref())?;
        tracing::info!(data_dir = %store.data_dir().display(), "store opened");
        Ok(Self::from_store(store))
    }

    /// Wrap a pre-built store. Useful for tests.
    pub fn from_store(store: FileStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock and access the store.
    ///
    /// A poisoned lock is recovered rather than propagated: the store keeps
    /// no in-memory state between calls, so a panic in an earlier handler
    /// cannot leave it inconsistent.
    pub fn store(&self) -> MutexGuard<'_, FileStore> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("data_dir", &self.store().data_dir())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cargonet_lib::NetworkSource;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data");
        let state = AppState::open(&nested).unwrap();

        assert!(nested.is_dir());
        assert!(state.store().stations().unwrap().is_empty());
    }

    #[test]
    fn test_clones_share_the_store() {
        let dir = TempDir::new().unwrap();
        let state1 = AppState::open(dir.path()).unwrap();
        let state2 = state1.clone();

        state1
            .store()
            .add_station(cargonet_lib::Station {
                name: "Alpha".to_string(),
                cargo_amount: 1.0,
            })
            .unwrap();
        assert_eq!(state2.store().stations().unwrap().len(), 1);
    }

    #[test]
    fn test_debug_names_data_dir() {
        let dir = TempDir::new().unwrap();
        let state = AppState::open(dir.path()).unwrap();
        let debug = format!("{:?}", state);
        assert!(debug.contains("AppState"));
        assert!(debug.contains("data_dir"));
    }
}
