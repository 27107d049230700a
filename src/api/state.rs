//! Application state for the salary records API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, RwLock};

use crate::store::SalaryStore;

/// Shared application state.
///
/// Holds the salary store behind a read-write lock: axum serves requests on
/// a multi-threaded runtime, so Create/Update/Delete take the write lock for
/// their whole read-modify-write span while List and Get-by-id share the
/// read lock. No handler holds the lock across an await point.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<SalaryStore>>,
}

impl AppState {
    /// Creates a new application state owning the given store.
    ///
    /// Tests inject a store of their choosing here; the host process passes
    /// [`SalaryStore::seeded`] at startup.
    pub fn new(store: SalaryStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates the startup state with the seeded store.
    pub fn seeded() -> Self {
        Self::new(SalaryStore::seeded())
    }

    /// Returns the lock guarding the store.
    pub fn store(&self) -> &RwLock<SalaryStore> {
        &self.store
    }
}
