//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{Mutex as AsyncMutex, MutexGuard as AsyncMutexGuard};

use crate::registry::Registry;

/// Shared application state.
///
/// The registry sits behind a mutex so each add/edit/delete runs as one
/// critical section, keeping employees and department buckets in step when
/// requests arrive concurrently.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<Mutex<Registry>>,
    persist: Arc<AsyncMutex<()>>,
}

impl AppState {
    /// Creates a new application state owning `registry`.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
            persist: Arc::new(AsyncMutex::new(())),
        }
    }

    /// Locks the registry for the duration of one operation.
    ///
    /// Registry operations never leave partial state behind, so a guard
    /// poisoned by a panicking handler is still safe to reuse.
    pub fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Serializes saves so snapshots reach the store one at a time and in
    /// the order they were taken.
    pub async fn persist_permit(&self) -> AsyncMutexGuard<'_, ()> {
        self.persist.lock().await
    }
}
