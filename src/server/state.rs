//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into each handler through axum's state
//! extraction. Tests build their own instance so no state leaks between them.

use crate::server::data::store::ActivityStore;

/// Application state containing shared resources.
///
/// Cloning is cheap: `ActivityStore` is a reference-counted handle, so every clone
/// observes the same activity collection.
#[derive(Clone)]
pub struct AppState {
    /// Authoritative activity collection.
    pub activities: ActivityStore,
}

impl AppState {
    pub fn new(activities: ActivityStore) -> Self {
        Self { activities }
    }

    /// State holding a fresh copy of the seed activities.
    pub fn seeded() -> Self {
        Self::new(ActivityStore::seeded())
    }
}
