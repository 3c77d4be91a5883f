use std::sync::Arc;
use tokio::sync::RwLock;

use crate::server::{data::seed, model::activity::Activity};

/// Shared handle to the activity collection.
///
/// Clones share the same collection. A single `RwLock` guards the whole collection: it is
/// small and fixed in size, and every mutation must observe the roster it validated against.
#[derive(Clone, Default)]
pub struct ActivityStore {
    activities: Arc<RwLock<Vec<Activity>>>,
}

impl ActivityStore {
    /// Creates a store holding the provided activities in the given order.
    ///
    /// Activity names are expected to be unique; lookups resolve to the first match.
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// Creates a store holding a fresh copy of the school's seed activities.
    pub fn seeded() -> Self {
        Self::new(seed::activities())
    }

    pub(super) fn lock(&self) -> &RwLock<Vec<Activity>> {
        &self.activities
    }
}
