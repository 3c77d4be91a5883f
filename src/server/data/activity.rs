use crate::server::{
    data::store::ActivityStore, error::activity::ActivityError, model::activity::Activity,
};

/// Repository over an `ActivityStore`.
///
/// Each method takes the store lock once, so lookup, validation and mutation of a roster
/// are atomic with respect to other requests.
pub struct ActivityRepository<'a> {
    store: &'a ActivityStore,
}

impl<'a> ActivityRepository<'a> {
    pub fn new(store: &'a ActivityStore) -> Self {
        Self { store }
    }

    /// Returns a snapshot of every activity in insertion order.
    pub async fn get_all(&self) -> Vec<Activity> {
        self.store.lock().read().await.clone()
    }

    /// Returns a snapshot of the activity with exactly this name.
    #[cfg(test)]
    pub async fn get_by_name(&self, name: &str) -> Option<Activity> {
        self.store
            .lock()
            .read()
            .await
            .iter()
            .find(|a| a.name == name)
            .cloned()
    }

    /// Number of activities in the store.
    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.store.lock().read().await.len()
    }

    /// Appends a normalized email to an activity's roster.
    ///
    /// # Arguments
    /// - `name` - Exact activity name
    /// - `normalized_email` - Email already passed through `normalize_email`
    ///
    /// # Returns
    /// - `Ok(())` - Email appended
    /// - `Err(ActivityError::ActivityNotFound)` - No activity with this name
    /// - `Err(ActivityError::AlreadySignedUp)` - Email already on the roster
    pub async fn add_participant(
        &self,
        name: &str,
        normalized_email: String,
    ) -> Result<(), ActivityError> {
        let mut activities = self.store.lock().write().await;

        let activity = activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or(ActivityError::ActivityNotFound)?;

        activity.add_participant(normalized_email)
    }

    /// Removes a normalized email from an activity's roster.
    ///
    /// # Returns
    /// - `Ok(String)` - The removed roster entry
    /// - `Err(ActivityError::ActivityNotFound)` - No activity with this name
    /// - `Err(ActivityError::ParticipantNotFound)` - Email not on the roster
    pub async fn remove_participant(
        &self,
        name: &str,
        normalized_email: &str,
    ) -> Result<String, ActivityError> {
        let mut activities = self.store.lock().write().await;

        let activity = activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or(ActivityError::ActivityNotFound)?;

        activity.remove_participant(normalized_email)
    }
}
