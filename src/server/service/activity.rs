use crate::server::{
    data::{activity::ActivityRepository, store::ActivityStore},
    error::AppError,
    model::activity::{normalize_email, Activity, Signup, Withdrawal},
};

/// Activity directory operations: list, signup and withdrawal.
///
/// Emails are normalized here before they reach the roster; activity names are passed
/// through untouched and must match exactly. Failures are returned, never logged.
pub struct ActivityService<'a> {
    store: &'a ActivityStore,
}

impl<'a> ActivityService<'a> {
    pub fn new(store: &'a ActivityStore) -> Self {
        Self { store }
    }

    /// Gets every activity with its current roster, in seed order.
    pub async fn list(&self) -> Vec<Activity> {
        ActivityRepository::new(self.store).get_all().await
    }

    /// Signs a student up for an activity.
    ///
    /// # Arguments
    /// - `activity_name` - Exact activity name
    /// - `email` - Student email in any case, with or without surrounding whitespace
    ///
    /// # Returns
    /// - `Ok(Signup)` - Normalized email appended to the roster
    /// - `Err(AppError::ActivityErr(ActivityNotFound))` - Unknown activity
    /// - `Err(AppError::ActivityErr(AlreadySignedUp))` - Email already on the roster
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<Signup, AppError> {
        let email = normalize_email(email);

        ActivityRepository::new(self.store)
            .add_participant(activity_name, email.clone())
            .await?;

        Ok(Signup {
            activity_name: activity_name.to_string(),
            email,
        })
    }

    /// Withdraws a student from an activity.
    ///
    /// # Returns
    /// - `Ok(Withdrawal)` - Matching roster entry removed
    /// - `Err(AppError::ActivityErr(ActivityNotFound))` - Unknown activity
    /// - `Err(AppError::ActivityErr(ParticipantNotFound))` - Email not on the roster
    pub async fn withdraw(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Withdrawal, AppError> {
        let email = normalize_email(email);

        ActivityRepository::new(self.store)
            .remove_participant(activity_name, &email)
            .await?;

        Ok(Withdrawal {
            activity_name: activity_name.to_string(),
            email,
        })
    }
}
