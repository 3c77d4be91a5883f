//! Activity domain models.
//!
//! Provides the `Activity` roster model with its uniqueness rule, the email normalization
//! used for every roster comparison, and the confirmation types returned by signup and
//! withdrawal.

use crate::{
    model::{
        activity::{ActivitiesDto, ActivityDto},
        api::MessageDto,
    },
    server::error::activity::ActivityError,
};

/// Normalizes an email for storage and comparison.
///
/// Trims surrounding whitespace, then lower-cases. Applying it twice yields the same result.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// An extracurricular activity and its roster.
///
/// Invariant: no two entries of `participants` are equal under `normalize_email`.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// Unique name; exact-match key used for lookup.
    pub name: String,
    pub description: String,
    /// Free-text meeting times.
    pub schedule: String,
    /// Advisory capacity. Not enforced by signup.
    pub max_participants: u32,
    /// Roster in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Index of the roster entry matching an already normalized email.
    ///
    /// Stored entries are normalized before comparison so seed rosters with mixed case or
    /// stray whitespace still match.
    fn position_of(&self, normalized_email: &str) -> Option<usize> {
        self.participants
            .iter()
            .position(|p| normalize_email(p) == normalized_email)
    }

    /// Appends a normalized email to the end of the roster.
    ///
    /// # Arguments
    /// - `normalized_email` - Email already passed through `normalize_email`
    ///
    /// # Returns
    /// - `Ok(())` - Email appended
    /// - `Err(ActivityError::AlreadySignedUp)` - A matching entry exists; roster unchanged
    pub fn add_participant(&mut self, normalized_email: String) -> Result<(), ActivityError> {
        if self.position_of(&normalized_email).is_some() {
            return Err(ActivityError::AlreadySignedUp);
        }

        self.participants.push(normalized_email);

        Ok(())
    }

    /// Removes the single roster entry matching a normalized email.
    ///
    /// Remaining entries keep their relative order.
    ///
    /// # Returns
    /// - `Ok(String)` - The entry as it was stored
    /// - `Err(ActivityError::ParticipantNotFound)` - No matching entry; roster unchanged
    pub fn remove_participant(&mut self, normalized_email: &str) -> Result<String, ActivityError> {
        let index = self
            .position_of(normalized_email)
            .ok_or(ActivityError::ParticipantNotFound)?;

        Ok(self.participants.remove(index))
    }

    /// Converts the domain model into its DTO, keyed by name.
    pub fn into_dto(self) -> (String, ActivityDto) {
        (
            self.name,
            ActivityDto {
                description: self.description,
                schedule: self.schedule,
                max_participants: self.max_participants,
                participants: self.participants,
            },
        )
    }
}

/// Converts a list of activities into the name-keyed DTO, keeping list order.
pub fn activities_into_dto(activities: Vec<Activity>) -> ActivitiesDto {
    ActivitiesDto(activities.into_iter().map(Activity::into_dto).collect())
}

/// Confirmation of a successful signup.
#[derive(Debug, Clone, PartialEq)]
pub struct Signup {
    pub activity_name: String,
    /// Normalized email as stored on the roster.
    pub email: String,
}

impl Signup {
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            message: format!("Signed up {} for {}", self.email, self.activity_name),
        }
    }
}

/// Confirmation of a successful withdrawal.
#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    pub activity_name: String,
    /// Normalized email that was removed.
    pub email: String,
}

impl Withdrawal {
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            message: format!("Unregistered {} from {}", self.email, self.activity_name),
        }
    }
}
