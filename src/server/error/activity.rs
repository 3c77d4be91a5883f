use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Expected, caller-visible failures of the activity directory.
///
/// None of these are retried or logged by the directory itself; they are returned as-is and
/// rendered at the HTTP boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    /// No activity exists under the requested name.
    ///
    /// Names are matched exactly, including case and inner whitespace.
    #[error("Activity not found")]
    ActivityNotFound,

    /// The normalized email is already on the activity's roster.
    #[error("Student already signed up")]
    AlreadySignedUp,

    /// The normalized email is not on the activity's roster.
    #[error("Student not signed up for this activity")]
    ParticipantNotFound,
}

impl ActivityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ActivityNotFound | Self::ParticipantNotFound => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp => StatusCode::CONFLICT,
        }
    }
}

/// Converts activity errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `ActivityNotFound` and `ParticipantNotFound`
/// - 409 Conflict - For `AlreadySignedUp`
impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorDto {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
