use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::{
    model::{
        activity::{ActivitiesDto, EmailParams},
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError, model::activity::activities_into_dto, service::activity::ActivityService,
        state::AppState,
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// Extracts the `email` query parameter.
///
/// Any value is accepted, including one that is blank; normalization happens in the service.
///
/// # Returns
/// - `Ok(String)` - Email as provided
/// - `Err(AppError::Validation)` - Parameter missing from the query string
fn require_email(params: Result<Query<EmailParams>, QueryRejection>) -> Result<String, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    Ok(params.email)
}

/// List every activity.
///
/// Returns all activities keyed by name, in the order they were seeded, with their current
/// rosters.
///
/// # Returns
/// - `200 OK` - JSON object mapping activity name to its details
#[utoipa::path(
    get,
    path = "/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "All activities keyed by name", body = ActivitiesDto)
    ),
)]
pub async fn get_activities(State(state): State<AppState>) -> impl IntoResponse {
    let service = ActivityService::new(&state.activities);

    let activities = service.list().await;

    (StatusCode::OK, Json(activities_into_dto(activities)))
}

/// Sign a student up for an activity.
///
/// The email is trimmed and lower-cased before it is stored and before duplicates are
/// checked. The activity name must match exactly.
///
/// # Arguments
/// - `state` - Application state containing the activity store
/// - `activity_name` - Percent-decoded activity name from the path
/// - `params` - Query parameters carrying `email`
///
/// # Returns
/// - `200 OK` - `{"message": "Signed up <email> for <activity>"}`
/// - `404 Not Found` - Activity does not exist
/// - `409 Conflict` - Student already signed up
/// - `422 Unprocessable Entity` - `email` missing
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    tag = ACTIVITY_TAG,
    params(
        ("activity_name" = String, Path, description = "Exact activity name"),
        EmailParams
    ),
    responses(
        (status = 200, description = "Student signed up", body = MessageDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 409, description = "Student already signed up", body = ErrorDto),
        (status = 422, description = "Missing email", body = ErrorDto)
    ),
)]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let email = require_email(params)?;

    let service = ActivityService::new(&state.activities);

    let signup = service.signup(&activity_name, &email).await?;

    tracing::info!("Signed up {} for {}", signup.email, signup.activity_name);

    Ok((StatusCode::OK, Json(signup.into_dto())))
}

/// Withdraw a student from an activity.
///
/// The email is matched against the roster using the same normalization as signup.
///
/// # Returns
/// - `200 OK` - `{"message": "Unregistered <email> from <activity>"}`
/// - `404 Not Found` - Activity does not exist or student is not signed up
/// - `422 Unprocessable Entity` - `email` missing
#[utoipa::path(
    delete,
    path = "/activities/{activity_name}/signup",
    tag = ACTIVITY_TAG,
    params(
        ("activity_name" = String, Path, description = "Exact activity name"),
        EmailParams
    ),
    responses(
        (status = 200, description = "Student withdrawn", body = MessageDto),
        (status = 404, description = "Activity not found or student not signed up", body = ErrorDto),
        (status = 422, description = "Missing email", body = ErrorDto)
    ),
)]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let email = require_email(params)?;

    let service = ActivityService::new(&state.activities);

    let withdrawal = service.withdraw(&activity_name, &email).await?;

    tracing::info!(
        "Unregistered {} from {}",
        withdrawal.email,
        withdrawal.activity_name
    );

    Ok((StatusCode::OK, Json(withdrawal.into_dto())))
}
