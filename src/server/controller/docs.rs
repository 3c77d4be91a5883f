use axum::Json;
use utoipa::OpenApi;

use crate::{
    model::{
        activity::{ActivitiesDto, ActivityDto},
        api::{ErrorDto, MessageDto},
    },
    server::controller::{activity, root},
};

/// OpenAPI document covering every API route.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mergington High School API",
        description = "API for viewing and signing up for extracurricular activities"
    ),
    paths(
        root::root,
        activity::get_activities,
        activity::signup_for_activity,
        activity::unregister_from_activity
    ),
    components(schemas(ActivitiesDto, ActivityDto, MessageDto, ErrorDto))
)]
pub struct ApiDoc;

/// GET /openapi.json - Serve the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
