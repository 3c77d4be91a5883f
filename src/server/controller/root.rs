use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Path of the UI entry point served by the static file mount.
pub const STATIC_INDEX_PATH: &str = "/static/index.html";

/// Redirect the site root to the static UI.
///
/// # Returns
/// - `302 Found` - `Location` points at the static index page
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 302, description = "Redirect to the static UI",
            headers(("location" = String, description = "Static index page")))
    ),
)]
pub async fn root() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, STATIC_INDEX_PATH)])
}
