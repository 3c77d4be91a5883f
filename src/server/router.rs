use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::server::{
    config::Config,
    controller::{
        activity::{get_activities, signup_for_activity, unregister_from_activity},
        docs::openapi_json,
        root::root,
    },
    state::AppState,
};

/// API routes without the static mount or HTTP layers.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/activities", get(get_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(signup_for_activity).delete(unregister_from_activity),
        )
        .route("/openapi.json", get(openapi_json))
}

/// Full application: API routes, the static UI mount, and request tracing.
pub fn app(config: &Config, state: AppState) -> Router {
    router()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
