use axum::http::StatusCode;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, error::TestError};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{router, state::AppState},
};


/// Builds a context around the API routes with a fresh seeded store.
fn seeded_context() -> TestContext {
    TestBuilder::new()
        .with_router(router::router().with_state(AppState::seeded()))
        .build()
        .unwrap()
}

/// Fetches `/activities` and returns the roster of one activity.
async fn participants(test: &TestContext, activity: &str) -> Result<Vec<String>, TestError> {
    let activities: Value = test.get("/activities").send().await?.json()?;

    Ok(activities[activity]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap().to_string())
        .collect())
}
