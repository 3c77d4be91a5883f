use thiserror::Error;

/// Errors that can occur while setting up a test context or sending a request.
#[derive(Error, Debug)]
pub enum TestError {
    /// `TestBuilder::build` was called without a router.
    #[error("No router configured, call `with_router` before `build`")]
    MissingRouter,

    /// The request could not be assembled (invalid URI, header, etc.).
    #[error(transparent)]
    Http(#[from] axum::http::Error),

    /// The response body could not be read.
    #[error(transparent)]
    Body(#[from] axum::Error),

    /// The response body is not the JSON the test expected.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
