use axum::{
    body::Body,
    http::{Method, Request},
    Router,
};
use tower::ServiceExt;
use url::form_urlencoded;

use crate::{error::TestError, response::TestResponse};

/// A single in-process request against the router under test.
///
/// Query parameters added via `query()` are form-encoded and appended to the path when the
/// request is sent.
pub struct TestRequest {
    router: Router,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
}

impl TestRequest {
    pub(crate) fn new(router: Router, method: Method, path: &str) -> Self {
        Self {
            router,
            method,
            path: path.to_string(),
            query: Vec::new(),
        }
    }

    /// Adds a query parameter. Values are encoded, so raw emails with `+` or spaces are fine.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Returns the request URI with encoded query parameters appended.
    fn uri(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();

        format!("{}?{}", self.path, query)
    }

    /// Sends the request through the router and buffers the full response.
    ///
    /// # Returns
    /// - `Ok(TestResponse)` - Response with buffered body
    /// - `Err(TestError::Http)` - The URI could not be parsed
    /// - `Err(TestError::Body)` - The response body could not be read
    pub async fn send(self) -> Result<TestResponse, TestError> {
        let request = Request::builder()
            .method(self.method.clone())
            .uri(self.uri())
            .body(Body::empty())?;

        let response = match self.router.oneshot(request).await {
            Ok(response) => response,
            Err(infallible) => match infallible {},
        };

        TestResponse::from_response(response).await
    }
}
