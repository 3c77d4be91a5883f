use axum::{http::Method, Router};

use crate::request::TestRequest;

/// Test context holding the router under test.
///
/// Each request clones the router, so requests issued from the same context share whatever
/// state was attached to the router when it was built. Build a fresh context per test to keep
/// tests isolated from one another.
pub struct TestContext {
    router: Router,
}

impl TestContext {
    /// Creates a test context around the provided router.
    ///
    /// Typically called through `TestBuilder::build()` rather than directly.
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Starts a request with an arbitrary method.
    ///
    /// # Arguments
    /// - `method` - HTTP method
    /// - `path` - Request path; must already be percent-encoded (e.g. `Chess%20Club`)
    ///
    /// # Returns
    /// - `TestRequest` - Request builder bound to this context's router
    pub fn request(&self, method: Method, path: &str) -> TestRequest {
        TestRequest::new(self.router.clone(), method, path)
    }

    /// Starts a `GET` request.
    pub fn get(&self, path: &str) -> TestRequest {
        self.request(Method::GET, path)
    }

    /// Starts a `POST` request.
    pub fn post(&self, path: &str) -> TestRequest {
        self.request(Method::POST, path)
    }

    /// Starts a `DELETE` request.
    pub fn delete(&self, path: &str) -> TestRequest {
        self.request(Method::DELETE, path)
    }
}
