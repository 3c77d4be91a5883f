use axum::Router;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts around an axum router.
///
/// Provides a fluent interface for configuring the test environment. Add the router under
/// test with `with_router()`, then call `build()` to create the test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_router(router::router().with_state(state))
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Router requests are dispatched to. Must be fully stated (`Router<()>`).
    router: Option<Router>,
}

impl TestBuilder {
    /// Creates a new test builder with no router configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self { router: None }
    }

    /// Sets the router that requests will be sent to.
    ///
    /// Calling this more than once replaces the previously configured router.
    ///
    /// # Arguments
    /// - `router` - Router with its state already applied
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    /// Builds the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context ready to issue requests
    /// - `Err(TestError::MissingRouter)` - `with_router()` was never called
    pub fn build(self) -> Result<TestContext, TestError> {
        let router = self.router.ok_or(TestError::MissingRouter)?;

        Ok(TestContext::new(router))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
