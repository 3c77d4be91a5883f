//! Activities Test Utils
//!
//! Provides shared testing utilities for exercising the activities API in-process. The crate
//! wraps an axum `Router` in a small HTTP client so tests can issue requests without binding
//! a socket, then inspect status codes, headers and JSON bodies.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the router under test
//! - **TestRequest** / **TestResponse**: A single in-process request and its buffered response
//! - **TestError**: Error types that can occur while building or sending requests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_activities() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_router(router).build()?;
//!
//!     let response = test.get("/activities").send().await?;
//!     assert_eq!(response.status(), StatusCode::OK);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod request;
pub mod response;
