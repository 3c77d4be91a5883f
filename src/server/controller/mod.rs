//! HTTP request handlers.
//!
//! Controllers extract and validate request parameters, call the service layer, and convert
//! domain results into DTOs. Errors are returned as `AppError` and rendered by its
//! `IntoResponse` implementation.

pub mod activity;
pub mod docs;
pub mod root;

#[cfg(test)]
mod test;
