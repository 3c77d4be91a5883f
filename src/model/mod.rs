//! Wire-level DTOs exchanged with API clients.
//!
//! These types define the JSON shapes of request and response bodies. Server-side domain
//! models convert into them at the controller boundary.

pub mod activity;
pub mod api;
