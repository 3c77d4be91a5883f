//! Server-side domain models.
//!
//! Domain models are held by the data layer and transformed to DTOs at the controller
//! boundary. They carry the roster rules so the store and service stay thin.

pub mod activity;
