//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! normalize input, call repositories, and return domain models rather than DTOs.

pub mod activity;
