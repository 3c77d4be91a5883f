//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Email normalization and directory operations
//! - **Data Layer** (`data/`) - In-memory activity store, its lock, and the seed
//! - **Model Layer** (`model/`) - Domain models and roster rules
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the activity store)
//! - **Startup** (`startup`) - Tracing, listener binding, and shutdown signal
//! - **Router** (`router`) - Axum route configuration and static file mount
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Controller** validates query parameters, calls the service
//! 3. **Service** normalizes the email and calls the repository
//! 4. **Data** takes the store lock, validates and mutates the roster atomically
//! 5. **Controller** converts the domain result to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
