//! In-memory data layer for the activity directory.
//!
//! `ActivityStore` owns the authoritative activity collection and its lock; repositories
//! borrow a store and perform each read or read-check-write under a single lock
//! acquisition. Nothing is persisted: a restart reloads the seed.

pub mod activity;
pub mod seed;
pub mod store;
