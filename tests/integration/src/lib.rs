//! Integration test utilities for Query Nest
//!
//! Spawns the full API (routes, middleware, session guard) on a loopback
//! port, backed by the in-memory store, and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
