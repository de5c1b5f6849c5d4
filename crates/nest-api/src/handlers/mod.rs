//! Route handlers
//!
//! All HTTP request handlers organized by collection.

pub mod auth;
pub mod health;
pub mod queries;
pub mod recommendations;
