//! Database models - SQLx-compatible structs for PostgreSQL tables

mod query;
mod recommendation;

pub use query::{QueryModel, UpdateCountsModel};
pub use recommendation::RecommendationModel;
