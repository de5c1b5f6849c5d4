//! Entity to model mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod query;
mod recommendation;

pub use query::{escape_like, QueryInsert};
pub use recommendation::{filter_column, RecommendationInsert};
