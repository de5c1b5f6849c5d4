//! Domain entities

mod query;
mod recommendation;

pub use query::{Query, QueryFields};
pub use recommendation::{NewRecommendation, Recommendation, RecommendationFilter};
