//! Repository implementations
//!
//! PostgreSQL implementations of the store traits defined in nest-core.

mod error;
mod health;
mod query;
mod recommendation;

pub use health::PgHealthProbe;
pub use query::PgQueryRepository;
pub use recommendation::PgRecommendationRepository;
