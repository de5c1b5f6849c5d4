//! Store traits (ports)

mod repositories;

pub use repositories::{HealthProbe, QueryRepository, RecommendationRepository, RepoResult};
