//! # nest-db
//!
//! Document store adapters implementing the nest-core store traits.
//!
//! - PostgreSQL via SQLx: connection pool, schema bootstrap, models, mappers
//!   and repositories
//! - In-memory adapters for tests and single-process deployments
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nest_db::pool::{create_pool, run_migrations, PoolOptions};
//! use nest_db::PgQueryRepository;
//!
//! async fn example(config: &nest_common::DatabaseConfig) -> Result<(), sqlx::Error> {
//!     let pool = create_pool(config, &PoolOptions::default()).await?;
//!     run_migrations(&pool).await?;
//!     let queries = PgQueryRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryHealthProbe, MemoryQueryRepository, MemoryRecommendationRepository};
pub use pool::{create_pool, run_migrations, PgPool, PoolOptions};
pub use repositories::{PgHealthProbe, PgQueryRepository, PgRecommendationRepository};
