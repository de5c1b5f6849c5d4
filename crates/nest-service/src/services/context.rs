//! Service context - dependency container for services
//!
//! Built once at startup. The store adapters inside share one connection
//! pool (or one in-memory map), so cloning the context never opens new
//! connections.

use std::sync::Arc;

use nest_common::auth::JwtService;
use nest_common::AppError;
use nest_core::traits::{HealthProbe, QueryRepository, RecommendationRepository};
use nest_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Store adapters
    query_repo: Arc<dyn QueryRepository>,
    recommendation_repo: Arc<dyn RecommendationRepository>,
    health_probe: Arc<dyn HealthProbe>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        query_repo: Arc<dyn QueryRepository>,
        recommendation_repo: Arc<dyn RecommendationRepository>,
        health_probe: Arc<dyn HealthProbe>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            query_repo,
            recommendation_repo,
            health_probe,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Store adapters ===

    /// Get the query repository
    pub fn query_repo(&self) -> &dyn QueryRepository {
        self.query_repo.as_ref()
    }

    /// Get the recommendation repository
    pub fn recommendation_repo(&self) -> &dyn RecommendationRepository {
        self.recommendation_repo.as_ref()
    }

    /// Get the store readiness probe
    pub fn health_probe(&self) -> &dyn HealthProbe {
        self.health_probe.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new document id
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    query_repo: Option<Arc<dyn QueryRepository>>,
    recommendation_repo: Option<Arc<dyn RecommendationRepository>>,
    health_probe: Option<Arc<dyn HealthProbe>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_repo(mut self, repo: Arc<dyn QueryRepository>) -> Self {
        self.query_repo = Some(repo);
        self
    }

    pub fn recommendation_repo(mut self, repo: Arc<dyn RecommendationRepository>) -> Self {
        self.recommendation_repo = Some(repo);
        self
    }

    pub fn health_probe(mut self, probe: Arc<dyn HealthProbe>) -> Self {
        self.health_probe = Some(probe);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// A missing id generator defaults to worker 0.
    ///
    /// # Errors
    /// Returns a configuration error if a store adapter or the JWT service is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.query_repo
                .ok_or_else(|| missing("query_repo"))?,
            self.recommendation_repo
                .ok_or_else(|| missing("recommendation_repo"))?,
            self.health_probe
                .ok_or_else(|| missing("health_probe"))?,
            self.jwt_service
                .ok_or_else(|| missing("jwt_service"))?,
            self.snowflake_generator.unwrap_or_default(),
        ))
    }
}

fn missing(component: &str) -> ServiceError {
    ServiceError::App(AppError::Config(format!("{component} is required")))
}
