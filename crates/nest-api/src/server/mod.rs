//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use nest_common::{AppConfig, AppError, JwtService, StoreBackend};
use nest_core::SnowflakeGenerator;
use nest_db::{
    create_pool, run_migrations, MemoryHealthProbe, MemoryQueryRepository,
    MemoryRecommendationRepository, PgHealthProbe, PgQueryRepository, PgRecommendationRepository,
    PoolOptions,
};
use nest_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes, log_guarded_groups};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    log_guarded_groups(&state);

    let api = apply_rate_limit(create_router(&state), config.rate_limit.as_ref());
    let router = api.merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());

    router.with_state(state)
}

/// Open the configured store and create AppState
///
/// The store handle is created once here and shared by every repository.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.session_expiry));
    let snowflake_generator = Arc::new(
        SnowflakeGenerator::new(config.store.worker_id).map_err(|e| AppError::Config(e.to_string()))?,
    );

    let builder = ServiceContextBuilder::new()
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator);

    let builder = match config.store.backend {
        StoreBackend::Postgres => {
            let db_config = config
                .store
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required for the postgres store".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(db_config, &PoolOptions::default())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            run_migrations(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            builder
                .query_repo(Arc::new(PgQueryRepository::new(pool.clone())))
                .recommendation_repo(Arc::new(PgRecommendationRepository::new(pool.clone())))
                .health_probe(Arc::new(PgHealthProbe::new(pool)))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store; data is lost on shutdown");
            builder
                .query_repo(Arc::new(MemoryQueryRepository::new()))
                .recommendation_repo(Arc::new(MemoryRecommendationRepository::new()))
                .health_probe(Arc::new(MemoryHealthProbe))
        }
    };

    let service_context = builder.build().map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, listener).await
}
