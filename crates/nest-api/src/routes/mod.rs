//! Route definitions
//!
//! Routes are grouped by collection and access kind. Each group gets the
//! session guard when the deployment lists it in `AUTH_GUARDED_ROUTES`.

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post, put, MethodRouter},
    Router,
};
use nest_common::RouteGroup;
use tracing::info;

use crate::handlers::{auth, health, queries, recommendations};
use crate::middleware::require_auth;
use crate::state::AppState;

/// Create the API router (health routes are mounted separately)
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(session_routes())
        .merge(query_routes(state))
        .merge(recommendation_routes(state))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Session routes; never guarded
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/query/jwt", post(auth::issue_session))
        .route("/logout", post(auth::logout))
}

/// Query collection routes
fn query_routes(state: &AppState) -> Router<AppState> {
    let read = |route| guard(state, RouteGroup::QueryRead, route);
    let write = |route| guard(state, RouteGroup::QueryWrite, route);

    Router::new()
        .route("/query", read(get(queries::list_queries)))
        .route("/query", write(post(queries::create_query)))
        .route("/queryCount", read(get(queries::count_queries)))
        .route("/queryhome", read(get(queries::recent_queries)))
        .route("/query/:id", read(get(queries::get_query)))
        .route("/query/:id", write(put(queries::replace_query)))
        .route("/query/:id", write(delete(queries::delete_query)))
        .route("/query/:id/increment", write(patch(queries::increment_count)))
        .route("/query/:id/decrement", write(patch(queries::decrement_count)))
}

/// Recommendation collection routes
fn recommendation_routes(state: &AppState) -> Router<AppState> {
    let read = |route| guard(state, RouteGroup::RecommendationRead, route);
    let write = |route| guard(state, RouteGroup::RecommendationWrite, route);

    Router::new()
        .route("/recommendations", read(get(recommendations::list_recommendations)))
        .route("/recommendations", write(post(recommendations::create_recommendation)))
        .route("/recommendations/:id", read(get(recommendations::list_by_query)))
        .route("/recommendation", read(get(recommendations::list_by_recommender)))
        .route("/recommendation", write(post(recommendations::create_recommendation)))
        .route("/recommendation/:id", read(get(recommendations::list_by_query)))
        .route("/recommendation/:id", write(delete(recommendations::delete_recommendation)))
        .route("/recommendationforme", read(get(recommendations::list_for_owner)))
}

/// Attach the session guard to `route` when `group` is configured as guarded
fn guard(state: &AppState, group: RouteGroup, route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    if state.config().auth.is_guarded(group) {
        route.route_layer(from_fn_with_state(state.clone(), require_auth))
    } else {
        route
    }
}

/// Log which route groups carry the session guard
pub fn log_guarded_groups(state: &AppState) {
    for group in RouteGroup::ALL {
        info!(
            group = group.as_str(),
            guarded = state.config().auth.is_guarded(group),
            "Route group access"
        );
    }
}
