pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

// Re-export for convenience
pub use crate::infrastructure::app_state::AppState;
use crate::infrastructure::config::AppConfig;

/// Build the full HTTP application
pub fn build_app(state: Arc<AppState>, config: &AppConfig) -> Router {
    Router::new()
        .nest("/api", routes::create_api_router(state.clone()))
        .route("/health", axum::routing::get(routes::health::health_handler))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
