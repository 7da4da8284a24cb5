pub mod admin;
pub mod games;
pub mod health;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::middleware::{admin_middleware, auth_middleware};
use crate::api::AppState;

/// Create the main API router
pub fn create_api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .nest("/games", create_games_router(state.clone()))
        .nest("/admin", create_admin_router(state.clone()))
        .route("/health", get(health::health_handler))
        .with_state(state)
}

/// Create games router (public, no auth)
fn create_games_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(games::list_games))
        .route("/:gameType", post(games::create_game))
        .route("/:gameType/:code", get(games::get_game))
        .with_state(state)
}

/// Create admin router
fn create_admin_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/bulk-delete", post(admin::bulk_delete_users))
        .route("/users/reset-password", post(admin::reset_password))
        // Layers run outermost-last: auth first, then the admin check
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}
