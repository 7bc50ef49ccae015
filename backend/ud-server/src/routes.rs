use crate::cors::build_cors_layer;
use crate::{AppState, create_user, delete_user, get_user, health, list_users, update_user};

use axum::{Router, routing::get};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(state.allowed_origin.clone());

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // User directory
        .route(
            "/api/v1/users",
            get(list_users)
                .post(create_user)
                .put(update_user)
                .delete(delete_user),
        )
        .route("/api/v1/user", get(get_user))
        .with_state(state)
        .layer(cors)
}
