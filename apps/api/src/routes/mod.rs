pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::review::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/reviews", post(handlers::handle_create_review))
        .route(
            "/api/v1/reviews/report",
            post(handlers::handle_review_report),
        )
        .with_state(state)
}
