pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor;
use crate::analysis;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(analysis::handlers::handle_analyze))
        .route(
            "/api/v1/analysis/export",
            post(analysis::handlers::handle_export),
        )
        // Advisor API (optional; 503 when no credential is configured)
        .route("/api/v1/advisor/ask", post(advisor::handlers::handle_ask))
        .with_state(state)
}
