pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::comparison::handlers as comparison;
use crate::results::handlers as results;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skill gap API
        .route("/api/v1/skills/classify", post(skills::handle_classify))
        .route(
            "/api/v1/skills/learning-path",
            post(skills::handle_learning_path),
        )
        .route("/api/v1/analyze", post(skills::handle_analyze))
        // Job comparison API
        .route("/api/v1/jobs/rank", post(comparison::handle_rank))
        .route(
            "/api/v1/jobs/batch-compare",
            post(comparison::handle_batch_compare),
        )
        // Stored results
        .route("/api/v1/results/:id", get(results::handle_get_result))
        .with_state(state)
}
