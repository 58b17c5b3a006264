//! Axum route handlers for stored results.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::results::StoredResult;
use crate::state::AppState;

/// GET /api/v1/results/:id
///
/// Returns a previously produced analysis or batch comparison.
pub async fn handle_get_result(
    State(state): State<AppState>,
    Path(analysis_id): Path<Uuid>,
) -> Result<Json<StoredResult>, AppError> {
    state
        .results
        .get(analysis_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Analysis {analysis_id} not found")))
}
