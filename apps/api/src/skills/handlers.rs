//! Axum route handlers for the Skills API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::comparison::models::MatchRecommendation;
use crate::errors::AppError;
use crate::results::StoredResult;
use crate::scoring_client::ScoreReport;
use crate::skills::classifier::{classify_tokens, TokenVerdict};
use crate::skills::learning_path::{build_learning_path, LearningPath};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub tokens: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub results: Vec<TokenVerdict>,
}

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_key: String,
    pub job_description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub score: f64,
    pub skill_match: f64,
    pub recommendation: MatchRecommendation,
    pub learning_path: LearningPath,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/classify
///
/// Returns the technical/non-technical verdict for each token, in input order.
pub async fn handle_classify(Json(request): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    Json(ClassifyResponse {
        results: classify_tokens(&request.tokens),
    })
}

/// POST /api/v1/skills/learning-path
///
/// Filters raw missing skills and attaches priority tiers and courses.
pub async fn handle_learning_path(Json(request): Json<LearningPathRequest>) -> Json<LearningPath> {
    Json(build_learning_path(&request.missing_skills))
}

/// POST /api/v1/analyze
///
/// Scores one JD through the external scorer and builds the learning path
/// from the keywords it reports as missing. The response is kept for
/// `GET /api/v1/results/:id`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.resume_key.trim().is_empty() {
        return Err(AppError::Validation("resume_key cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let report = state
        .scorer
        .score(&request.resume_key, &request.job_description)
        .await
        .and_then(ScoreReport::validated)?;

    let analysis_id = Uuid::new_v4();
    let learning_path = build_learning_path(&report.feedback.missing_keywords);
    info!(
        "Analysis {analysis_id}: score {:.1}, {} technical gaps",
        report.compatibility_score, learning_path.total_technical
    );

    let response = AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        score: report.compatibility_score,
        skill_match: report.skill_match,
        recommendation: MatchRecommendation::from_score(report.compatibility_score),
        learning_path,
    };
    state
        .results
        .insert(StoredResult::Analysis(response.clone()))
        .await;

    Ok(Json(response))
}
