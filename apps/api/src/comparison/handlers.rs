//! Axum route handlers for the Job Comparison API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::comparison::models::{Comparison, JobResult};
use crate::comparison::ranker::{compare, MIN_COMPARABLE_RESULTS};
use crate::errors::AppError;
use crate::results::StoredResult;
use crate::scoring_client::ScoreReport;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub results: Vec<JobResult>,
}

#[derive(Debug, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub title: Option<String>,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchCompareRequest {
    pub resume_key: String,
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchCompareResponse {
    pub analysis_id: Uuid,
    pub compared_at: DateTime<Utc>,
    /// Titles of jobs the scorer failed on or scored out of range; they are left
    /// out of the ranking.
    pub skipped: Vec<String>,
    #[serde(flatten)]
    pub comparison: Comparison,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/rank
///
/// Ranks already-scored job results. Pure: no scorer call.
pub async fn handle_rank(Json(request): Json<RankRequest>) -> Result<Json<Comparison>, AppError> {
    Ok(Json(compare(&request.results)?))
}

/// POST /api/v1/jobs/batch-compare
///
/// Scores the résumé against every non-empty JD, then ranks the results.
/// Needs at least two non-empty JDs, and at least two successful scores.
pub async fn handle_batch_compare(
    State(state): State<AppState>,
    Json(request): Json<BatchCompareRequest>,
) -> Result<Json<BatchCompareResponse>, AppError> {
    if request.resume_key.trim().is_empty() {
        return Err(AppError::Validation("resume_key cannot be empty".to_string()));
    }

    let postings: Vec<(String, &str)> = request
        .jobs
        .iter()
        .enumerate()
        .filter(|(_, job)| !job.description.trim().is_empty())
        .map(|(index, job)| (posting_title(job, index), job.description.as_str()))
        .collect();

    if postings.len() < MIN_COMPARABLE_RESULTS {
        return Err(AppError::Validation(format!(
            "At least {MIN_COMPARABLE_RESULTS} non-empty job descriptions are required, got {}",
            postings.len()
        )));
    }

    let mut results = Vec::with_capacity(postings.len());
    let mut skipped = Vec::new();

    for (title, description) in postings {
        let scored = state
            .scorer
            .score(&request.resume_key, description)
            .await
            .and_then(ScoreReport::validated);
        match scored {
            Ok(report) => results.push(report.into_job_result(title)),
            Err(e) => {
                warn!("Scoring failed for job '{title}', skipping: {e}");
                skipped.push(title);
            }
        }
    }

    if results.len() < MIN_COMPARABLE_RESULTS {
        return Err(AppError::UnprocessableEntity(format!(
            "Only {} of {} jobs could be scored; a comparison needs at least {MIN_COMPARABLE_RESULTS}",
            results.len(),
            results.len() + skipped.len()
        )));
    }

    let comparison = compare(&results)?;
    let analysis_id = Uuid::new_v4();
    info!(
        "Batch comparison {analysis_id}: {} jobs ranked, best match '{}' ({:.1})",
        comparison.rankings.len(),
        comparison.best_match.title,
        comparison.best_match.score
    );

    let response = BatchCompareResponse {
        analysis_id,
        compared_at: Utc::now(),
        skipped,
        comparison,
    };
    state
        .results
        .insert(StoredResult::Comparison(response.clone()))
        .await;

    Ok(Json(response))
}

/// Untitled postings are named by their 1-based position in the request.
fn posting_title(job: &JobPosting, index: usize) -> String {
    job.title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Job {}", index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::models::Narrative;
    use crate::scoring_client::stub::StubScorer;
    use crate::scoring_client::ScoreFeedback;
    use crate::state::test_state;

    fn report(score: f64, strengths: Option<Narrative>) -> ScoreReport {
        ScoreReport {
            compatibility_score: score,
            skill_match: score / 2.0,
            feedback: ScoreFeedback {
                matched_skills_count: 3,
                missing_keywords: vec!["aws".into()],
                strengths,
                improvements: None,
            },
        }
    }

    fn posting(title: Option<&str>, description: &str) -> JobPosting {
        JobPosting {
            title: title.map(str::to_string),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_rank_handler_rejects_single_result() {
        let request: RankRequest =
            serde_json::from_str(r#"{"results": [{"title": "A", "score": 90}]}"#).unwrap();
        let result = handle_rank(Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_rank_handler_orders_results() {
        let request: RankRequest = serde_json::from_str(
            r#"{"results": [
                {"title": "A", "score": 80},
                {"title": "B", "score": 80},
                {"title": "C", "score": 60}
            ]}"#,
        )
        .unwrap();
        let Json(comparison) = handle_rank(Json(request)).await.unwrap();
        let titles: Vec<&str> = comparison
            .rankings
            .iter()
            .map(|r| r.job.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(comparison.best_match.title, "A");
    }

    #[tokio::test]
    async fn test_batch_compare_ranks_scored_jobs() {
        let scorer = StubScorer::default()
            .with("frontend jd", report(48.0, None))
            .with(
                "backend jd",
                report(
                    82.5,
                    Some(Narrative::Items(vec!["Excellent skill set alignment".into()])),
                ),
            );

        let Json(response) = handle_batch_compare(
            State(test_state(scorer)),
            Json(BatchCompareRequest {
                resume_key: "resumes/me.pdf".into(),
                jobs: vec![
                    posting(Some("Frontend"), "frontend jd"),
                    posting(None, "   "),
                    posting(None, "backend jd"),
                ],
            }),
        )
        .await
        .unwrap();

        assert!(response.skipped.is_empty());
        assert_eq!(response.comparison.rankings.len(), 2);
        assert_eq!(response.comparison.best_match.title, "Job 3");
        assert_eq!(
            response.comparison.best_match.strengths,
            "Excellent skill set alignment."
        );
        assert_eq!(response.comparison.rankings[1].job.title, "Frontend");
    }

    #[tokio::test]
    async fn test_batch_compare_requires_two_descriptions() {
        let result = handle_batch_compare(
            State(test_state(StubScorer::default())),
            Json(BatchCompareRequest {
                resume_key: "resumes/me.pdf".into(),
                jobs: vec![posting(None, "only one"), posting(None, "")],
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_batch_compare_skips_failed_scores() {
        let scorer = StubScorer::default()
            .with("a", report(70.0, None))
            .with("b", report(65.0, None));

        let Json(response) = handle_batch_compare(
            State(test_state(scorer)),
            Json(BatchCompareRequest {
                resume_key: "resumes/me.pdf".into(),
                jobs: vec![
                    posting(Some("A"), "a"),
                    posting(Some("Broken"), "unscorable"),
                    posting(Some("B"), "b"),
                ],
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.skipped, vec!["Broken"]);
        assert_eq!(response.comparison.rankings.len(), 2);
    }

    #[tokio::test]
    async fn test_batch_compare_skips_out_of_range_scores() {
        let scorer = StubScorer::default()
            .with("a", report(70.0, None))
            .with("b", report(130.0, None))
            .with("c", report(60.0, None));

        let Json(response) = handle_batch_compare(
            State(test_state(scorer)),
            Json(BatchCompareRequest {
                resume_key: "resumes/me.pdf".into(),
                jobs: vec![
                    posting(Some("A"), "a"),
                    posting(Some("B"), "b"),
                    posting(Some("C"), "c"),
                ],
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.skipped, vec!["B"]);
        assert_eq!(response.comparison.best_match.title, "A");
        assert_eq!(response.comparison.rankings.len(), 2);
    }

    #[tokio::test]
    async fn test_batch_compare_stores_response() {
        let scorer = StubScorer::default()
            .with("a", report(70.0, None))
            .with("b", report(65.0, None));
        let state = test_state(scorer);

        let Json(response) = handle_batch_compare(
            State(state.clone()),
            Json(BatchCompareRequest {
                resume_key: "resumes/me.pdf".into(),
                jobs: vec![posting(Some("A"), "a"), posting(Some("B"), "b")],
            }),
        )
        .await
        .unwrap();

        match state.results.get(response.analysis_id).await {
            Some(StoredResult::Comparison(stored)) => {
                assert_eq!(stored.comparison, response.comparison)
            }
            other => panic!("expected stored comparison, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_batch_compare_fails_when_too_few_scored() {
        let scorer = StubScorer::default().with("a", report(70.0, None));

        let result = handle_batch_compare(
            State(test_state(scorer)),
            Json(BatchCompareRequest {
                resume_key: "resumes/me.pdf".into(),
                jobs: vec![posting(Some("A"), "a"), posting(Some("B"), "unscorable")],
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }

    #[test]
    fn test_posting_title_defaults_by_position() {
        assert_eq!(posting_title(&posting(None, "x"), 0), "Job 1");
        assert_eq!(posting_title(&posting(Some("  "), "x"), 4), "Job 5");
        assert_eq!(posting_title(&posting(Some(" SRE "), "x"), 1), "SRE");
    }
}
