/// Scoring Client: the single point of entry for calls to the external match-scoring service.
///
/// The scorer turns (résumé, job description) into a 0–100 compatibility score plus
/// feedback. This crate never computes that score itself; it only consumes it.
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::comparison::models::{JobResult, Narrative};

#[cfg(test)]
pub mod stub;

const MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Scorer error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Scorer unavailable after {retries} attempts: {cause}")]
    Unavailable { retries: u32, cause: String },

    #[error("Scorer returned invalid score {score}: must be a finite number in [0, 100]")]
    InvalidScore { score: f64 },
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ScoreRequest<'a> {
    resume_key: &'a str,
    job_description: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScoreEnvelope {
    results: ScoreReport,
}

#[derive(Debug, Deserialize)]
struct ScorerErrorBody {
    error: String,
}

/// Feedback attached to a score by the external service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreFeedback {
    #[serde(default)]
    pub matched_skills_count: u32,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub strengths: Option<Narrative>,
    #[serde(default)]
    pub improvements: Option<Narrative>,
}

/// A single résumé-vs-JD score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub compatibility_score: f64,
    #[serde(default)]
    pub skill_match: f64,
    #[serde(default)]
    pub feedback: ScoreFeedback,
}

impl ScoreReport {
    /// Rejects scores the ranker and recommendation bands cannot interpret.
    pub fn validated(self) -> Result<Self, ScorerError> {
        let score = self.compatibility_score;
        if score.is_finite() && (0.0..=100.0).contains(&score) {
            Ok(self)
        } else {
            Err(ScorerError::InvalidScore { score })
        }
    }

    /// Maps the report onto the ranker's input shape.
    pub fn into_job_result(self, title: String) -> JobResult {
        JobResult {
            title,
            score: Some(self.compatibility_score),
            skill_match: Some(self.skill_match),
            matched_skills: Some(self.feedback.matched_skills_count),
            missing_skills: Some(self.feedback.missing_keywords.len() as u32),
            strengths: self.feedback.strengths,
            improvements: self.feedback.improvements,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer seam. Carried in `AppState` as `Arc<dyn MatchScorer>` so
/// handlers can be exercised without the external service.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, resume_key: &str, job_description: &str)
        -> Result<ScoreReport, ScorerError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HttpMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Calls `POST {base_url}/score` on the external scoring service.
/// Retries on 429, 5xx and transport errors with exponential backoff.
#[derive(Clone)]
pub struct HttpMatchScorer {
    client: Client,
    endpoint: String,
    backoff: Duration,
}

impl HttpMatchScorer {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build scorer HTTP client")?;

        Ok(Self {
            client,
            endpoint: score_endpoint(base_url),
            backoff: DEFAULT_BACKOFF,
        })
    }

    /// Base delay before the first retry; doubles on each further attempt.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MatchScorer for HttpMatchScorer {
    async fn score(
        &self,
        resume_key: &str,
        job_description: &str,
    ) -> Result<ScoreReport, ScorerError> {
        let request_body = ScoreRequest {
            resume_key,
            job_description,
        };

        let mut last_cause = String::new();

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = self.backoff * (1u32 << (attempt - 1));
                warn!(
                    "Scorer call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&self.endpoint)
                .json(&request_body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    warn!("Scorer request failed: {e}");
                    last_cause = e.to_string();
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Scorer returned {}: {}", status, body);
                last_cause = format!("status {}: {}", status.as_u16(), body);
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ScorerErrorBody>(&body)
                    .map(|e| e.error)
                    .unwrap_or(body);
                return Err(ScorerError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let envelope: ScoreEnvelope = response.json().await?;

            debug!(
                "Scorer call succeeded: score={:.1}, missing_keywords={}",
                envelope.results.compatibility_score,
                envelope.results.feedback.missing_keywords.len()
            );

            return Ok(envelope.results);
        }

        Err(ScorerError::Unavailable {
            retries: MAX_RETRIES,
            cause: last_cause,
        })
    }
}

fn score_endpoint(base_url: &str) -> String {
    format!("{}/score", base_url.trim_end_matches('/'))
}
