//! In-memory scorer for handler tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::scoring_client::{MatchScorer, ScoreReport, ScorerError};

/// Returns a canned report per job description; unknown descriptions fail with a 500.
#[derive(Default)]
pub struct StubScorer {
    reports: HashMap<String, ScoreReport>,
}

impl StubScorer {
    pub fn with(mut self, job_description: &str, report: ScoreReport) -> Self {
        self.reports.insert(job_description.to_string(), report);
        self
    }
}

#[async_trait]
impl MatchScorer for StubScorer {
    async fn score(
        &self,
        _resume_key: &str,
        job_description: &str,
    ) -> Result<ScoreReport, ScorerError> {
        self.reports
            .get(job_description)
            .cloned()
            .ok_or_else(|| ScorerError::Api {
                status: 500,
                message: format!("no canned score for '{job_description}'"),
            })
    }
}
