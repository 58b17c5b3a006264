//! Job Ranker: orders per-job match results and singles out the best match.
//!
//! Sort is by score descending and stable: equal scores keep submission order.
//! Scores are validated up front so NaN or out-of-range values never reach the sort.

use thiserror::Error;

use crate::comparison::models::{
    BestMatch, Comparison, JobResult, MatchRecommendation, Narrative, RankedJobResult,
};

/// A comparison needs at least this many results.
pub const MIN_COMPARABLE_RESULTS: usize = 2;

const DEFAULT_STRENGTHS: &str = "Strong alignment with job requirements";
const DEFAULT_IMPROVEMENTS: &str = "Consider highlighting more relevant experience";

#[derive(Debug, Error, PartialEq)]
pub enum RankingError {
    #[error("At least 2 job results are required for a comparison, got {0}")]
    NotComparable(usize),

    #[error("Job '{title}' has no score")]
    MissingScore { title: String },

    #[error("Job '{title}' has invalid score {score}: must be a finite number in [0, 100]")]
    InvalidScore { title: String, score: f64 },
}

/// Ranks results by score, descending. Requires at least two results with valid scores.
pub fn rank_results(results: &[JobResult]) -> Result<Vec<RankedJobResult>, RankingError> {
    if results.len() < MIN_COMPARABLE_RESULTS {
        return Err(RankingError::NotComparable(results.len()));
    }

    let mut scored = results
        .iter()
        .map(|job| validate_score(job).map(|score| (score, job)))
        .collect::<Result<Vec<_>, _>>()?;

    // slice::sort_by is stable
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(index, (score, job))| {
            let recommendation = MatchRecommendation::from_score(score);
            RankedJobResult {
                rank: index + 1,
                score,
                recommendation,
                advice: recommendation.advice().to_string(),
                job: job.clone(),
            }
        })
        .collect())
}

/// Builds the best-match summary from an already-ranked list.
pub fn best_match(rankings: &[RankedJobResult]) -> Result<BestMatch, RankingError> {
    let top = rankings
        .iter()
        .find(|r| r.rank == 1)
        .ok_or(RankingError::NotComparable(rankings.len()))?;

    Ok(BestMatch {
        title: top.job.title.clone(),
        score: top.score,
        recommendation: top.recommendation,
        strengths: narrative_text(top.job.strengths.as_ref(), DEFAULT_STRENGTHS),
        improvements: narrative_text(top.job.improvements.as_ref(), DEFAULT_IMPROVEMENTS),
    })
}

/// Ranks and summarizes in one step.
pub fn compare(results: &[JobResult]) -> Result<Comparison, RankingError> {
    let rankings = rank_results(results)?;
    let best_match = best_match(&rankings)?;
    Ok(Comparison {
        rankings,
        best_match,
    })
}

/// Flattens scorer feedback into display text.
///
/// A list is joined into sentences ending with a period; a string is used as-is;
/// an absent, empty, or blank value falls back to `fallback`.
pub fn narrative_text(narrative: Option<&Narrative>, fallback: &str) -> String {
    match narrative {
        Some(Narrative::Items(items)) => {
            let sentences: Vec<&str> = items
                .iter()
                .map(|item| item.trim().trim_end_matches('.'))
                .filter(|item| !item.is_empty())
                .collect();
            if sentences.is_empty() {
                fallback.to_string()
            } else {
                format!("{}.", sentences.join(". "))
            }
        }
        Some(Narrative::Text(text)) if !text.trim().is_empty() => text.clone(),
        _ => fallback.to_string(),
    }
}

fn validate_score(job: &JobResult) -> Result<f64, RankingError> {
    let score = job.score.ok_or_else(|| RankingError::MissingScore {
        title: job.title.clone(),
    })?;

    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err(RankingError::InvalidScore {
            title: job.title.clone(),
            score,
        });
    }

    Ok(score)
}
