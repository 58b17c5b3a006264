use serde::{Deserialize, Serialize};

/// Free-text feedback from the scorer: sometimes a list of sentences, sometimes one string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Narrative {
    Items(Vec<String>),
    Text(String),
}

/// One job's match result, as produced by the external scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    pub title: String,
    /// 0 – 100. Optional on the wire so a missing score is reported as a validation error.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub skill_match: Option<f64>,
    #[serde(default)]
    pub matched_skills: Option<u32>,
    #[serde(default)]
    pub missing_skills: Option<u32>,
    #[serde(default)]
    pub strengths: Option<Narrative>,
    #[serde(default)]
    pub improvements: Option<Narrative>,
}

/// Qualitative band derived purely from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRecommendation {
    #[serde(rename = "excellent match")]
    Excellent,
    #[serde(rename = "good match")]
    Good,
    #[serde(rename = "fair match")]
    Fair,
    #[serde(rename = "significant gap")]
    SignificantGap,
}

impl MatchRecommendation {
    /// Lower bounds are inclusive: 75, 55, 40.
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            MatchRecommendation::Excellent
        } else if score >= 55.0 {
            MatchRecommendation::Good
        } else if score >= 40.0 {
            MatchRecommendation::Fair
        } else {
            MatchRecommendation::SignificantGap
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            MatchRecommendation::Excellent => "Excellent match! Apply with confidence",
            MatchRecommendation::Good => "Good match. Consider applying",
            MatchRecommendation::Fair => "Fair match. Skill development recommended",
            MatchRecommendation::SignificantGap => "Significant skill gaps. Needs preparation",
        }
    }
}

/// A job result with its position in the ranking. `score` is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJobResult {
    pub rank: usize,
    pub score: f64,
    pub recommendation: MatchRecommendation,
    pub advice: String,
    pub job: JobResult,
}

/// The rank-1 result with its feedback flattened into display sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMatch {
    pub title: String,
    pub score: f64,
    pub recommendation: MatchRecommendation,
    pub strengths: String,
    pub improvements: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub rankings: Vec<RankedJobResult>,
    pub best_match: BestMatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_bands_inclusive_lower_bound() {
        assert_eq!(MatchRecommendation::from_score(100.0), MatchRecommendation::Excellent);
        assert_eq!(MatchRecommendation::from_score(75.0), MatchRecommendation::Excellent);
        assert_eq!(MatchRecommendation::from_score(74.9), MatchRecommendation::Good);
        assert_eq!(MatchRecommendation::from_score(55.0), MatchRecommendation::Good);
        assert_eq!(MatchRecommendation::from_score(54.99), MatchRecommendation::Fair);
        assert_eq!(MatchRecommendation::from_score(40.0), MatchRecommendation::Fair);
        assert_eq!(MatchRecommendation::from_score(39.9), MatchRecommendation::SignificantGap);
        assert_eq!(MatchRecommendation::from_score(0.0), MatchRecommendation::SignificantGap);
    }

    #[test]
    fn test_recommendation_serializes_as_label() {
        let json = serde_json::to_string(&MatchRecommendation::SignificantGap).unwrap();
        assert_eq!(json, r#""significant gap""#);
    }

    #[test]
    fn test_job_result_narrative_accepts_list_string_or_absent() {
        let json = r#"[
            {"title": "A", "score": 80, "strengths": ["Good Rust", "Strong SQL"]},
            {"title": "B", "score": 60.5, "strengths": "Solid fit"},
            {"title": "C"}
        ]"#;
        let results: Vec<JobResult> = serde_json::from_str(json).unwrap();

        assert_eq!(
            results[0].strengths,
            Some(Narrative::Items(vec!["Good Rust".into(), "Strong SQL".into()]))
        );
        assert_eq!(results[1].strengths, Some(Narrative::Text("Solid fit".into())));
        assert_eq!(results[1].score, Some(60.5));
        assert_eq!(results[2].strengths, None);
        assert_eq!(results[2].score, None);
    }
}
