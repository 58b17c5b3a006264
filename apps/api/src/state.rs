use std::sync::Arc;

use crate::config::Config;
use crate::results::ResultStore;
use crate::scoring_client::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// External match scorer. Default: HttpMatchScorer pointed at SCORER_URL.
    pub scorer: Arc<dyn MatchScorer>,
    /// Finished analyses and comparisons, by analysis id.
    pub results: ResultStore,
}

#[cfg(test)]
pub fn test_state(scorer: impl MatchScorer + 'static) -> AppState {
    AppState {
        config: Config {
            scorer_url: "http://scorer.test".to_string(),
            scorer_timeout_secs: 5,
            port: 0,
            rust_log: "debug".to_string(),
        },
        scorer: Arc::new(scorer),
        results: ResultStore::default(),
    }
}
