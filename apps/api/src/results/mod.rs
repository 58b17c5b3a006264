//! Result Store: keeps finished analyses and comparisons so they can be fetched by id.
//!
//! In-memory only; entries live as long as the process.

pub mod handlers;

use std::{collections::HashMap, sync::Arc};

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::comparison::handlers::BatchCompareResponse;
use crate::skills::handlers::AnalyzeResponse;

/// A finished response, tagged with the operation that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoredResult {
    Analysis(AnalyzeResponse),
    Comparison(BatchCompareResponse),
}

impl StoredResult {
    pub fn id(&self) -> Uuid {
        match self {
            StoredResult::Analysis(r) => r.analysis_id,
            StoredResult::Comparison(r) => r.analysis_id,
        }
    }
}

#[derive(Clone, Default)]
pub struct ResultStore {
    entries: Arc<RwLock<HashMap<Uuid, StoredResult>>>,
}

impl ResultStore {
    pub async fn insert(&self, result: StoredResult) {
        self.entries.write().await.insert(result.id(), result);
    }

    pub async fn get(&self, id: Uuid) -> Option<StoredResult> {
        self.entries.read().await.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::models::MatchRecommendation;
    use crate::skills::learning_path::build_learning_path;
    use chrono::Utc;

    fn analysis(id: Uuid) -> StoredResult {
        StoredResult::Analysis(AnalyzeResponse {
            analysis_id: id,
            analyzed_at: Utc::now(),
            score: 64.0,
            skill_match: 50.0,
            recommendation: MatchRecommendation::from_score(64.0),
            learning_path: build_learning_path(&["docker"]),
        })
    }

    #[tokio::test]
    async fn test_insert_then_get_by_id() {
        let store = ResultStore::default();
        let id = Uuid::new_v4();
        store.insert(analysis(id)).await;

        let stored = store.get(id).await.unwrap();
        assert_eq!(stored.id(), id);
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = ResultStore::default();
        let handle = store.clone();
        let id = Uuid::new_v4();
        handle.insert(analysis(id)).await;
        assert!(store.get(id).await.is_some());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(analysis(Uuid::nil())).unwrap();
        assert_eq!(json["kind"], "analysis");
        assert_eq!(json["score"], 64.0);
        assert_eq!(json["recommendation"], "good match");
    }
}
