//! In-Memory Analysis Repository
//!
//! Stores analyses in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::AnalysisId;
use crate::domain::matrix::Analysis;
use crate::ports::{AnalysisRepository, RepositoryError};

/// In-memory repository for ACH analyses.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalysisRepository {
    analyses: Arc<RwLock<HashMap<AnalysisId, Analysis>>>,
}

impl InMemoryAnalysisRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        self.analyses.write().await.clear();
    }

    /// Get the number of stored analyses.
    pub async fn count(&self) -> usize {
        self.analyses.read().await.len()
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    async fn save(&self, analysis: &Analysis) -> Result<(), RepositoryError> {
        let mut analyses = self.analyses.write().await;
        analyses.insert(analysis.id, analysis.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AnalysisId) -> Result<Analysis, RepositoryError> {
        let analyses = self.analyses.read().await;
        analyses
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Analysis>, RepositoryError> {
        let analyses = self.analyses.read().await;
        let mut all: Vec<Analysis> = analyses.values().cloned().collect();
        // HashMap iteration order is arbitrary; present oldest first.
        all.sort_by_key(|a| a.created_at);
        Ok(all)
    }

    async fn delete(&self, id: AnalysisId) -> Result<(), RepositoryError> {
        let mut analyses = self.analyses.write().await;
        analyses
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemoryAnalysisRepository::new();
        let analysis = Analysis::new("Test").unwrap();
        repo.save(&analysis).await.unwrap();

        let loaded = repo.find_by_id(analysis.id).await.unwrap();
        assert_eq!(loaded, analysis);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn save_replaces_existing() {
        let repo = InMemoryAnalysisRepository::new();
        let mut analysis = Analysis::new("Test").unwrap();
        repo.save(&analysis).await.unwrap();

        analysis.add_hypothesis("New").unwrap();
        repo.save(&analysis).await.unwrap();

        let loaded = repo.find_by_id(analysis.id).await.unwrap();
        assert_eq!(loaded.hypotheses.len(), 1);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn find_missing_returns_not_found() {
        let repo = InMemoryAnalysisRepository::new();
        let result = repo.find_by_id(AnalysisId::new()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_analysis() {
        let repo = InMemoryAnalysisRepository::new();
        let analysis = Analysis::new("Test").unwrap();
        repo.save(&analysis).await.unwrap();

        repo.delete(analysis.id).await.unwrap();
        assert_eq!(repo.count().await, 0);
        assert!(repo.delete(analysis.id).await.is_err());
    }

    #[tokio::test]
    async fn list_returns_all_oldest_first() {
        let repo = InMemoryAnalysisRepository::new();
        let a = Analysis::new("First").unwrap();
        let b = Analysis::new("Second").unwrap();
        repo.save(&b).await.unwrap();
        repo.save(&a).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].created_at <= all[1].created_at);
    }
}
