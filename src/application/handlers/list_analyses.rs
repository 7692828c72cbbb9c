//! ListAnalysesHandler - Query handler for listing all analyses.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::matrix::Analysis;
use crate::ports::AnalysisRepository;

/// Query for all stored analyses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAnalysesQuery;

/// Handler for listing analyses, oldest first.
pub struct ListAnalysesHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl ListAnalysesHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListAnalysesQuery) -> Result<Vec<Analysis>, DomainError> {
        Ok(self.repository.list().await?)
    }
}
