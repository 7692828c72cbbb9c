//! GetAnalysisHandler - Query handler for loading a single analysis.

use std::sync::Arc;

use crate::domain::foundation::{AnalysisId, DomainError};
use crate::domain::matrix::Analysis;
use crate::ports::AnalysisRepository;

/// Query for one analysis by id.
#[derive(Debug, Clone, Copy)]
pub struct GetAnalysisQuery {
    pub analysis_id: AnalysisId,
}

/// Handler for loading analyses.
pub struct GetAnalysisHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl GetAnalysisHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetAnalysisQuery) -> Result<Analysis, DomainError> {
        Ok(self.repository.find_by_id(query.analysis_id).await?)
    }
}
