//! DeleteAnalysisHandler - Command handler for removing an analysis.

use std::sync::Arc;

use crate::domain::foundation::{AnalysisId, DomainError};
use crate::ports::AnalysisRepository;

/// Command to delete an analysis and everything in it.
#[derive(Debug, Clone, Copy)]
pub struct DeleteAnalysisCommand {
    pub analysis_id: AnalysisId,
}

/// Handler for deleting analyses.
pub struct DeleteAnalysisHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl DeleteAnalysisHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteAnalysisCommand) -> Result<(), DomainError> {
        Ok(self.repository.delete(cmd.analysis_id).await?)
    }
}
