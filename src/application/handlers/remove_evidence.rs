//! RemoveEvidenceHandler - Command handler for removing an evidence item.

use std::sync::Arc;

use crate::domain::foundation::{AnalysisId, DomainError, EvidenceId};
use crate::domain::matrix::Analysis;
use crate::ports::AnalysisRepository;

/// Command to remove an evidence item and its ratings.
#[derive(Debug, Clone, Copy)]
pub struct RemoveEvidenceCommand {
    pub analysis_id: AnalysisId,
    pub evidence_id: EvidenceId,
}

/// Handler for removing evidence.
pub struct RemoveEvidenceHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl RemoveEvidenceHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RemoveEvidenceCommand) -> Result<Analysis, DomainError> {
        let mut analysis = self.repository.find_by_id(cmd.analysis_id).await?;
        analysis.remove_evidence(&cmd.evidence_id)?;
        self.repository.save(&analysis).await?;
        Ok(analysis)
    }
}
