//! ClearRatingHandler - Command handler for clearing a rated cell.

use std::sync::Arc;

use crate::domain::foundation::{AnalysisId, DomainError, EvidenceId, HypothesisId};
use crate::domain::matrix::Analysis;
use crate::ports::AnalysisRepository;

/// Command to return one matrix cell to the unrated state.
#[derive(Debug, Clone, Copy)]
pub struct ClearRatingCommand {
    pub analysis_id: AnalysisId,
    pub evidence_id: EvidenceId,
    pub hypothesis_id: HypothesisId,
}

/// Handler for clearing ratings.
pub struct ClearRatingHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl ClearRatingHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ClearRatingCommand) -> Result<Analysis, DomainError> {
        let mut analysis = self.repository.find_by_id(cmd.analysis_id).await?;
        analysis.clear_rating(&cmd.evidence_id, &cmd.hypothesis_id)?;
        self.repository.save(&analysis).await?;
        Ok(analysis)
    }
}
