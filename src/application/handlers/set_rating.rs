//! SetRatingHandler - Command handler for rating a matrix cell.

use std::sync::Arc;

use crate::domain::foundation::{
    AnalysisId, ConsistencyRating, DomainError, EvidenceId, HypothesisId,
};
use crate::domain::matrix::Analysis;
use crate::ports::AnalysisRepository;

/// Command to set (or replace) the rating of one matrix cell.
#[derive(Debug, Clone)]
pub struct SetRatingCommand {
    pub analysis_id: AnalysisId,
    pub evidence_id: EvidenceId,
    pub hypothesis_id: HypothesisId,
    pub rating: ConsistencyRating,
    pub rationale: Option<String>,
}

/// Handler for setting ratings.
pub struct SetRatingHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl SetRatingHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SetRatingCommand) -> Result<Analysis, DomainError> {
        let mut analysis = self.repository.find_by_id(cmd.analysis_id).await?;
        analysis.set_rating(cmd.evidence_id, cmd.hypothesis_id, cmd.rating, cmd.rationale)?;
        self.repository.save(&analysis).await?;
        Ok(analysis)
    }
}
