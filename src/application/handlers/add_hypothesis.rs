//! AddHypothesisHandler - Command handler for adding a hypothesis.

use std::sync::Arc;

use crate::domain::foundation::{AnalysisId, DomainError, HypothesisId};
use crate::domain::matrix::Analysis;
use crate::ports::AnalysisRepository;

/// Command to add a hypothesis to an analysis.
#[derive(Debug, Clone)]
pub struct AddHypothesisCommand {
    pub analysis_id: AnalysisId,
    pub description: String,
}

/// Result of adding a hypothesis.
#[derive(Debug, Clone)]
pub struct AddHypothesisResult {
    pub hypothesis_id: HypothesisId,
    pub analysis: Analysis,
}

/// Handler for adding hypotheses.
pub struct AddHypothesisHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl AddHypothesisHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AddHypothesisCommand,
    ) -> Result<AddHypothesisResult, DomainError> {
        let mut analysis = self.repository.find_by_id(cmd.analysis_id).await?;
        let hypothesis_id = analysis.add_hypothesis(cmd.description)?;
        self.repository.save(&analysis).await?;
        Ok(AddHypothesisResult {
            hypothesis_id,
            analysis,
        })
    }
}
