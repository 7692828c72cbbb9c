//! EvaluateAnalysisHandler - Query handler running the full engine.

use std::sync::Arc;

use crate::domain::engine::{AnalysisReport, DiagnosticityThresholds};
use crate::domain::foundation::{AnalysisId, DomainError};
use crate::ports::AnalysisRepository;

/// Query for the computed report of one analysis.
#[derive(Debug, Clone, Copy)]
pub struct EvaluateAnalysisQuery {
    pub analysis_id: AnalysisId,
}

/// Handler running scoring, diagnosticity, sensitivity and completion over
/// one stored analysis.
pub struct EvaluateAnalysisHandler {
    repository: Arc<dyn AnalysisRepository>,
    thresholds: DiagnosticityThresholds,
}

impl EvaluateAnalysisHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>, thresholds: DiagnosticityThresholds) -> Self {
        Self {
            repository,
            thresholds,
        }
    }

    pub async fn handle(&self, query: EvaluateAnalysisQuery) -> Result<AnalysisReport, DomainError> {
        let analysis = self.repository.find_by_id(query.analysis_id).await?;
        Ok(AnalysisReport::generate(&analysis, &self.thresholds))
    }
}
