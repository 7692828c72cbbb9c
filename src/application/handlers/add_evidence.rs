//! AddEvidenceHandler - Command handler for adding an evidence item.

use std::sync::Arc;

use crate::domain::foundation::{AnalysisId, DomainError, EvidenceId};
use crate::domain::matrix::{Analysis, EvidenceType, Reliability};
use crate::ports::AnalysisRepository;

/// Command to add an evidence item to an analysis.
#[derive(Debug, Clone)]
pub struct AddEvidenceCommand {
    pub analysis_id: AnalysisId,
    pub description: String,
    pub evidence_type: EvidenceType,
    pub reliability: Reliability,
    pub source: Option<String>,
}

/// Result of adding an evidence item.
#[derive(Debug, Clone)]
pub struct AddEvidenceResult {
    pub evidence_id: EvidenceId,
    pub analysis: Analysis,
}

/// Handler for adding evidence.
pub struct AddEvidenceHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl AddEvidenceHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddEvidenceCommand) -> Result<AddEvidenceResult, DomainError> {
        let mut analysis = self.repository.find_by_id(cmd.analysis_id).await?;
        let evidence_id = analysis.add_evidence(
            cmd.description,
            cmd.evidence_type,
            cmd.reliability,
            cmd.source,
        )?;
        self.repository.save(&analysis).await?;
        Ok(AddEvidenceResult {
            evidence_id,
            analysis,
        })
    }
}
