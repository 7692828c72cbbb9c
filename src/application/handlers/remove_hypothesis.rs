//! RemoveHypothesisHandler - Command handler for removing a hypothesis.

use std::sync::Arc;

use crate::domain::foundation::{AnalysisId, DomainError, HypothesisId};
use crate::domain::matrix::Analysis;
use crate::ports::AnalysisRepository;

/// Command to remove a hypothesis and its ratings.
#[derive(Debug, Clone, Copy)]
pub struct RemoveHypothesisCommand {
    pub analysis_id: AnalysisId,
    pub hypothesis_id: HypothesisId,
}

/// Handler for removing hypotheses.
pub struct RemoveHypothesisHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl RemoveHypothesisHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RemoveHypothesisCommand) -> Result<Analysis, DomainError> {
        let mut analysis = self.repository.find_by_id(cmd.analysis_id).await?;
        analysis.remove_hypothesis(&cmd.hypothesis_id)?;
        self.repository.save(&analysis).await?;
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAnalysisRepository;
    use crate::domain::foundation::{ConsistencyRating, ErrorCode};
    use crate::domain::matrix::{EvidenceType, Reliability};

    #[tokio::test]
    async fn removes_hypothesis_and_cascades_ratings() {
        let repo = Arc::new(InMemoryAnalysisRepository::new());
        let mut analysis = Analysis::new("Test").unwrap();
        let h = analysis.add_hypothesis("Doomed").unwrap();
        let e = analysis
            .add_evidence("Item", EvidenceType::Observation, Reliability::Medium, None)
            .unwrap();
        analysis
            .set_rating(e, h, ConsistencyRating::Inconsistent, None)
            .unwrap();
        repo.save(&analysis).await.unwrap();

        let handler = RemoveHypothesisHandler::new(repo.clone());
        let updated = handler
            .handle(RemoveHypothesisCommand {
                analysis_id: analysis.id,
                hypothesis_id: h,
            })
            .await
            .unwrap();

        assert!(updated.hypotheses.is_empty());
        assert!(updated.ratings.is_empty());
    }

    #[tokio::test]
    async fn unknown_hypothesis_maps_to_not_found() {
        let repo = Arc::new(InMemoryAnalysisRepository::new());
        let analysis = Analysis::new("Test").unwrap();
        repo.save(&analysis).await.unwrap();

        let handler = RemoveHypothesisHandler::new(repo);
        let result = handler
            .handle(RemoveHypothesisCommand {
                analysis_id: analysis.id,
                hypothesis_id: HypothesisId::new(),
            })
            .await;
        assert!(matches!(
            result,
            Err(DomainError {
                code: ErrorCode::HypothesisNotFound,
                ..
            })
        ));
    }
}
