//! CreateAnalysisHandler - Command handler for starting a new analysis.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::matrix::Analysis;
use crate::ports::AnalysisRepository;

/// Command to create a new, empty analysis.
#[derive(Debug, Clone)]
pub struct CreateAnalysisCommand {
    pub title: String,
}

/// Handler for creating analyses.
pub struct CreateAnalysisHandler {
    repository: Arc<dyn AnalysisRepository>,
}

impl CreateAnalysisHandler {
    pub fn new(repository: Arc<dyn AnalysisRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateAnalysisCommand) -> Result<Analysis, DomainError> {
        let analysis = Analysis::new(cmd.title)?;
        self.repository.save(&analysis).await?;
        Ok(analysis)
    }
}
