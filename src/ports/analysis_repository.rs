use async_trait::async_trait;

use crate::domain::foundation::AnalysisId;
use crate::domain::matrix::Analysis;

/// Persistence port for ACH analyses.
///
/// The engine itself is a pure function of its inputs and holds no durable
/// state; this port is how the editor layer keeps analyses between calls.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Saves an analysis, replacing any existing one with the same id.
    async fn save(&self, analysis: &Analysis) -> Result<(), RepositoryError>;

    /// Loads an analysis by id.
    async fn find_by_id(&self, id: AnalysisId) -> Result<Analysis, RepositoryError>;

    /// Lists all stored analyses.
    async fn list(&self) -> Result<Vec<Analysis>, RepositoryError>;

    /// Deletes an analysis by id.
    async fn delete(&self, id: AnalysisId) -> Result<(), RepositoryError>;
}

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Analysis not found: {0}")]
    NotFound(AnalysisId),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for crate::domain::foundation::DomainError {
    fn from(err: RepositoryError) -> Self {
        use crate::domain::foundation::{DomainError, ErrorCode};
        match err {
            RepositoryError::NotFound(id) => DomainError::new(
                ErrorCode::AnalysisNotFound,
                format!("Analysis {} not found", id),
            ),
            other => DomainError::new(ErrorCode::StorageError, other.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failure() {
        let id = AnalysisId::new();
        let err = RepositoryError::NotFound(id);
        assert!(format!("{}", err).contains("Analysis not found"));

        let err: RepositoryError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, RepositoryError::Storage(_)));
    }
}
