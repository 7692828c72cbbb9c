use async_trait::async_trait;

use crate::domain::engine::AnalysisReport;

/// Export port: renders a computed report into a document format.
///
/// The engine produces an [`AnalysisReport`]; adapters of this port decide
/// how it looks on paper. The format behind a given adapter is its own
/// concern.
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Renders the report into the adapter's output format.
    async fn export(&self, report: &AnalysisReport) -> Result<String, ExportError>;

    /// MIME type of the rendered output.
    fn content_type(&self) -> &'static str;
}

/// Errors that can occur during report export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Rendering failed: {0}")]
    RenderFailed(String),

    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<ExportError> for crate::domain::foundation::DomainError {
    fn from(err: ExportError) -> Self {
        use crate::domain::foundation::{DomainError, ErrorCode};
        DomainError::new(ErrorCode::InternalError, err.to_string())
    }
}
