//! ExportReportHandler - Query handler rendering a report document.

use std::sync::Arc;

use crate::domain::engine::{AnalysisReport, DiagnosticityThresholds};
use crate::domain::foundation::{AnalysisId, DomainError};
use crate::ports::{AnalysisRepository, ReportExporter};

/// Query for an exported report document.
#[derive(Debug, Clone, Copy)]
pub struct ExportReportQuery {
    pub analysis_id: AnalysisId,
}

/// A rendered report plus the MIME type it should be served as.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub content: String,
    pub content_type: &'static str,
}

/// Handler that evaluates an analysis and renders it through the exporter.
pub struct ExportReportHandler {
    repository: Arc<dyn AnalysisRepository>,
    exporter: Arc<dyn ReportExporter>,
    thresholds: DiagnosticityThresholds,
}

impl ExportReportHandler {
    pub fn new(
        repository: Arc<dyn AnalysisRepository>,
        exporter: Arc<dyn ReportExporter>,
        thresholds: DiagnosticityThresholds,
    ) -> Self {
        Self {
            repository,
            exporter,
            thresholds,
        }
    }

    pub async fn handle(&self, query: ExportReportQuery) -> Result<ExportedReport, DomainError> {
        let analysis = self.repository.find_by_id(query.analysis_id).await?;
        let report = AnalysisReport::generate(&analysis, &self.thresholds);
        let content = self.exporter.export(&report).await?;
        Ok(ExportedReport {
            content,
            content_type: self.exporter.content_type(),
        })
    }
}
