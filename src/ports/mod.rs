//! Ports - trait boundaries between the domain/application layers and
//! the outside world.

mod analysis_repository;
mod report_exporter;

pub use analysis_repository::{AnalysisRepository, RepositoryError};
pub use report_exporter::{ExportError, ReportExporter};
