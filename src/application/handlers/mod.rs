//! Application handlers.
//!
//! One command or query per file, each with its own handler struct.

pub mod add_evidence;
pub mod add_hypothesis;
pub mod clear_rating;
pub mod create_analysis;
pub mod delete_analysis;
pub mod evaluate_analysis;
pub mod export_report;
pub mod get_analysis;
pub mod list_analyses;
pub mod remove_evidence;
pub mod remove_hypothesis;
pub mod set_rating;

pub use add_evidence::{AddEvidenceCommand, AddEvidenceHandler, AddEvidenceResult};
pub use add_hypothesis::{AddHypothesisCommand, AddHypothesisHandler, AddHypothesisResult};
pub use clear_rating::{ClearRatingCommand, ClearRatingHandler};
pub use create_analysis::{CreateAnalysisCommand, CreateAnalysisHandler};
pub use delete_analysis::{DeleteAnalysisCommand, DeleteAnalysisHandler};
pub use evaluate_analysis::{EvaluateAnalysisHandler, EvaluateAnalysisQuery};
pub use export_report::{ExportReportHandler, ExportReportQuery, ExportedReport};
pub use get_analysis::{GetAnalysisHandler, GetAnalysisQuery};
pub use list_analyses::{ListAnalysesHandler, ListAnalysesQuery};
pub use remove_evidence::{RemoveEvidenceCommand, RemoveEvidenceHandler};
pub use remove_hypothesis::{RemoveHypothesisCommand, RemoveHypothesisHandler};
pub use set_rating::{SetRatingCommand, SetRatingHandler};
