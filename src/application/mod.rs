//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations over the ports. Command handlers mutate
//! an analysis through the repository; query handlers read and compute.

pub mod handlers;

pub use handlers::{
    AddEvidenceCommand, AddEvidenceHandler, AddEvidenceResult,
    AddHypothesisCommand, AddHypothesisHandler, AddHypothesisResult,
    ClearRatingCommand, ClearRatingHandler,
    CreateAnalysisCommand, CreateAnalysisHandler,
    DeleteAnalysisCommand, DeleteAnalysisHandler,
    EvaluateAnalysisHandler, EvaluateAnalysisQuery,
    ExportReportHandler, ExportReportQuery, ExportedReport,
    GetAnalysisHandler, GetAnalysisQuery,
    ListAnalysesHandler, ListAnalysesQuery,
    RemoveEvidenceCommand, RemoveEvidenceHandler,
    RemoveHypothesisCommand, RemoveHypothesisHandler,
    SetRatingCommand, SetRatingHandler,
};
