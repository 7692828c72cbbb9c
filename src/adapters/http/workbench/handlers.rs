//! HTTP handlers for workbench endpoints.
//!
//! These handlers connect axum routes to the application layer.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{
    AddEvidenceCommand, AddEvidenceHandler, AddHypothesisCommand, AddHypothesisHandler,
    ClearRatingCommand, ClearRatingHandler, CreateAnalysisCommand, CreateAnalysisHandler,
    DeleteAnalysisCommand, DeleteAnalysisHandler, EvaluateAnalysisHandler, EvaluateAnalysisQuery,
    ExportReportHandler, ExportReportQuery, GetAnalysisHandler, GetAnalysisQuery,
    ListAnalysesHandler, ListAnalysesQuery, RemoveEvidenceCommand, RemoveEvidenceHandler,
    RemoveHypothesisCommand, RemoveHypothesisHandler, SetRatingCommand, SetRatingHandler,
};
use crate::domain::engine::{AnalysisReport, DiagnosticityThresholds};
use crate::domain::foundation::{
    AnalysisId, ConsistencyRating, DomainError, ErrorCode, EvidenceId, HypothesisId,
};
use crate::domain::matrix::Analysis;
use crate::ports::{AnalysisRepository, ReportExporter};

use super::dto::{
    AddEvidenceRequest, AddHypothesisRequest, AnalysisSummary, CreateAnalysisRequest,
    ErrorResponse, SetRatingRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Workbench API error that implements IntoResponse.
pub enum ApiError {
    BadRequest(ErrorResponse),
    NotFound(ErrorResponse),
    Internal(ErrorResponse),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(ErrorResponse::bad_request(message))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            ApiError::NotFound(error) => (StatusCode::NOT_FOUND, error),
            ApiError::Internal(error) => (StatusCode::INTERNAL_SERVER_ERROR, error),
        };
        (status, Json(error)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        let response = ErrorResponse::new(error.code.to_string(), error.message.clone());
        match error.code {
            ErrorCode::AnalysisNotFound
            | ErrorCode::HypothesisNotFound
            | ErrorCode::EvidenceNotFound
            | ErrorCode::RatingNotFound => ApiError::NotFound(response),
            ErrorCode::StorageError | ErrorCode::InternalError => ApiError::Internal(response),
            _ => ApiError::BadRequest(response),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing workbench dependencies.
#[derive(Clone)]
pub struct WorkbenchAppState {
    pub repository: Arc<dyn AnalysisRepository>,
    pub exporter: Arc<dyn ReportExporter>,
    pub thresholds: DiagnosticityThresholds,
}

impl WorkbenchAppState {
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

    fn create_analysis_handler(&self) -> CreateAnalysisHandler {
        CreateAnalysisHandler::new(self.repository.clone())
    }

    fn get_analysis_handler(&self) -> GetAnalysisHandler {
        GetAnalysisHandler::new(self.repository.clone())
    }

    fn list_analyses_handler(&self) -> ListAnalysesHandler {
        ListAnalysesHandler::new(self.repository.clone())
    }

    fn delete_analysis_handler(&self) -> DeleteAnalysisHandler {
        DeleteAnalysisHandler::new(self.repository.clone())
    }

    fn add_hypothesis_handler(&self) -> AddHypothesisHandler {
        AddHypothesisHandler::new(self.repository.clone())
    }

    fn remove_hypothesis_handler(&self) -> RemoveHypothesisHandler {
        RemoveHypothesisHandler::new(self.repository.clone())
    }

    fn add_evidence_handler(&self) -> AddEvidenceHandler {
        AddEvidenceHandler::new(self.repository.clone())
    }

    fn remove_evidence_handler(&self) -> RemoveEvidenceHandler {
        RemoveEvidenceHandler::new(self.repository.clone())
    }

    fn set_rating_handler(&self) -> SetRatingHandler {
        SetRatingHandler::new(self.repository.clone())
    }

    fn clear_rating_handler(&self) -> ClearRatingHandler {
        ClearRatingHandler::new(self.repository.clone())
    }

    fn evaluate_analysis_handler(&self) -> EvaluateAnalysisHandler {
        EvaluateAnalysisHandler::new(self.repository.clone(), self.thresholds)
    }

    fn export_report_handler(&self) -> ExportReportHandler {
        ExportReportHandler::new(self.repository.clone(), self.exporter.clone(), self.thresholds)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Path parsing helpers
// ════════════════════════════════════════════════════════════════════════════════

fn parse_analysis_id(raw: &str) -> Result<AnalysisId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid analysis ID format"))
}

fn parse_hypothesis_id(raw: &str) -> Result<HypothesisId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid hypothesis ID format"))
}

fn parse_evidence_id(raw: &str) -> Result<EvidenceId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid evidence ID format"))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/analyses
pub async fn create_analysis(
    State(state): State<WorkbenchAppState>,
    Json(body): Json<CreateAnalysisRequest>,
) -> Result<(StatusCode, Json<Analysis>), ApiError> {
    let analysis = state
        .create_analysis_handler()
        .handle(CreateAnalysisCommand { title: body.title })
        .await?;
    Ok((StatusCode::CREATED, Json(analysis)))
}

/// GET /api/analyses
pub async fn list_analyses(
    State(state): State<WorkbenchAppState>,
) -> Result<Json<Vec<AnalysisSummary>>, ApiError> {
    let analyses = state
        .list_analyses_handler()
        .handle(ListAnalysesQuery)
        .await?;
    Ok(Json(analyses.iter().map(AnalysisSummary::from).collect()))
}

/// GET /api/analyses/:analysis_id
pub async fn get_analysis(
    State(state): State<WorkbenchAppState>,
    Path(analysis_id): Path<String>,
) -> Result<Json<Analysis>, ApiError> {
    let analysis_id = parse_analysis_id(&analysis_id)?;
    let analysis = state
        .get_analysis_handler()
        .handle(GetAnalysisQuery { analysis_id })
        .await?;
    Ok(Json(analysis))
}

/// DELETE /api/analyses/:analysis_id
pub async fn delete_analysis(
    State(state): State<WorkbenchAppState>,
    Path(analysis_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let analysis_id = parse_analysis_id(&analysis_id)?;
    state
        .delete_analysis_handler()
        .handle(DeleteAnalysisCommand { analysis_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/analyses/:analysis_id/hypotheses
pub async fn add_hypothesis(
    State(state): State<WorkbenchAppState>,
    Path(analysis_id): Path<String>,
    Json(body): Json<AddHypothesisRequest>,
) -> Result<(StatusCode, Json<Analysis>), ApiError> {
    let analysis_id = parse_analysis_id(&analysis_id)?;
    let result = state
        .add_hypothesis_handler()
        .handle(AddHypothesisCommand {
            analysis_id,
            description: body.description,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(result.analysis)))
}

/// DELETE /api/analyses/:analysis_id/hypotheses/:hypothesis_id
pub async fn remove_hypothesis(
    State(state): State<WorkbenchAppState>,
    Path((analysis_id, hypothesis_id)): Path<(String, String)>,
) -> Result<Json<Analysis>, ApiError> {
    let analysis_id = parse_analysis_id(&analysis_id)?;
    let hypothesis_id = parse_hypothesis_id(&hypothesis_id)?;
    let analysis = state
        .remove_hypothesis_handler()
        .handle(RemoveHypothesisCommand {
            analysis_id,
            hypothesis_id,
        })
        .await?;
    Ok(Json(analysis))
}

/// POST /api/analyses/:analysis_id/evidence
pub async fn add_evidence(
    State(state): State<WorkbenchAppState>,
    Path(analysis_id): Path<String>,
    Json(body): Json<AddEvidenceRequest>,
) -> Result<(StatusCode, Json<Analysis>), ApiError> {
    let analysis_id = parse_analysis_id(&analysis_id)?;
    let result = state
        .add_evidence_handler()
        .handle(AddEvidenceCommand {
            analysis_id,
            description: body.description,
            evidence_type: body.evidence_type,
            reliability: body.reliability,
            source: body.source,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(result.analysis)))
}

/// DELETE /api/analyses/:analysis_id/evidence/:evidence_id
pub async fn remove_evidence(
    State(state): State<WorkbenchAppState>,
    Path((analysis_id, evidence_id)): Path<(String, String)>,
) -> Result<Json<Analysis>, ApiError> {
    let analysis_id = parse_analysis_id(&analysis_id)?;
    let evidence_id = parse_evidence_id(&evidence_id)?;
    let analysis = state
        .remove_evidence_handler()
        .handle(RemoveEvidenceCommand {
            analysis_id,
            evidence_id,
        })
        .await?;
    Ok(Json(analysis))
}

/// PUT /api/analyses/:analysis_id/ratings
pub async fn set_rating(
    State(state): State<WorkbenchAppState>,
    Path(analysis_id): Path<String>,
    Json(body): Json<SetRatingRequest>,
) -> Result<Json<Analysis>, ApiError> {
    let analysis_id = parse_analysis_id(&analysis_id)?;
    let evidence_id = parse_evidence_id(&body.evidence_id)?;
    let hypothesis_id = parse_hypothesis_id(&body.hypothesis_id)?;
    let rating: ConsistencyRating = body
        .rating
        .parse()
        .map_err(|_| ApiError::bad_request("Rating must be one of CC, C, N, I, II"))?;

    let analysis = state
        .set_rating_handler()
        .handle(SetRatingCommand {
            analysis_id,
            evidence_id,
            hypothesis_id,
            rating,
            rationale: body.rationale,
        })
        .await?;
    Ok(Json(analysis))
}

/// DELETE /api/analyses/:analysis_id/ratings/:evidence_id/:hypothesis_id
pub async fn clear_rating(
    State(state): State<WorkbenchAppState>,
    Path((analysis_id, evidence_id, hypothesis_id)): Path<(String, String, String)>,
) -> Result<Json<Analysis>, ApiError> {
    let analysis_id = parse_analysis_id(&analysis_id)?;
    let evidence_id = parse_evidence_id(&evidence_id)?;
    let hypothesis_id = parse_hypothesis_id(&hypothesis_id)?;
    let analysis = state
        .clear_rating_handler()
        .handle(ClearRatingCommand {
            analysis_id,
            evidence_id,
            hypothesis_id,
        })
        .await?;
    Ok(Json(analysis))
}

/// GET /api/analyses/:analysis_id/report
pub async fn get_report(
    State(state): State<WorkbenchAppState>,
    Path(analysis_id): Path<String>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let analysis_id = parse_analysis_id(&analysis_id)?;
    let report = state
        .evaluate_analysis_handler()
        .handle(EvaluateAnalysisQuery { analysis_id })
        .await?;
    Ok(Json(report))
}

/// GET /api/analyses/:analysis_id/report/export
pub async fn export_report(
    State(state): State<WorkbenchAppState>,
    Path(analysis_id): Path<String>,
) -> Result<Response, ApiError> {
    let analysis_id = parse_analysis_id(&analysis_id)?;
    let exported = state
        .export_report_handler()
        .handle(ExportReportQuery { analysis_id })
        .await?;
    Ok((
        [(header::CONTENT_TYPE, exported.content_type)],
        exported.content,
    )
        .into_response())
}
