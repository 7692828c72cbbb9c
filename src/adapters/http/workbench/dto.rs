//! HTTP DTOs for workbench endpoints.
//!
//! The domain aggregate and the engine result types are already designed
//! for serialization, so responses reuse them directly; this module adds
//! the request bodies, the list summary, and the error envelope.

use serde::{Deserialize, Serialize};

pub use crate::domain::engine::AnalysisReport;
pub use crate::domain::matrix::Analysis;

use crate::domain::engine::MatrixCompletion;
use crate::domain::foundation::{AnalysisId, Percentage, Timestamp};
use crate::domain::matrix::{EvidenceType, Reliability};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body for POST /api/analyses.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnalysisRequest {
    pub title: String,
}

/// Body for POST /api/analyses/:analysis_id/hypotheses.
#[derive(Debug, Clone, Deserialize)]
pub struct AddHypothesisRequest {
    pub description: String,
}

/// Body for POST /api/analyses/:analysis_id/evidence.
#[derive(Debug, Clone, Deserialize)]
pub struct AddEvidenceRequest {
    pub description: String,
    #[serde(default)]
    pub evidence_type: EvidenceType,
    #[serde(default)]
    pub reliability: Reliability,
    #[serde(default)]
    pub source: Option<String>,
}

/// Body for PUT /api/analyses/:analysis_id/ratings.
///
/// The rating is the scale code: `CC`, `C`, `N`, `I` or `II`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRatingRequest {
    pub evidence_id: String,
    pub hypothesis_id: String,
    pub rating: String,
    #[serde(default)]
    pub rationale: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One row of GET /api/analyses.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub id: AnalysisId,
    pub title: String,
    pub hypothesis_count: usize,
    pub evidence_count: usize,
    pub completion: Percentage,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Analysis> for AnalysisSummary {
    fn from(analysis: &Analysis) -> Self {
        Self {
            id: analysis.id,
            title: analysis.title.clone(),
            hypothesis_count: analysis.hypotheses.len(),
            evidence_count: analysis.evidence.len(),
            completion: MatrixCompletion::of(analysis).percentage,
            created_at: analysis.created_at,
            updated_at: analysis.updated_at,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
