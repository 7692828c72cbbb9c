//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the ACH Workbench domain.

mod errors;
mod ids;
mod percentage;
mod rating;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnalysisId, EvidenceId, HypothesisId};
pub use percentage::Percentage;
pub use rating::ConsistencyRating;
pub use timestamp::Timestamp;
