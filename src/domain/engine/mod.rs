//! Engine module - Pure analysis services over the ACH matrix.
//!
//! This module contains stateless functions that operate on an immutable
//! matrix snapshot to derive the analytic conclusions.
//!
//! # Components
//!
//! - `ScoringEngine` - Per-hypothesis inconsistency totals and ranking
//! - `DiagnosticityCalculator` - How much each evidence item discriminates
//! - `SensitivityAnalyzer` - Whether removing one evidence item flips the winner
//! - `MatrixCompletion` - How much of the matrix has been rated
//! - `AnalysisReport` - All of the above bundled for the API and export layers
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless; each call takes
//! a full matrix snapshot and returns a fully-materialized result. There is
//! no cached derived state to go stale, so every invariant is testable in
//! isolation.

mod completion;
mod diagnosticity;
mod report;
mod scoring;
mod sensitivity;

pub use completion::MatrixCompletion;
pub use diagnosticity::{DiagnosticityCalculator, DiagnosticityResult, DiagnosticityThresholds};
pub use report::AnalysisReport;
pub use scoring::{ScoreResult, ScoringEngine};
pub use sensitivity::{SensitivityAnalyzer, SensitivityResult};
