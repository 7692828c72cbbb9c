//! Matrix module - The ACH hypothesis/evidence/rating model.
//!
//! `Analysis` is the editor-facing aggregate: it owns hypotheses, evidence,
//! and ratings and enforces the referential invariants (unique ids, cascade
//! deletion of ratings, validated rating targets). `MatrixView` is the
//! read-only snapshot the calculators in [`crate::domain::engine`] operate
//! on; it is the only place that resolves the five-symbol scale for a cell.

mod analysis;
mod evidence;
mod hypothesis;
mod view;

pub use analysis::{Analysis, RatingEntry};
pub use evidence::{Evidence, EvidenceType, Reliability};
pub use hypothesis::{Hypothesis, HYPOTHESIS_PALETTE};
pub use view::MatrixView;
