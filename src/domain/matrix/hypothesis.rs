//! Hypothesis entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HypothesisId, ValidationError};

/// Default color palette cycled through as hypotheses are added.
pub const HYPOTHESIS_PALETTE: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
];

/// A competing hypothesis under analysis.
///
/// Immutable once created except for its description; the label (H1, H2…)
/// and color are assigned by the [`super::Analysis`] aggregate on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: HypothesisId,
    pub label: String,
    pub description: String,
    pub color: String,
}

impl Hypothesis {
    /// Creates a new hypothesis. The label must be non-empty.
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        Ok(Self {
            id: HypothesisId::new(),
            label,
            description: description.into(),
            color: color.into(),
        })
    }

    /// Returns the palette color for the n-th hypothesis (0-based).
    pub fn palette_color(index: usize) -> &'static str {
        HYPOTHESIS_PALETTE[index % HYPOTHESIS_PALETTE.len()]
    }
}
