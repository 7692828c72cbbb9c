//! Matrix completion - how much of the matrix has been rated.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::matrix::{Analysis, MatrixView};

/// Completion summary for an analysis matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixCompletion {
    /// Count of rated (non-absent) cells.
    pub rated: usize,
    /// |hypotheses| x |evidence|.
    pub total: usize,
    /// rated / total, rounded to nearest integer. 0 when total is 0.
    pub percentage: Percentage,
}

impl MatrixCompletion {
    /// Computes completion for the given analysis.
    pub fn of(analysis: &Analysis) -> Self {
        let view = MatrixView::of(analysis);
        let rated = view.rated_cell_count();
        let total = view.total_cell_count();
        Self {
            rated,
            total,
            percentage: Percentage::from_ratio(rated, total),
        }
    }

    /// True when every cell has been rated (and the matrix is non-empty).
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.rated == self.total
    }
}
