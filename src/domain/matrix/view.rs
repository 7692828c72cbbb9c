//! MatrixView - read-only snapshot of the rating matrix.

use std::collections::{HashMap, HashSet};

use crate::domain::foundation::{ConsistencyRating, EvidenceId, HypothesisId};

use super::Analysis;

/// Read-only accessor over the hypothesis/evidence/rating matrix.
///
/// Built once per calculator invocation from an `&Analysis` snapshot.
/// Construction de-duplicates hypothesis and evidence ids (keeping first
/// occurrence order) and silently skips ratings that reference ids no
/// longer present, so the calculators never see dangling cells.
#[derive(Debug, Clone, Default)]
pub struct MatrixView {
    hypothesis_ids: Vec<HypothesisId>,
    evidence_ids: Vec<EvidenceId>,
    cells: HashMap<(EvidenceId, HypothesisId), ConsistencyRating>,
}

impl MatrixView {
    /// Builds a view over the given analysis.
    pub fn of(analysis: &Analysis) -> Self {
        let mut hypothesis_ids = Vec::with_capacity(analysis.hypotheses.len());
        let mut seen_h = HashSet::new();
        for h in &analysis.hypotheses {
            if seen_h.insert(h.id) {
                hypothesis_ids.push(h.id);
            }
        }

        let mut evidence_ids = Vec::with_capacity(analysis.evidence.len());
        let mut seen_e = HashSet::new();
        for e in &analysis.evidence {
            if seen_e.insert(e.id) {
                evidence_ids.push(e.id);
            }
        }

        let mut cells = HashMap::new();
        for rating in &analysis.ratings {
            if seen_e.contains(&rating.evidence_id) && seen_h.contains(&rating.hypothesis_id) {
                cells.insert((rating.evidence_id, rating.hypothesis_id), rating.rating);
            }
        }

        Self {
            hypothesis_ids,
            evidence_ids,
            cells,
        }
    }

    /// Resolves the rating for a cell, or `None` if unrated. Never fails
    /// on unknown ids.
    pub fn rating_of(
        &self,
        evidence_id: &EvidenceId,
        hypothesis_id: &HypothesisId,
    ) -> Option<ConsistencyRating> {
        self.cells.get(&(*evidence_id, *hypothesis_id)).copied()
    }

    /// Returns a view identical to this one except that every rating
    /// involving the given evidence item is treated as absent. The
    /// original view (and the stored matrix) are untouched.
    pub fn excluding(&self, evidence_id: &EvidenceId) -> Self {
        let cells = self
            .cells
            .iter()
            .filter(|((e, _), _)| e != evidence_id)
            .map(|(k, v)| (*k, *v))
            .collect();
        Self {
            hypothesis_ids: self.hypothesis_ids.clone(),
            evidence_ids: self.evidence_ids.clone(),
            cells,
        }
    }

    /// Ordered, de-duplicated hypothesis ids.
    pub fn hypothesis_ids(&self) -> &[HypothesisId] {
        &self.hypothesis_ids
    }

    /// Ordered, de-duplicated evidence ids.
    pub fn evidence_ids(&self) -> &[EvidenceId] {
        &self.evidence_ids
    }

    /// Number of hypotheses.
    pub fn hypothesis_count(&self) -> usize {
        self.hypothesis_ids.len()
    }

    /// Number of evidence items.
    pub fn evidence_count(&self) -> usize {
        self.evidence_ids.len()
    }

    /// Number of rated (non-absent, non-dangling) cells.
    pub fn rated_cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Total number of cells, |hypotheses| x |evidence|.
    pub fn total_cell_count(&self) -> usize {
        self.hypothesis_ids.len() * self.evidence_ids.len()
    }
}
