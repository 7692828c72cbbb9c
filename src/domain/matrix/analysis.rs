//! Analysis aggregate - the editable hypothesis/evidence/rating matrix.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AnalysisId, ConsistencyRating, DomainError, ErrorCode, EvidenceId, HypothesisId, Timestamp,
    ValidationError,
};

use super::{Evidence, EvidenceType, Hypothesis, Reliability};

/// A stored rating for one (evidence, hypothesis) cell.
///
/// Absence of an entry means the cell is unrated. That is a first-class
/// state distinct from `Neutral` and is excluded from all scoring math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub evidence_id: EvidenceId,
    pub hypothesis_id: HypothesisId,
    pub rating: ConsistencyRating,
    pub rationale: Option<String>,
}

impl RatingEntry {
    /// Creates a new rating entry.
    pub fn new(
        evidence_id: EvidenceId,
        hypothesis_id: HypothesisId,
        rating: ConsistencyRating,
    ) -> Self {
        Self {
            evidence_id,
            hypothesis_id,
            rating,
            rationale: None,
        }
    }

    /// Creates a rating entry with a rationale.
    pub fn with_rationale(
        evidence_id: EvidenceId,
        hypothesis_id: HypothesisId,
        rating: ConsistencyRating,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            evidence_id,
            hypothesis_id,
            rating,
            rationale: Some(rationale.into()),
        }
    }
}

/// The ACH analysis aggregate: ordered hypotheses and evidence plus the
/// sparse rating relation between them.
///
/// Invariants enforced here:
/// - hypothesis and evidence ids are unique within the analysis
/// - ratings only reference hypotheses/evidence that exist
/// - removing a hypothesis or evidence item removes all its ratings
///
/// The calculators never mutate an `Analysis`; they read a snapshot
/// through [`super::MatrixView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: AnalysisId,
    pub title: String,
    pub hypotheses: Vec<Hypothesis>,
    pub evidence: Vec<Evidence>,
    pub ratings: Vec<RatingEntry>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Analysis {
    /// Creates a new empty analysis. The title must be non-empty.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let now = Timestamp::now();
        Ok(Self {
            id: AnalysisId::new(),
            title,
            hypotheses: Vec::new(),
            evidence: Vec::new(),
            ratings: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Adds a hypothesis with an auto-assigned label (H1, H2…) and a
    /// palette color. Returns the new hypothesis id.
    pub fn add_hypothesis(
        &mut self,
        description: impl Into<String>,
    ) -> Result<HypothesisId, DomainError> {
        let index = self.hypotheses.len();
        let label = format!("H{}", index + 1);
        let hypothesis = Hypothesis::new(label, description, Hypothesis::palette_color(index))?;
        let id = hypothesis.id;
        self.hypotheses.push(hypothesis);
        self.touch();
        Ok(id)
    }

    /// Inserts an already-built hypothesis, rejecting duplicate ids.
    pub fn insert_hypothesis(&mut self, hypothesis: Hypothesis) -> Result<(), DomainError> {
        if self.hypothesis(&hypothesis.id).is_some() {
            return Err(DomainError::new(
                ErrorCode::DuplicateHypothesis,
                format!("Hypothesis {} already exists", hypothesis.id),
            ));
        }
        self.hypotheses.push(hypothesis);
        self.touch();
        Ok(())
    }

    /// Adds an evidence item with an auto-assigned label (E1, E2…).
    /// Returns the new evidence id.
    pub fn add_evidence(
        &mut self,
        description: impl Into<String>,
        evidence_type: EvidenceType,
        reliability: Reliability,
        source: Option<String>,
    ) -> Result<EvidenceId, DomainError> {
        let label = format!("E{}", self.evidence.len() + 1);
        let mut item = Evidence::new(label, description, evidence_type, reliability)?;
        item.source = source;
        let id = item.id;
        self.evidence.push(item);
        self.touch();
        Ok(id)
    }

    /// Inserts an already-built evidence item, rejecting duplicate ids.
    pub fn insert_evidence(&mut self, evidence: Evidence) -> Result<(), DomainError> {
        if self.evidence_item(&evidence.id).is_some() {
            return Err(DomainError::new(
                ErrorCode::DuplicateEvidence,
                format!("Evidence {} already exists", evidence.id),
            ));
        }
        self.evidence.push(evidence);
        self.touch();
        Ok(())
    }

    /// Looks up a hypothesis by id.
    pub fn hypothesis(&self, id: &HypothesisId) -> Option<&Hypothesis> {
        self.hypotheses.iter().find(|h| h.id == *id)
    }

    /// Looks up an evidence item by id.
    pub fn evidence_item(&self, id: &EvidenceId) -> Option<&Evidence> {
        self.evidence.iter().find(|e| e.id == *id)
    }

    /// Updates a hypothesis description.
    pub fn update_hypothesis_description(
        &mut self,
        id: &HypothesisId,
        description: impl Into<String>,
    ) -> Result<(), DomainError> {
        let hypothesis = self
            .hypotheses
            .iter_mut()
            .find(|h| h.id == *id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::HypothesisNotFound,
                    format!("Hypothesis {} not found", id),
                )
            })?;
        hypothesis.description = description.into();
        self.touch();
        Ok(())
    }

    /// Sets (or replaces) the rating for a cell. Both ids must reference
    /// existing items; this is the editor-side validation that keeps the
    /// stored matrix free of dangling references.
    pub fn set_rating(
        &mut self,
        evidence_id: EvidenceId,
        hypothesis_id: HypothesisId,
        rating: ConsistencyRating,
        rationale: Option<String>,
    ) -> Result<(), DomainError> {
        if self.evidence_item(&evidence_id).is_none() {
            return Err(DomainError::new(
                ErrorCode::EvidenceNotFound,
                format!("Evidence {} not found", evidence_id),
            ));
        }
        if self.hypothesis(&hypothesis_id).is_none() {
            return Err(DomainError::new(
                ErrorCode::HypothesisNotFound,
                format!("Hypothesis {} not found", hypothesis_id),
            ));
        }

        let entry = RatingEntry {
            evidence_id,
            hypothesis_id,
            rating,
            rationale,
        };
        match self
            .ratings
            .iter_mut()
            .find(|r| r.evidence_id == evidence_id && r.hypothesis_id == hypothesis_id)
        {
            Some(existing) => *existing = entry,
            None => self.ratings.push(entry),
        }
        self.touch();
        Ok(())
    }

    /// Clears a rated cell, returning it to the unrated state.
    pub fn clear_rating(
        &mut self,
        evidence_id: &EvidenceId,
        hypothesis_id: &HypothesisId,
    ) -> Result<(), DomainError> {
        let before = self.ratings.len();
        self.ratings
            .retain(|r| !(r.evidence_id == *evidence_id && r.hypothesis_id == *hypothesis_id));
        if self.ratings.len() == before {
            return Err(DomainError::new(
                ErrorCode::RatingNotFound,
                format!("Cell ({}, {}) is not rated", evidence_id, hypothesis_id),
            ));
        }
        self.touch();
        Ok(())
    }

    /// Removes a hypothesis and cascades to all ratings referencing it.
    pub fn remove_hypothesis(&mut self, id: &HypothesisId) -> Result<(), DomainError> {
        let before = self.hypotheses.len();
        self.hypotheses.retain(|h| h.id != *id);
        if self.hypotheses.len() == before {
            return Err(DomainError::new(
                ErrorCode::HypothesisNotFound,
                format!("Hypothesis {} not found", id),
            ));
        }
        self.ratings.retain(|r| r.hypothesis_id != *id);
        self.touch();
        Ok(())
    }

    /// Removes an evidence item and cascades to all ratings referencing it.
    pub fn remove_evidence(&mut self, id: &EvidenceId) -> Result<(), DomainError> {
        let before = self.evidence.len();
        self.evidence.retain(|e| e.id != *id);
        if self.evidence.len() == before {
            return Err(DomainError::new(
                ErrorCode::EvidenceNotFound,
                format!("Evidence {} not found", id),
            ));
        }
        self.ratings.retain(|r| r.evidence_id != *id);
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
