//! Evidence entity and its descriptive metadata.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EvidenceId, ValidationError};

/// Kind of evidence. Presentation/filtering metadata; the scoring math
/// never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvidenceType {
    #[default]
    Observation,
    Testimony,
    Document,
    Measurement,
    OpenSource,
}

impl EvidenceType {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            EvidenceType::Observation => "Observation",
            EvidenceType::Testimony => "Testimony",
            EvidenceType::Document => "Document",
            EvidenceType::Measurement => "Measurement",
            EvidenceType::OpenSource => "Open Source",
        }
    }
}

/// Assessed reliability of an evidence item. Descriptive only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Reliability {
    Low,
    #[default]
    Medium,
    High,
}

impl Reliability {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Reliability::Low => "Low",
            Reliability::Medium => "Medium",
            Reliability::High => "High",
        }
    }
}

/// A piece of evidence rated against the competing hypotheses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: EvidenceId,
    pub label: String,
    pub description: String,
    pub evidence_type: EvidenceType,
    pub reliability: Reliability,
    pub source: Option<String>,
}

impl Evidence {
    /// Creates a new evidence item. The label must be non-empty.
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        evidence_type: EvidenceType,
        reliability: Reliability,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        Ok(Self {
            id: EvidenceId::new(),
            label,
            description: description.into(),
            evidence_type,
            reliability,
            source: None,
        })
    }

    /// Sets the source attribution.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_new_assigns_unique_id() {
        let e1 = Evidence::new("E1", "Badge log", EvidenceType::Document, Reliability::High)
            .unwrap();
        let e2 = Evidence::new("E2", "Witness account", EvidenceType::Testimony, Reliability::Low)
            .unwrap();
        assert_ne!(e1.id, e2.id);
    }

    #[test]
    fn evidence_rejects_empty_label() {
        assert!(Evidence::new("", "desc", EvidenceType::Observation, Reliability::Medium).is_err());
    }

    #[test]
    fn evidence_with_source_stores_attribution() {
        let e = Evidence::new("E1", "Access log", EvidenceType::Document, Reliability::High)
            .unwrap()
            .with_source("SIEM export 2024-03-01");
        assert_eq!(e.source.as_deref(), Some("SIEM export 2024-03-01"));
    }

    #[test]
    fn evidence_type_labels() {
        assert_eq!(EvidenceType::OpenSource.label(), "Open Source");
        assert_eq!(Reliability::High.label(), "High");
    }

    #[test]
    fn reliability_ordering_works() {
        assert!(Reliability::Low < Reliability::Medium);
        assert!(Reliability::Medium < Reliability::High);
    }
}
