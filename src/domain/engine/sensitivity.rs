//! Sensitivity Analyzer - What-if analysis over evidence removal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EvidenceId;
use crate::domain::matrix::{Analysis, MatrixView};

use super::ScoringEngine;

/// What-if result for removing a single evidence item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityResult {
    pub evidence_id: EvidenceId,
    pub evidence_label: String,
    /// True when removing this item changes the leading hypothesis.
    pub is_critical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_winner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_if_removed: Option<String>,
}

/// Leave-one-out sensitivity analysis over the ACH matrix.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Reruns the scoring engine once per evidence item with that item's
    /// ratings excluded and reports whether the winner would change.
    ///
    /// O(E x H x R): each of the E reruns walks the whole matrix. Fine for
    /// the target sizes (tens of evidence items, single-digit hypotheses).
    ///
    /// # Edge Cases
    /// - Zero or one hypothesis: no winner to destabilize; every item
    ///   reports `is_critical = false`
    /// - No evidence: Returns empty Vec
    pub fn run(analysis: &Analysis) -> Vec<SensitivityResult> {
        let view = MatrixView::of(analysis);

        // Baseline winner, computed once before iterating evidence.
        let baseline = ScoringEngine::calculate_scores(analysis);
        let original = ScoringEngine::leading_hypothesis(&baseline);
        let stable = view.hypothesis_count() < 2;

        view.evidence_ids()
            .iter()
            .map(|eid| {
                let label = analysis
                    .evidence_item(eid)
                    .map(|e| e.label.clone())
                    .unwrap_or_default();

                if stable {
                    return SensitivityResult {
                        evidence_id: *eid,
                        evidence_label: label,
                        is_critical: false,
                        original_winner: None,
                        winner_if_removed: None,
                    };
                }

                let rescored = ScoringEngine::calculate_scores_without(analysis, eid);
                let new_winner = ScoringEngine::leading_hypothesis(&rescored);

                let (original_winner, winner_if_removed) = match (original, new_winner) {
                    (Some(before), Some(after)) if before.hypothesis_id != after.hypothesis_id => {
                        (Some(before.label.clone()), Some(after.label.clone()))
                    }
                    _ => (None, None),
                };

                SensitivityResult {
                    evidence_id: *eid,
                    evidence_label: label,
                    is_critical: original_winner.is_some(),
                    original_winner,
                    winner_if_removed,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ConsistencyRating;
    use crate::domain::matrix::{EvidenceType, Reliability};

    #[test]
    fn no_evidence_yields_empty_results() {
        let mut analysis = Analysis::new("Test").unwrap();
        analysis.add_hypothesis("A").unwrap();
        analysis.add_hypothesis("B").unwrap();
        assert!(SensitivityAnalyzer::run(&analysis).is_empty());
    }

    #[test]
    fn single_hypothesis_is_never_critical() {
        let mut analysis = Analysis::new("Test").unwrap();
        let h = analysis.add_hypothesis("Only").unwrap();
        let e = analysis
            .add_evidence("Item", EvidenceType::Observation, Reliability::Medium, None)
            .unwrap();
        analysis
            .set_rating(e, h, ConsistencyRating::VeryInconsistent, None)
            .unwrap();

        let results = SensitivityAnalyzer::run(&analysis);
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_critical);
        assert!(results[0].original_winner.is_none());
    }

    #[test]
    fn removing_the_decisive_item_flips_the_winner() {
        // H1 leads only because E1 rates II against H2.
        // E2 rates I against H1, so without E1 the winner flips to H2.
        let mut analysis = Analysis::new("Test").unwrap();
        let h1 = analysis.add_hypothesis("Leader").unwrap();
        let h2 = analysis.add_hypothesis("Runner-up").unwrap();
        let e1 = analysis
            .add_evidence("Decisive", EvidenceType::Document, Reliability::High, None)
            .unwrap();
        let e2 = analysis
            .add_evidence("Minor", EvidenceType::Testimony, Reliability::Low, None)
            .unwrap();
        analysis
            .set_rating(e1, h2, ConsistencyRating::VeryInconsistent, None)
            .unwrap();
        analysis
            .set_rating(e2, h1, ConsistencyRating::Inconsistent, None)
            .unwrap();

        // Baseline: H1 scores 1, H2 scores 2 -> H1 wins.
        let baseline = ScoringEngine::calculate_scores(&analysis);
        assert_eq!(baseline[0].hypothesis_id, h1);

        let results = SensitivityAnalyzer::run(&analysis);
        let decisive = results.iter().find(|r| r.evidence_id == e1).unwrap();
        assert!(decisive.is_critical);
        assert_eq!(decisive.original_winner.as_deref(), Some("H1"));
        assert_eq!(decisive.winner_if_removed.as_deref(), Some("H2"));

        // No other single removal changes the winner: dropping E2 leaves
        // H1 at 0 vs H2 at 2.
        let minor = results.iter().find(|r| r.evidence_id == e2).unwrap();
        assert!(!minor.is_critical);
    }

    #[test]
    fn critical_flag_round_trips_through_direct_rescore() {
        let mut analysis = Analysis::new("Test").unwrap();
        let h1 = analysis.add_hypothesis("A").unwrap();
        let h2 = analysis.add_hypothesis("B").unwrap();
        let e1 = analysis
            .add_evidence("One", EvidenceType::Observation, Reliability::Medium, None)
            .unwrap();
        let e2 = analysis
            .add_evidence("Two", EvidenceType::Observation, Reliability::Medium, None)
            .unwrap();
        analysis
            .set_rating(e1, h1, ConsistencyRating::VeryInconsistent, None)
            .unwrap();
        analysis
            .set_rating(e2, h2, ConsistencyRating::Inconsistent, None)
            .unwrap();

        for result in SensitivityAnalyzer::run(&analysis) {
            let original =
                ScoringEngine::leading_hypothesis(&ScoringEngine::calculate_scores(&analysis))
                    .unwrap()
                    .hypothesis_id;
            let rescored = ScoringEngine::calculate_scores_without(&analysis, &result.evidence_id);
            let new = ScoringEngine::leading_hypothesis(&rescored).unwrap().hypothesis_id;
            assert_eq!(result.is_critical, original != new);
        }
    }

    #[test]
    fn results_follow_evidence_input_order() {
        let mut analysis = Analysis::new("Test").unwrap();
        analysis.add_hypothesis("A").unwrap();
        analysis.add_hypothesis("B").unwrap();
        for _ in 0..3 {
            analysis
                .add_evidence("Item", EvidenceType::Observation, Reliability::Medium, None)
                .unwrap();
        }
        let results = SensitivityAnalyzer::run(&analysis);
        let labels: Vec<_> = results.iter().map(|r| r.evidence_label.as_str()).collect();
        assert_eq!(labels, ["E1", "E2", "E3"]);
    }
}
