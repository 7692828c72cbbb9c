//! Diagnosticity Calculator - How much each evidence item discriminates.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EvidenceId;
use crate::domain::matrix::{Analysis, MatrixView};

/// Configurable classification thresholds for diagnosticity scores.
///
/// The defaults are 1.0 (high) and 0.3 (low) standard deviations: a score
/// above 1.0 means ratings differ by roughly two or more scale steps
/// between at least two hypotheses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticityThresholds {
    pub high: f64,
    pub low: f64,
}

impl DiagnosticityThresholds {
    /// Default high threshold.
    pub const DEFAULT_HIGH: f64 = 1.0;

    /// Default low threshold.
    pub const DEFAULT_LOW: f64 = 0.3;
}

impl Default for DiagnosticityThresholds {
    fn default() -> Self {
        Self {
            high: Self::DEFAULT_HIGH,
            low: Self::DEFAULT_LOW,
        }
    }
}

/// Diagnosticity assessment for a single evidence item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticityResult {
    pub evidence_id: EvidenceId,
    pub evidence_label: String,
    /// Population standard deviation of the rated cells' numeric values.
    pub score: f64,
    pub is_high_diagnostic: bool,
    pub is_low_diagnostic: bool,
}

/// Diagnosticity functions over the ACH matrix.
pub struct DiagnosticityCalculator;

impl DiagnosticityCalculator {
    /// Computes a diagnosticity result for every evidence item, in
    /// evidence input order. Callers re-sort for presentation.
    ///
    /// # Algorithm
    /// For each evidence item, collect the numeric rating of every
    /// hypothesis that has a rating for it (absent cells are skipped, not
    /// zeroed) and take the population standard deviation. Identical
    /// ratings everywhere score 0 (the item cannot discriminate); a wide
    /// spread scores high.
    ///
    /// # Edge Cases
    /// - Fewer than 2 rated hypotheses: score 0.0, both flags false
    ///   (a single data point cannot discriminate)
    /// - No evidence: Returns empty Vec
    pub fn calculate(
        analysis: &Analysis,
        thresholds: &DiagnosticityThresholds,
    ) -> Vec<DiagnosticityResult> {
        let view = MatrixView::of(analysis);

        view.evidence_ids()
            .iter()
            .map(|eid| {
                let values: Vec<f64> = view
                    .hypothesis_ids()
                    .iter()
                    .filter_map(|hid| view.rating_of(eid, hid))
                    .map(|rating| f64::from(rating.value()))
                    .collect();

                let score = if values.len() < 2 {
                    0.0
                } else {
                    Self::population_std_dev(&values)
                };

                let (is_high, is_low) = if values.len() < 2 {
                    (false, false)
                } else {
                    (score > thresholds.high, score < thresholds.low)
                };

                let label = analysis
                    .evidence_item(eid)
                    .map(|e| e.label.clone())
                    .unwrap_or_default();

                DiagnosticityResult {
                    evidence_id: *eid,
                    evidence_label: label,
                    score,
                    is_high_diagnostic: is_high,
                    is_low_diagnostic: is_low,
                }
            })
            .collect()
    }

    /// Population standard deviation (divides by N, not N-1).
    fn population_std_dev(values: &[f64]) -> f64 {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        variance.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ConsistencyRating;
    use crate::domain::matrix::{EvidenceType, Reliability};

    fn analysis_with_ratings(ratings: &[ConsistencyRating]) -> Analysis {
        let mut analysis = Analysis::new("Test").unwrap();
        let hs: Vec<_> = (0..ratings.len())
            .map(|i| analysis.add_hypothesis(format!("Hypothesis {}", i)).unwrap())
            .collect();
        let e = analysis
            .add_evidence("Item", EvidenceType::Observation, Reliability::Medium, None)
            .unwrap();
        for (h, r) in hs.iter().zip(ratings) {
            analysis.set_rating(e, *h, *r, None).unwrap();
        }
        analysis
    }

    fn defaults() -> DiagnosticityThresholds {
        DiagnosticityThresholds::default()
    }

    #[test]
    fn no_ratings_scores_zero_with_no_flags() {
        let mut analysis = Analysis::new("Test").unwrap();
        analysis.add_hypothesis("A").unwrap();
        analysis.add_hypothesis("B").unwrap();
        analysis
            .add_evidence("Unrated", EvidenceType::Observation, Reliability::Medium, None)
            .unwrap();

        let results = DiagnosticityCalculator::calculate(&analysis, &defaults());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 0.0);
        assert!(!results[0].is_high_diagnostic);
        assert!(!results[0].is_low_diagnostic);
    }

    #[test]
    fn single_rated_hypothesis_scores_zero_with_no_flags() {
        let mut analysis = Analysis::new("Test").unwrap();
        let h1 = analysis.add_hypothesis("A").unwrap();
        analysis.add_hypothesis("B").unwrap();
        let e = analysis
            .add_evidence("Item", EvidenceType::Observation, Reliability::Medium, None)
            .unwrap();
        analysis
            .set_rating(e, h1, ConsistencyRating::VeryInconsistent, None)
            .unwrap();

        let results = DiagnosticityCalculator::calculate(&analysis, &defaults());
        assert_eq!(results[0].score, 0.0);
        assert!(!results[0].is_high_diagnostic);
        assert!(!results[0].is_low_diagnostic);
    }

    #[test]
    fn identical_ratings_are_low_diagnostic() {
        // CC vs both hypotheses: no spread at all.
        let analysis = analysis_with_ratings(&[
            ConsistencyRating::VeryConsistent,
            ConsistencyRating::VeryConsistent,
        ]);
        let results = DiagnosticityCalculator::calculate(&analysis, &defaults());
        assert_eq!(results[0].score, 0.0);
        assert!(results[0].is_low_diagnostic);
        assert!(!results[0].is_high_diagnostic);
    }

    #[test]
    fn full_spread_is_high_diagnostic() {
        // CC vs H1, II vs H2 -> values {-2, 2}, stddev 2.0.
        let analysis = analysis_with_ratings(&[
            ConsistencyRating::VeryConsistent,
            ConsistencyRating::VeryInconsistent,
        ]);
        let results = DiagnosticityCalculator::calculate(&analysis, &defaults());
        assert!((results[0].score - 2.0).abs() < 1e-9);
        assert!(results[0].is_high_diagnostic);
        assert!(!results[0].is_low_diagnostic);
    }

    #[test]
    fn mid_spread_is_neither_high_nor_low() {
        // values {0, 1}: stddev 0.5, between the default thresholds.
        let analysis = analysis_with_ratings(&[
            ConsistencyRating::Neutral,
            ConsistencyRating::Inconsistent,
        ]);
        let results = DiagnosticityCalculator::calculate(&analysis, &defaults());
        assert!((results[0].score - 0.5).abs() < 1e-9);
        assert!(!results[0].is_high_diagnostic);
        assert!(!results[0].is_low_diagnostic);
    }

    #[test]
    fn absent_cells_are_excluded_from_the_sample() {
        // Three hypotheses, only two rated: {-2, 2} -> stddev 2.0, not
        // {-2, 0, 2} -> ~1.63.
        let mut analysis = Analysis::new("Test").unwrap();
        let h1 = analysis.add_hypothesis("A").unwrap();
        analysis.add_hypothesis("B").unwrap();
        let h3 = analysis.add_hypothesis("C").unwrap();
        let e = analysis
            .add_evidence("Item", EvidenceType::Observation, Reliability::Medium, None)
            .unwrap();
        analysis
            .set_rating(e, h1, ConsistencyRating::VeryConsistent, None)
            .unwrap();
        analysis
            .set_rating(e, h3, ConsistencyRating::VeryInconsistent, None)
            .unwrap();

        let results = DiagnosticityCalculator::calculate(&analysis, &defaults());
        assert!((results[0].score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn results_follow_evidence_input_order() {
        let mut analysis = Analysis::new("Test").unwrap();
        analysis.add_hypothesis("A").unwrap();
        for label in ["first", "second", "third"] {
            analysis
                .add_evidence(label, EvidenceType::Observation, Reliability::Medium, None)
                .unwrap();
        }
        let results = DiagnosticityCalculator::calculate(&analysis, &defaults());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].evidence_label, "E1");
        assert_eq!(results[2].evidence_label, "E3");
    }

    #[test]
    fn custom_thresholds_change_classification() {
        let analysis = analysis_with_ratings(&[
            ConsistencyRating::Neutral,
            ConsistencyRating::Inconsistent,
        ]);
        let tight = DiagnosticityThresholds { high: 0.4, low: 0.1 };
        let results = DiagnosticityCalculator::calculate(&analysis, &tight);
        assert!(results[0].is_high_diagnostic);
    }
}
