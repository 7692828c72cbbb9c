//! Property tests for the analysis engine.
//!
//! These build random matrices and check the invariants that must hold for
//! any input: completion bounds, rank ordering, diagnosticity bounds, and
//! sensitivity consistency.

use proptest::prelude::*;

use ach_workbench::domain::engine::{
    DiagnosticityCalculator, DiagnosticityThresholds, MatrixCompletion, ScoringEngine,
    SensitivityAnalyzer,
};
use ach_workbench::domain::foundation::ConsistencyRating;
use ach_workbench::domain::matrix::{Analysis, EvidenceType, Reliability};

/// A random matrix: hypothesis count plus one row of optional cell values
/// per evidence item. `None` cells stay unrated.
fn matrix_strategy() -> impl Strategy<Value = Vec<Vec<Option<i8>>>> {
    (1usize..5).prop_flat_map(|hypothesis_count| {
        prop::collection::vec(
            prop::collection::vec(prop::option::of(-2i8..=2i8), hypothesis_count),
            0..6,
        )
    })
}

fn build_analysis(rows: &[Vec<Option<i8>>]) -> Analysis {
    let mut analysis = Analysis::new("Generated").unwrap();
    let hypothesis_count = rows.first().map(|r| r.len()).unwrap_or(1);

    let hypotheses: Vec<_> = (0..hypothesis_count)
        .map(|i| analysis.add_hypothesis(format!("Hypothesis {}", i + 1)).unwrap())
        .collect();

    for (i, row) in rows.iter().enumerate() {
        let evidence = analysis
            .add_evidence(
                format!("Evidence {}", i + 1),
                EvidenceType::Observation,
                Reliability::Medium,
                None,
            )
            .unwrap();
        for (h, cell) in hypotheses.iter().zip(row) {
            if let Some(value) = cell {
                let rating = ConsistencyRating::try_from_i8(*value).unwrap();
                analysis.set_rating(evidence, *h, rating, None).unwrap();
            }
        }
    }

    analysis
}

proptest! {
    #[test]
    fn completion_never_exceeds_the_matrix(rows in matrix_strategy()) {
        let analysis = build_analysis(&rows);
        let completion = MatrixCompletion::of(&analysis);

        prop_assert!(completion.rated <= completion.total);
        prop_assert!(completion.percentage.value() <= 100);
        if completion.total == 0 {
            prop_assert_eq!(completion.percentage.value(), 0);
        }
    }

    #[test]
    fn ranking_is_ascending_and_dense(rows in matrix_strategy()) {
        let analysis = build_analysis(&rows);
        let scores = ScoringEngine::calculate_scores(&analysis);

        prop_assert_eq!(scores.len(), analysis.hypotheses.len());
        if let Some(first) = scores.first() {
            prop_assert_eq!(first.rank, 1);
        }
        for pair in scores.windows(2) {
            prop_assert!(pair[0].inconsistency_score <= pair[1].inconsistency_score);
            if pair[0].inconsistency_score == pair[1].inconsistency_score {
                prop_assert_eq!(pair[0].rank, pair[1].rank);
            } else {
                prop_assert_eq!(pair[1].rank, pair[0].rank + 1);
            }
        }
    }

    #[test]
    fn winner_has_the_minimum_score(rows in matrix_strategy()) {
        let analysis = build_analysis(&rows);
        let scores = ScoringEngine::calculate_scores(&analysis);

        if let Some(winner) = ScoringEngine::leading_hypothesis(&scores) {
            prop_assert!(scores
                .iter()
                .all(|s| winner.inconsistency_score <= s.inconsistency_score));
        }
    }

    #[test]
    fn diagnosticity_stays_within_scale_bounds(rows in matrix_strategy()) {
        let analysis = build_analysis(&rows);
        let results =
            DiagnosticityCalculator::calculate(&analysis, &DiagnosticityThresholds::default());

        prop_assert_eq!(results.len(), analysis.evidence.len());
        for item in &results {
            // Population stddev of values in [-2, 2] is at most 2.
            prop_assert!(item.score >= 0.0);
            prop_assert!(item.score <= 2.0 + f64::EPSILON);
            prop_assert!(!(item.is_high_diagnostic && item.is_low_diagnostic));
        }
    }

    #[test]
    fn identical_rows_never_discriminate(value in -2i8..=2i8, hypotheses in 2usize..5) {
        let rows = vec![vec![Some(value); hypotheses]];
        let analysis = build_analysis(&rows);
        let results =
            DiagnosticityCalculator::calculate(&analysis, &DiagnosticityThresholds::default());

        prop_assert_eq!(results[0].score, 0.0);
        prop_assert!(results[0].is_low_diagnostic);
    }

    #[test]
    fn sensitivity_covers_every_evidence_item(rows in matrix_strategy()) {
        let analysis = build_analysis(&rows);
        let results = SensitivityAnalyzer::run(&analysis);

        prop_assert_eq!(results.len(), analysis.evidence.len());
        for item in &results {
            if item.is_critical {
                prop_assert!(item.original_winner.is_some());
                prop_assert!(item.winner_if_removed.is_some());
                prop_assert_ne!(&item.original_winner, &item.winner_if_removed);
            } else {
                prop_assert!(item.original_winner.is_none());
                prop_assert!(item.winner_if_removed.is_none());
            }
        }
    }

    #[test]
    fn critical_items_match_a_manual_rerun(rows in matrix_strategy()) {
        let analysis = build_analysis(&rows);
        let baseline = ScoringEngine::calculate_scores(&analysis);
        let baseline_winner =
            ScoringEngine::leading_hypothesis(&baseline).map(|s| s.hypothesis_id);

        for item in SensitivityAnalyzer::run(&analysis) {
            let rerun = ScoringEngine::calculate_scores_without(&analysis, &item.evidence_id);
            let rerun_winner = ScoringEngine::leading_hypothesis(&rerun).map(|s| s.hypothesis_id);
            let flipped = analysis.hypotheses.len() >= 2
                && baseline_winner.is_some()
                && rerun_winner.is_some()
                && baseline_winner != rerun_winner;
            prop_assert_eq!(item.is_critical, flipped);
        }
    }
}
