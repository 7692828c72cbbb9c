//! Scoring Engine - Inconsistency totals and hypothesis ranking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EvidenceId, HypothesisId};
use crate::domain::matrix::{Analysis, MatrixView};

/// Score and rank for a single hypothesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Dense rank, 1 = most consistent. Equal scores share a rank.
    pub rank: u32,
    pub hypothesis_id: HypothesisId,
    pub label: String,
    pub color: String,
    /// Sum of inconsistency weights: I counts 1, II counts 2, everything
    /// else (including unrated cells) counts 0.
    pub inconsistency_score: u32,
}

/// Scoring and ranking functions over the ACH matrix.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Margin within which the two leading hypotheses count as a close race.
    pub const CLOSE_RACE_MARGIN: u32 = 1;

    /// Computes inconsistency scores and ranks for every hypothesis.
    ///
    /// # Algorithm
    /// For each hypothesis: score = Σ inconsistency_weight(rating) over
    /// every evidence item rated against it. Hypotheses are sorted
    /// ascending by score (lower is better); the sort is stable so ties
    /// keep input (creation) order. Ranks are dense: the lowest score is
    /// rank 1 and each subsequent distinct score increments the rank.
    ///
    /// # Edge Cases
    /// - No hypotheses: Returns empty Vec (normal outcome, not an error)
    /// - No evidence or no ratings: Every hypothesis scores 0, all rank 1
    /// - Unrated cells contribute nothing
    pub fn calculate_scores(analysis: &Analysis) -> Vec<ScoreResult> {
        Self::scores_from_view(&MatrixView::of(analysis), analysis)
    }

    /// Computes scores as [`Self::calculate_scores`] but with every rating
    /// involving `excluded` treated as absent. Used by sensitivity
    /// analysis; the stored matrix is never mutated.
    pub fn calculate_scores_without(
        analysis: &Analysis,
        excluded: &EvidenceId,
    ) -> Vec<ScoreResult> {
        Self::scores_from_view(&MatrixView::of(analysis).excluding(excluded), analysis)
    }

    fn scores_from_view(view: &MatrixView, analysis: &Analysis) -> Vec<ScoreResult> {
        let mut results: Vec<ScoreResult> = view
            .hypothesis_ids()
            .iter()
            .map(|hid| {
                let score: u32 = view
                    .evidence_ids()
                    .iter()
                    .filter_map(|eid| view.rating_of(eid, hid))
                    .map(|rating| rating.inconsistency_weight())
                    .sum();

                // Ids in the view always come from the analysis, so the
                // lookup cannot miss; fall back to empty labels defensively.
                let (label, color) = analysis
                    .hypothesis(hid)
                    .map(|h| (h.label.clone(), h.color.clone()))
                    .unwrap_or_default();

                ScoreResult {
                    rank: 0,
                    hypothesis_id: *hid,
                    label,
                    color,
                    inconsistency_score: score,
                }
            })
            .collect();

        // Stable sort: equal scores keep input order.
        results.sort_by_key(|r| r.inconsistency_score);

        let mut rank = 0u32;
        let mut previous_score = None;
        for result in results.iter_mut() {
            if previous_score != Some(result.inconsistency_score) {
                rank += 1;
                previous_score = Some(result.inconsistency_score);
            }
            result.rank = rank;
        }

        results
    }

    /// Returns the leading (rank 1) hypothesis, if any.
    pub fn leading_hypothesis(scores: &[ScoreResult]) -> Option<&ScoreResult> {
        scores.first()
    }

    /// A close race: at least two hypotheses and the two lowest scores
    /// within `CLOSE_RACE_MARGIN` of each other.
    pub fn is_close_race(scores: &[ScoreResult]) -> bool {
        match scores {
            [first, second, ..] => {
                second.inconsistency_score - first.inconsistency_score <= Self::CLOSE_RACE_MARGIN
            }
            _ => false,
        }
    }
}
