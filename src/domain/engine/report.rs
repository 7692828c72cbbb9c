//! Analysis report - the full set of computed results for one analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnalysisId, Timestamp};
use crate::domain::matrix::Analysis;

use super::{
    DiagnosticityCalculator, DiagnosticityResult, DiagnosticityThresholds, MatrixCompletion,
    ScoreResult, ScoringEngine, SensitivityAnalyzer, SensitivityResult,
};

/// Everything the API and export layers consume from the engine, computed
/// from a single consistent matrix snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: AnalysisId,
    pub title: String,
    /// Ranked ascending by inconsistency score.
    pub scores: Vec<ScoreResult>,
    /// Label of the rank-1 hypothesis, if any.
    pub leading_hypothesis: Option<String>,
    pub is_close_race: bool,
    /// One entry per evidence item, in input order.
    pub diagnosticity: Vec<DiagnosticityResult>,
    /// One entry per evidence item, in input order.
    pub sensitivity: Vec<SensitivityResult>,
    pub completion: MatrixCompletion,
    pub generated_at: Timestamp,
}

impl AnalysisReport {
    /// Runs all calculators over one snapshot of the analysis.
    pub fn generate(analysis: &Analysis, thresholds: &DiagnosticityThresholds) -> Self {
        let scores = ScoringEngine::calculate_scores(analysis);
        let leading_hypothesis =
            ScoringEngine::leading_hypothesis(&scores).map(|s| s.label.clone());
        let is_close_race = ScoringEngine::is_close_race(&scores);

        Self {
            analysis_id: analysis.id,
            title: analysis.title.clone(),
            leading_hypothesis,
            is_close_race,
            diagnosticity: DiagnosticityCalculator::calculate(analysis, thresholds),
            sensitivity: SensitivityAnalyzer::run(analysis),
            completion: MatrixCompletion::of(analysis),
            generated_at: Timestamp::now(),
            scores,
        }
    }
}
