//! Analysis engine configuration

use serde::Deserialize;

use crate::domain::engine::DiagnosticityThresholds;

use super::error::ValidationError;

/// Analysis engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Diagnosticity above this counts as high
    #[serde(default = "default_high_threshold")]
    pub high_diagnosticity_threshold: f64,

    /// Diagnosticity below this counts as low
    #[serde(default = "default_low_threshold")]
    pub low_diagnosticity_threshold: f64,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.low_diagnosticity_threshold < 0.0
            || self.low_diagnosticity_threshold >= self.high_diagnosticity_threshold
        {
            return Err(ValidationError::InvalidThresholds);
        }
        Ok(())
    }

    /// Convert to the engine's threshold type
    pub fn thresholds(&self) -> DiagnosticityThresholds {
        DiagnosticityThresholds {
            high: self.high_diagnosticity_threshold,
            low: self.low_diagnosticity_threshold,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            high_diagnosticity_threshold: default_high_threshold(),
            low_diagnosticity_threshold: default_low_threshold(),
        }
    }
}

fn default_high_threshold() -> f64 {
    DiagnosticityThresholds::DEFAULT_HIGH
}

fn default_low_threshold() -> f64 {
    DiagnosticityThresholds::DEFAULT_LOW
}
