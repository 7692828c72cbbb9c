//! Consistency rating value object (CC to II scale).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// ACH consistency rating: how well an evidence item fits a hypothesis.
///
/// The numeric axis runs from -2 (very consistent) to +2 (very
/// inconsistent) and is the single canonical encoding used by both the
/// diagnosticity and scoring calculators. An unrated cell is represented
/// by the absence of a rating, never by `Neutral`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum ConsistencyRating {
    VeryConsistent = -2,
    Consistent = -1,
    #[default]
    Neutral = 0,
    Inconsistent = 1,
    VeryInconsistent = 2,
}

impl ConsistencyRating {
    /// Creates a ConsistencyRating from an integer, returning error if out of range.
    pub fn try_from_i8(value: i8) -> Result<Self, ValidationError> {
        match value {
            -2 => Ok(ConsistencyRating::VeryConsistent),
            -1 => Ok(ConsistencyRating::Consistent),
            0 => Ok(ConsistencyRating::Neutral),
            1 => Ok(ConsistencyRating::Inconsistent),
            2 => Ok(ConsistencyRating::VeryInconsistent),
            _ => Err(ValidationError::out_of_range("rating", -2, 2, value as i32)),
        }
    }

    /// Returns the numeric value on the signed axis.
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Returns the conventional ACH matrix code.
    pub fn code(&self) -> &'static str {
        match self {
            ConsistencyRating::VeryConsistent => "CC",
            ConsistencyRating::Consistent => "C",
            ConsistencyRating::Neutral => "N",
            ConsistencyRating::Inconsistent => "I",
            ConsistencyRating::VeryInconsistent => "II",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ConsistencyRating::VeryConsistent => "Very Consistent",
            ConsistencyRating::Consistent => "Consistent",
            ConsistencyRating::Neutral => "Neutral",
            ConsistencyRating::Inconsistent => "Inconsistent",
            ConsistencyRating::VeryInconsistent => "Very Inconsistent",
        }
    }

    /// Returns the weight this rating contributes to a hypothesis's
    /// inconsistency score. Only inconsistent ratings count against a
    /// hypothesis; consistent and neutral ratings contribute nothing.
    pub fn inconsistency_weight(&self) -> u32 {
        match self {
            ConsistencyRating::Inconsistent => 1,
            ConsistencyRating::VeryInconsistent => 2,
            _ => 0,
        }
    }

    /// Returns true if this rating counts against a hypothesis.
    pub fn is_inconsistent(&self) -> bool {
        self.value() > 0
    }
}

impl fmt::Display for ConsistencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ConsistencyRating {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CC" => Ok(ConsistencyRating::VeryConsistent),
            "C" => Ok(ConsistencyRating::Consistent),
            "N" => Ok(ConsistencyRating::Neutral),
            "I" => Ok(ConsistencyRating::Inconsistent),
            "II" => Ok(ConsistencyRating::VeryInconsistent),
            other => Err(ValidationError::invalid_format(
                "rating",
                format!("expected one of CC, C, N, I, II, got '{}'", other),
            )),
        }
    }
}
