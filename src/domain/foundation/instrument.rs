//! Instrument code value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The three assessment instruments the engine scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentCode {
    /// Job-satisfaction survey (20 ranked factors).
    Satisfaction,
    /// Forced-choice personality type indicator (4 dichotomy axes).
    Personality,
    /// Clinical checklist (primary total plus two sub-scales).
    Checklist,
}

impl InstrumentCode {
    /// Returns the stable string code used in storage and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentCode::Satisfaction => "satisfaction",
            InstrumentCode::Personality => "personality",
            InstrumentCode::Checklist => "checklist",
        }
    }
}

impl fmt::Display for InstrumentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InstrumentCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "satisfaction" => Ok(InstrumentCode::Satisfaction),
            "personality" => Ok(InstrumentCode::Personality),
            "checklist" => Ok(InstrumentCode::Checklist),
            other => Err(ValidationError::invalid_format(
                "instrument",
                format!("unknown instrument code '{}'", other),
            )),
        }
    }
}
