//! Pressure condition classification from barometric pressure
//!
//! Maps a pressure reading in hPa to a weather condition and a severity
//! used to color the dashboard slot. Both thresholds are exclusive, so
//! readings exactly at 1000.0 or 1013.25 hPa are Normal.

use super::Severity;
use crate::constants::{PRESSURE_HIGH_HPA, PRESSURE_LOW_HPA};

/// The weather condition implied by a barometric pressure reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureCondition {
    /// Above 1013.25 hPa - clear skies expected
    High,
    /// Below 1000.0 hPa - possible storm
    Low,
    /// In between - stable conditions
    Normal,
}

impl PressureCondition {
    /// Classifies a pressure reading (in hPa) into its condition.
    ///
    /// Deterministic and total: every input maps to exactly one condition.
    pub fn for_pressure(hpa: f64) -> Self {
        if hpa > PRESSURE_HIGH_HPA {
            PressureCondition::High
        } else if hpa < PRESSURE_LOW_HPA {
            PressureCondition::Low
        } else {
            PressureCondition::Normal
        }
    }

    /// Returns the display text for this condition
    pub fn description(&self) -> &'static str {
        match self {
            PressureCondition::High => "High (Clear skies expected)",
            PressureCondition::Low => "Low (Possible storm)",
            PressureCondition::Normal => "Normal (Stable conditions)",
        }
    }

    /// Returns the severity used to color this condition
    pub fn severity(&self) -> Severity {
        match self {
            PressureCondition::High => Severity::Info,
            PressureCondition::Low => Severity::Warning,
            PressureCondition::Normal => Severity::Neutral,
        }
    }
}
