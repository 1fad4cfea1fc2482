//! Weather domain types and line classification
//!
//! This module turns raw sensor lines into display updates:
//! - `classify` - Routes a decoded line to its dashboard field
//! - `atmosphere` - Altitude → atmospheric layer ladder
//! - `pressure` - Barometric pressure → condition ladder

pub mod atmosphere;
pub mod classify;
pub mod pressure;

pub use atmosphere::AtmosphereLayer;
pub use classify::classify;
pub use pressure::PressureCondition;

/// Identifies one display slot on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTag {
    Temperature,
    Pressure,
    SeaLevelPressure,
    Altitude,
    WeatherEstimation,
    AtmosphereLayer,
    PressureCondition,
}

impl FieldTag {
    /// All tags in dashboard layout order
    pub const ALL: [FieldTag; 7] = [
        FieldTag::Temperature,
        FieldTag::Pressure,
        FieldTag::SeaLevelPressure,
        FieldTag::Altitude,
        FieldTag::AtmosphereLayer,
        FieldTag::WeatherEstimation,
        FieldTag::PressureCondition,
    ];

    /// Returns the human-readable label for this field
    pub fn label(&self) -> &'static str {
        match self {
            FieldTag::Temperature => "Temperature",
            FieldTag::Pressure => "Pressure",
            FieldTag::SeaLevelPressure => "Sea Level Pressure",
            FieldTag::Altitude => "Altitude",
            FieldTag::WeatherEstimation => "Weather Estimation",
            FieldTag::AtmosphereLayer => "Atmosphere Layer",
            FieldTag::PressureCondition => "Pressure Condition",
        }
    }
}

/// Severity of a derived reading, used to color the pressure condition slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational - clear skies expected (green)
    Info,
    /// Warning - possible storm (red)
    Warning,
    /// Stable conditions (orange)
    #[default]
    Neutral,
}

/// One immutable display update produced by a classification step.
///
/// These are the only messages the reader thread sends toward the UI;
/// the foreground thread applies them to the dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    /// Which display slot to update
    pub tag: FieldTag,
    /// Full text to show in the slot
    pub text: String,
    /// Severity coloring (meaningful for the pressure condition slot)
    pub severity: Severity,
}

impl FieldUpdate {
    /// Creates a verbatim update with neutral severity
    pub fn verbatim(tag: FieldTag, text: &str) -> Self {
        Self {
            tag,
            text: text.to_string(),
            severity: Severity::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tags_have_distinct_labels() {
        for (i, a) in FieldTag::ALL.iter().enumerate() {
            for b in FieldTag::ALL.iter().skip(i + 1) {
                assert_ne!(a.label(), b.label(), "Labels must be unique");
            }
        }
    }

    #[test]
    fn test_verbatim_update_is_neutral() {
        let update = FieldUpdate::verbatim(FieldTag::Temperature, "Temperature: 23.5 C");
        assert_eq!(update.tag, FieldTag::Temperature);
        assert_eq!(update.text, "Temperature: 23.5 C");
        assert_eq!(update.severity, Severity::Neutral);
    }
}
