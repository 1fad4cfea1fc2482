//! Line classification - routes raw sensor lines to dashboard fields
//!
//! The sensor sketch emits lines of the form `<Label>: <number> <unit...>`.
//! Classification is a fixed-order substring match over the raw line; the
//! exclusion tests ("Sea Level", "ft") keep the rules mutually exclusive
//! but depend entirely on the sketch's exact phrasing.

use std::fmt;

use log::warn;

use super::{AtmosphereLayer, FieldTag, FieldUpdate, PressureCondition, Severity};

/// Errors that can occur extracting the numeric token from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line has no value after the label's colon
    MissingValue,
    /// The first token after the colon is not a number
    BadNumber {
        /// The offending token
        token: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingValue => {
                write!(f, "no value found after label")
            }
            ParseError::BadNumber { token } => {
                write!(f, "'{}' is not a number", token)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Extracts the numeric token following the label's colon.
///
/// Splits on the first ':', then takes the first whitespace-separated
/// token of the remainder and parses it as a decimal number.
///
/// # Arguments
/// * `line` - A full sensor line like `"Pressure: 1012.5 hPa"`
///
/// # Returns
/// * `Ok(f64)` - The parsed value
/// * `Err(ParseError)` - If the token is missing or malformed
pub fn extract_value(line: &str) -> Result<f64, ParseError> {
    let rest = match line.split_once(':') {
        Some((_, rest)) => rest,
        None => return Err(ParseError::MissingValue),
    };

    let token = match rest.split_whitespace().next() {
        Some(t) => t,
        None => return Err(ParseError::MissingValue),
    };

    token.parse::<f64>().map_err(|_| ParseError::BadNumber {
        token: token.to_string(),
    })
}

/// Classifies one decoded sensor line into display updates.
///
/// Returns zero updates (unrecognized line), one (verbatim field), or two
/// (verbatim field plus a derived classification). First match wins, in
/// the order the sensor sketch defines:
/// 1. `"Temperature:"` - verbatim only
/// 2. `"Pressure:"` without `"Sea Level"` - verbatim + pressure condition
/// 3. `"Sea Level Pressure:"` - verbatim only
/// 4. `"Altitude:"` without `"ft"` - verbatim + atmosphere layer
/// 5. `"Weather Estimation:"` - verbatim only
///
/// A malformed numeric token is recoverable: the verbatim update is kept,
/// the derived update is skipped, and the line is logged.
pub fn classify(line: &str) -> Vec<FieldUpdate> {
    let mut updates = Vec::new();

    if line.contains("Temperature:") {
        updates.push(FieldUpdate::verbatim(FieldTag::Temperature, line));
    } else if line.contains("Pressure:") && !line.contains("Sea Level") {
        updates.push(FieldUpdate::verbatim(FieldTag::Pressure, line));
        match extract_value(line) {
            Ok(hpa) => updates.push(condition_update(hpa)),
            Err(e) => warn!("skipping pressure condition for '{}': {}", line, e),
        }
    } else if line.contains("Sea Level Pressure:") {
        updates.push(FieldUpdate::verbatim(FieldTag::SeaLevelPressure, line));
    } else if line.contains("Altitude:") && !line.contains("ft") {
        updates.push(FieldUpdate::verbatim(FieldTag::Altitude, line));
        match extract_value(line) {
            Ok(feet) => updates.push(layer_update(feet)),
            Err(e) => warn!("skipping atmosphere layer for '{}': {}", line, e),
        }
    } else if line.contains("Weather Estimation:") {
        updates.push(FieldUpdate::verbatim(FieldTag::WeatherEstimation, line));
    }
    // Anything else is silently discarded.

    updates
}

/// Builds the derived atmosphere layer update for an altitude in feet
fn layer_update(feet: f64) -> FieldUpdate {
    let layer = AtmosphereLayer::for_altitude(feet);
    FieldUpdate {
        tag: FieldTag::AtmosphereLayer,
        text: format!("Atmosphere Layer: {}", layer.name()),
        severity: Severity::Neutral,
    }
}

/// Builds the derived pressure condition update for a pressure in hPa
fn condition_update(hpa: f64) -> FieldUpdate {
    let condition = PressureCondition::for_pressure(hpa);
    FieldUpdate {
        tag: FieldTag::PressureCondition,
        text: format!("Pressure Condition: {}", condition.description()),
        severity: condition.severity(),
    }
}
