//! Utility functions for UI rendering

use crossterm::style::Color;

use crate::serial::ConnectionStatus;
use crate::weather::Severity;

/// Truncates a string to fit within a given width.
///
/// If the string exceeds `max_len`, it is truncated and "..." is appended.
///
/// # Arguments
/// * `s` - The string to truncate
/// * `max_len` - Maximum character length for the output
///
/// # Returns
/// The original string if it fits, or a truncated version with "..." suffix
#[must_use]
pub fn truncate_string(s: &str, max_len: usize) -> String {
    // Count and cut in characters, not bytes: sensor lines may carry
    // multibyte UTF-8 (degree signs, accented labels).
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Returns the color for a field's severity.
///
/// # Color Mapping
/// * Green - Informational (high pressure, clear skies)
/// * Red - Warning (low pressure, possible storm)
/// * DarkYellow - Neutral (stable conditions)
#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Green,
        Severity::Warning => Color::Red,
        Severity::Neutral => Color::DarkYellow,
    }
}

/// Returns the color for the connection status indicator
#[must_use]
pub fn status_color(status: ConnectionStatus) -> Color {
    match status {
        ConnectionStatus::Connecting => Color::Yellow,
        ConnectionStatus::Connected => Color::Green,
        ConnectionStatus::Failed => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_ascii() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer string", 10), "a longe...");
        assert_eq!(truncate_string("abcdef", 2), "ab");
    }

    #[test]
    fn test_truncate_string_multibyte_does_not_split_chars() {
        // A cut at byte 7 would land inside the 'é'; truncation must
        // work in characters.
        let line = "Température: 23.5 °C";
        assert_eq!(truncate_string(line, 10), "Tempéra...");
        assert_eq!(truncate_string(line, 2), "Te");
        assert_eq!(truncate_string(line, 40), line);
    }
}
