//! Custom error types for the serial acquisition layer
//!
//! This module provides structured error types instead of raw strings,
//! enabling better error handling, matching, and log messages.

use std::fmt;

// ============================================================================
// Connect Error
// ============================================================================

/// Errors that can occur while opening the serial connection.
///
/// Transport-level and permission failures are retried with a bounded
/// backoff; exhausting the retry budget degrades to "no connection"
/// rather than aborting. Any other error kind is fatal immediately.
#[derive(Debug)]
pub enum ConnectError {
    /// Every attempt failed with a retryable error
    Exhausted {
        /// Number of attempts made
        attempts: u32,
        /// The error from the final attempt
        source: serialport::Error,
    },

    /// The open failed with a non-retryable error kind
    Fatal(serialport::Error),

    /// Shutdown was requested while connecting
    Cancelled,
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectError::Exhausted { attempts, source } => {
                write!(f, "failed to connect after {} attempts: {}", attempts, source)
            }
            ConnectError::Fatal(source) => {
                write!(f, "connection failed: {}", source)
            }
            ConnectError::Cancelled => {
                write!(f, "connection cancelled by shutdown")
            }
        }
    }
}

impl std::error::Error for ConnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConnectError::Exhausted { source, .. } => Some(source),
            ConnectError::Fatal(source) => Some(source),
            ConnectError::Cancelled => None,
        }
    }
}

// ============================================================================
// Line Error
// ============================================================================

/// Errors that can occur turning raw bytes into a text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line's bytes are not valid UTF-8
    Decode {
        /// Byte offset of the first invalid sequence
        valid_up_to: usize,
    },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Decode { valid_up_to } => {
                write!(f, "invalid UTF-8 after byte {}", valid_up_to)
            }
        }
    }
}

impl std::error::Error for LineError {}

// ============================================================================
// Result type aliases
// ============================================================================

/// Result type for connection attempts
pub type ConnectResult<T> = Result<T, ConnectError>;

/// Result type for line assembly
pub type LineResult<T> = Result<T, LineError>;
