//! Centralized constants for the application
//!
//! This module contains all magic numbers and configuration constants
//! used throughout the application, making them easy to find and modify.

use std::time::Duration;

// ============================================================================
// Application Info
// ============================================================================

/// Application name displayed in header
pub const DISPLAY_NAME: &str = "SPL06-007 Weather Monitoring Dashboard";

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Application version from Cargo.toml
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Serial Transport
// ============================================================================

/// Default serial port the sensor's Arduino enumerates as
#[cfg(windows)]
pub const DEFAULT_PORT: &str = "COM6";

/// Default serial port the sensor's Arduino enumerates as
#[cfg(not(windows))]
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";

/// Default baud rate of the sensor sketch
pub const DEFAULT_BAUD: u32 = 115_200;

/// Read timeout for a single serial read call
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Total connection attempts before giving up
pub const CONNECT_ATTEMPTS: u32 = 3;

/// Delay between failed connection attempts
pub const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Pause after each forwarded line (throttles update frequency)
pub const INTER_READ_PAUSE: Duration = Duration::from_secs(2);

/// Granularity at which sleeps check the shutdown flag
pub const SHUTDOWN_POLL_SLICE: Duration = Duration::from_millis(250);

/// Scratch buffer size for raw serial reads
pub const READ_CHUNK_SIZE: usize = 256;

// ============================================================================
// Refresh Rate (milliseconds)
// ============================================================================

/// Default UI refresh interval in milliseconds
pub const DEFAULT_REFRESH_MS: u64 = 250;

/// Minimum allowed refresh interval
pub const MIN_REFRESH_MS: u64 = 50;

/// Maximum allowed refresh interval
pub const MAX_REFRESH_MS: u64 = 5000;

// ============================================================================
// Display
// ============================================================================

/// Placeholder shown for a field before its first reading arrives
pub const UNAVAILABLE: &str = "N/A";

// ============================================================================
// Atmosphere Layer Thresholds (feet, inclusive lower bounds)
// ============================================================================

/// Below this altitude: Troposphere
pub const TROPOSPHERE_CEILING_FT: f64 = 11_000.0;

/// [TROPOSPHERE_CEILING_FT, this): Lower Stratosphere
pub const LOWER_STRATOSPHERE_CEILING_FT: f64 = 25_000.0;

/// [LOWER_STRATOSPHERE_CEILING_FT, this): Mid Stratosphere
pub const MID_STRATOSPHERE_CEILING_FT: f64 = 50_000.0;

/// [MID_STRATOSPHERE_CEILING_FT, this): Mesosphere; at or above: Thermosphere
pub const MESOSPHERE_CEILING_FT: f64 = 85_000.0;

// ============================================================================
// Pressure Condition Thresholds (hPa)
// ============================================================================

/// Pressure strictly above this reads as High (clear skies)
pub const PRESSURE_HIGH_HPA: f64 = 1013.25;

/// Pressure strictly below this reads as Low (possible storm)
pub const PRESSURE_LOW_HPA: f64 = 1000.0;
