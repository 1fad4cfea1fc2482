//! Serial connection with bounded retry
//!
//! Opens the sensor's serial port, retrying transport-level and
//! permission failures a fixed number of times with a fixed delay.
//! After the final failed attempt the caller gets a failure value and
//! proceeds without a connection rather than aborting the process.
//! The retry loop is a suspension point, so it also honors the
//! shutdown flag: quitting mid-connect cancels the remaining attempts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{info, warn};
use serialport::SerialPort;

use super::error::{ConnectError, ConnectResult};
use super::sleep_with_shutdown;
use crate::constants::{CONNECT_ATTEMPTS, CONNECT_RETRY_DELAY, READ_TIMEOUT};

/// Opens the serial port with the application's retry policy.
///
/// # Arguments
/// * `port_name` - Port identifier, e.g. `COM6` or `/dev/ttyUSB0`
/// * `baud_rate` - Line speed, 115200 for the sensor sketch
/// * `shutdown` - Cancellation flag, checked before every attempt and
///   during every retry delay
///
/// # Returns
/// * `Ok(Box<dyn SerialPort>)` - An open port with a 1s read timeout
/// * `Err(ConnectError)` - Retries exhausted, a non-retryable failure,
///   or cancellation
pub fn connect(
    port_name: &str,
    baud_rate: u32,
    shutdown: &AtomicBool,
) -> ConnectResult<Box<dyn SerialPort>> {
    connect_with_retry(
        CONNECT_ATTEMPTS,
        CONNECT_RETRY_DELAY,
        |attempt| {
            info!(
                "connecting to {} at {} baud (attempt {}/{})",
                port_name, baud_rate, attempt, CONNECT_ATTEMPTS
            );
            serialport::new(port_name, baud_rate)
                .timeout(READ_TIMEOUT)
                .open()
        },
        |delay| sleep_with_shutdown(delay, shutdown),
        || shutdown.load(Ordering::Relaxed),
    )
}

/// Retry core, generic over the open, sleep, and cancellation checks.
///
/// Attempts `open` up to `max_attempts` times, sleeping `retry_delay`
/// between retryable failures. No delay follows the final attempt. A
/// non-retryable error aborts the retry loop immediately, as does
/// `cancelled` returning true at the head of any attempt.
fn connect_with_retry<T, O, S, C>(
    max_attempts: u32,
    retry_delay: Duration,
    mut open: O,
    mut sleep: S,
    cancelled: C,
) -> ConnectResult<T>
where
    O: FnMut(u32) -> serialport::Result<T>,
    S: FnMut(Duration),
    C: Fn() -> bool,
{
    let mut attempt = 1;
    loop {
        if cancelled() {
            return Err(ConnectError::Cancelled);
        }
        match open(attempt) {
            Ok(connection) => return Ok(connection),
            Err(e) if is_retryable(&e) => {
                if attempt >= max_attempts {
                    return Err(ConnectError::Exhausted {
                        attempts: max_attempts,
                        source: e,
                    });
                }
                warn!("connection attempt {} failed: {}", attempt, e);
                sleep(retry_delay);
                attempt += 1;
            }
            Err(e) => return Err(ConnectError::Fatal(e)),
        }
    }
}

/// Returns true for transport-level and permission failures.
///
/// Everything else (e.g. invalid port parameters) is not retried.
fn is_retryable(error: &serialport::Error) -> bool {
    matches!(
        error.kind(),
        serialport::ErrorKind::NoDevice | serialport::ErrorKind::Io(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use serialport::ErrorKind;

    fn transport_error() -> serialport::Error {
        serialport::Error::new(ErrorKind::NoDevice, "device unplugged")
    }

    fn permission_error() -> serialport::Error {
        serialport::Error::new(
            ErrorKind::Io(std::io::ErrorKind::PermissionDenied),
            "access denied",
        )
    }

    #[test]
    fn test_succeeds_on_third_attempt_with_two_delays() {
        let mut opens = 0;
        let mut delays = Vec::new();

        let result = connect_with_retry(
            3,
            Duration::from_secs(2),
            |_attempt| {
                opens += 1;
                if opens < 3 {
                    Err(transport_error())
                } else {
                    Ok("connected")
                }
            },
            |d| delays.push(d),
            || false,
        );

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(opens, 3, "Should succeed on the 3rd attempt");
        assert_eq!(delays.len(), 2, "Exactly 2 delays before success");
        assert!(delays.iter().all(|d| *d == Duration::from_secs(2)));
    }

    #[test]
    fn test_exhaustion_after_three_failures_with_two_delays() {
        let mut opens = 0;
        let mut delays = 0;

        let result: ConnectResult<()> = connect_with_retry(
            3,
            Duration::from_secs(2),
            |_attempt| {
                opens += 1;
                Err(transport_error())
            },
            |_| delays += 1,
            || false,
        );

        match result {
            Err(ConnectError::Exhausted { attempts, .. }) => assert_eq!(attempts, 3),
            other => panic!("Expected exhaustion, got {:?}", other),
        }
        assert_eq!(opens, 3, "All 3 attempts must be made");
        assert_eq!(delays, 2, "No delay after the final attempt");
    }

    #[test]
    fn test_permission_failure_is_retried() {
        let mut opens = 0;

        let result = connect_with_retry(
            3,
            Duration::ZERO,
            |_attempt| {
                opens += 1;
                if opens == 1 {
                    Err(permission_error())
                } else {
                    Ok(())
                }
            },
            |_| {},
            || false,
        );

        assert!(result.is_ok());
        assert_eq!(opens, 2);
    }

    #[test]
    fn test_fatal_error_is_not_retried() {
        let mut opens = 0;
        let mut delays = 0;

        let result: ConnectResult<()> = connect_with_retry(
            3,
            Duration::from_secs(2),
            |_attempt| {
                opens += 1;
                Err(serialport::Error::new(
                    ErrorKind::InvalidInput,
                    "bad parameters",
                ))
            },
            |_| delays += 1,
            || false,
        );

        assert!(matches!(result, Err(ConnectError::Fatal(_))));
        assert_eq!(opens, 1, "Fatal errors bypass the retry loop");
        assert_eq!(delays, 0);
    }

    #[test]
    fn test_first_attempt_success_has_no_delay() {
        let mut delays = 0;

        let result = connect_with_retry(
            3,
            Duration::from_secs(2),
            |_attempt| Ok(42),
            |_| delays += 1,
            || false,
        );

        assert_eq!(result.unwrap(), 42);
        assert_eq!(delays, 0);
    }

    #[test]
    fn test_shutdown_during_retry_delay_cancels_remaining_attempts() {
        let shutdown = Cell::new(false);
        let opens = Cell::new(0);

        let result: ConnectResult<()> = connect_with_retry(
            3,
            Duration::from_secs(2),
            |_attempt| {
                opens.set(opens.get() + 1);
                Err(transport_error())
            },
            // Shutdown arrives while we are waiting out the retry delay.
            |_| shutdown.set(true),
            || shutdown.get(),
        );

        assert!(matches!(result, Err(ConnectError::Cancelled)));
        assert_eq!(opens.get(), 1, "No further attempts after cancellation");
    }

    #[test]
    fn test_shutdown_before_first_attempt_opens_nothing() {
        let result: ConnectResult<()> = connect_with_retry(
            3,
            Duration::from_secs(2),
            |_attempt| panic!("open must not be called after shutdown"),
            |_| {},
            || true,
        );

        assert!(matches!(result, Err(ConnectError::Cancelled)));
    }
}
