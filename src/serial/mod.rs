//! Serial acquisition layer - connection, line assembly, and read loop
//!
//! This module provides everything between the raw serial port and the
//! classified dashboard updates.

pub mod connector;
pub mod error;
pub mod line_buffer;
pub mod reader;

pub use reader::{spawn_reader, ConnectionStatus, ReaderEvent};

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::constants::SHUTDOWN_POLL_SLICE;

/// Sleeps for `total`, waking early if the shutdown flag is set.
///
/// Used at every suspension point in the acquisition layer (connect
/// retries and the inter-read pause) so shutdown is honored promptly.
pub(crate) fn sleep_with_shutdown(total: Duration, shutdown: &AtomicBool) {
    let start = Instant::now();
    while start.elapsed() < total {
        if shutdown.load(Ordering::Relaxed) {
            return;
        }
        // elapsed() may have crossed `total` since the loop check, so
        // the subtraction must saturate rather than underflow.
        let remaining = total.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            return;
        }
        thread::sleep(remaining.min(SHUTDOWN_POLL_SLICE));
    }
}
