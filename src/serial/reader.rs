//! Background line-reading loop
//!
//! Owns the serial connection for its lifetime and runs on a dedicated
//! thread: read with timeout, assemble and decode lines, classify, and
//! forward the resulting updates over a channel. The foreground thread
//! applies them - the reader never touches terminal state.
//!
//! All failures after a successful connect are recoverable: transport
//! errors and undecodable lines are logged and the loop continues. The
//! shutdown flag is checked at the loop head and inside every sleep,
//! including the connect retry delays.

use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{error, info, warn};

use super::connector;
use super::error::ConnectError;
use super::line_buffer::LineBuffer;
use super::sleep_with_shutdown;
use crate::constants::{INTER_READ_PAUSE, READ_CHUNK_SIZE};
use crate::weather::{classify, FieldUpdate};

/// Connection state surfaced in the dashboard's status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// Connection attempts are in progress
    #[default]
    Connecting,
    /// The port is open and being read
    Connected,
    /// All attempts failed; the reader has terminated
    Failed,
}

impl ConnectionStatus {
    /// Returns the status text shown in the UI
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Failed => "Disconnected",
        }
    }
}

/// A message from the reader thread to the foreground loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ReaderEvent {
    /// A classified field update
    Field(FieldUpdate),
    /// A connection state change
    Connection(ConnectionStatus),
}

/// Spawns the background reader thread.
///
/// The thread connects with the bounded retry policy, then reads and
/// classifies lines until `shutdown` is set or the receiving side of
/// `tx` is dropped. On connect failure it reports `Failed` and exits
/// instead of idling.
pub fn spawn_reader(
    port_name: String,
    baud_rate: u32,
    tx: Sender<ReaderEvent>,
    shutdown: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("serial-reader".to_string())
        .spawn(move || read_loop(&port_name, baud_rate, &tx, &shutdown))
        .expect("failed to spawn serial reader thread")
}

/// Connects and runs the read loop until shutdown
fn read_loop(
    port_name: &str,
    baud_rate: u32,
    tx: &Sender<ReaderEvent>,
    shutdown: &AtomicBool,
) {
    let _ = tx.send(ReaderEvent::Connection(ConnectionStatus::Connecting));

    let mut port = match connector::connect(port_name, baud_rate, shutdown) {
        Ok(port) => port,
        // Shutdown arrived mid-connect; the UI is already on its way out.
        Err(ConnectError::Cancelled) => return,
        Err(e @ ConnectError::Exhausted { .. }) => {
            warn!("{}", e);
            let _ = tx.send(ReaderEvent::Connection(ConnectionStatus::Failed));
            return;
        }
        Err(e) => {
            error!("{}", e);
            let _ = tx.send(ReaderEvent::Connection(ConnectionStatus::Failed));
            return;
        }
    };

    info!("serial port {} open", port_name);
    let _ = tx.send(ReaderEvent::Connection(ConnectionStatus::Connected));

    let mut lines = LineBuffer::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    while !shutdown.load(Ordering::Relaxed) {
        let n = match port.read(&mut chunk) {
            Ok(n) => n,
            // Timeouts just mean no data arrived this interval.
            Err(e) if e.kind() == io::ErrorKind::TimedOut => continue,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!("serial read error: {}", e);
                continue;
            }
        };
        if n == 0 {
            continue;
        }

        lines.push(&chunk[..n]);

        let mut forwarded = false;
        while let Some(line) = lines.next_line() {
            match line {
                Ok(text) => {
                    for update in classify(&text) {
                        if tx.send(ReaderEvent::Field(update)).is_err() {
                            // UI side is gone; nothing left to update.
                            return;
                        }
                    }
                    forwarded = true;
                }
                Err(e) => warn!("discarding undecodable line: {}", e),
            }
        }

        // Throttle update frequency, but stay responsive to shutdown.
        if forwarded {
            sleep_with_shutdown(INTER_READ_PAUSE, shutdown);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(ConnectionStatus::Connecting.label(), "Connecting...");
        assert_eq!(ConnectionStatus::Connected.label(), "Connected");
        assert_eq!(ConnectionStatus::Failed.label(), "Disconnected");
    }
}
