//! Application state and logic

mod cli;

pub use cli::{parse_args, Args};

use std::collections::HashMap;

use crate::constants::UNAVAILABLE;
use crate::serial::{ConnectionStatus, ReaderEvent};
use crate::weather::{FieldTag, Severity};

/// Current contents of one dashboard slot.
#[derive(Debug, Clone)]
pub struct FieldSlot {
    /// Text currently shown
    pub text: String,
    /// Severity coloring for the slot
    pub severity: Severity,
}

/// Application state
///
/// Owns every value the dashboard shows. Mutated only on the foreground
/// thread by applying reader events; each slot independently holds the
/// most recent update for its tag (last-write-wins).
pub struct App {
    /// Current value of each dashboard slot
    slots: HashMap<FieldTag, FieldSlot>,
    /// State of the serial connection
    pub connection: ConnectionStatus,
    /// Port the reader was started on
    pub port_name: String,
    /// Baud rate the reader was started with
    pub baud_rate: u32,
    /// Field updates applied since startup
    pub updates_received: u64,
    /// UI refresh interval in milliseconds
    pub refresh_interval_ms: u64,
}

impl App {
    /// Creates a new App with every slot at its placeholder value
    pub fn new(port_name: String, baud_rate: u32, refresh_interval_ms: u64) -> Self {
        let slots = FieldTag::ALL
            .iter()
            .map(|&tag| {
                (
                    tag,
                    FieldSlot {
                        text: format!("{}: {}", tag.label(), UNAVAILABLE),
                        severity: Severity::Neutral,
                    },
                )
            })
            .collect();

        Self {
            slots,
            connection: ConnectionStatus::Connecting,
            port_name,
            baud_rate,
            updates_received: 0,
            refresh_interval_ms,
        }
    }

    /// Applies one event from the reader thread
    pub fn apply(&mut self, event: ReaderEvent) {
        match event {
            ReaderEvent::Field(update) => {
                self.slots.insert(
                    update.tag,
                    FieldSlot {
                        text: update.text,
                        severity: update.severity,
                    },
                );
                self.updates_received += 1;
            }
            ReaderEvent::Connection(status) => {
                self.connection = status;
            }
        }
    }

    /// Returns the current contents of a dashboard slot
    pub fn field(&self, tag: FieldTag) -> &FieldSlot {
        // Every tag is seeded in new(), so the lookup cannot miss.
        &self.slots[&tag]
    }
}
