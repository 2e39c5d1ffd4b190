//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{error, info, warn};

use crate::alarm::AlarmState;
use crate::app::events::AlarmEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AlarmEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AlarmEvent) {
        match event {
            AlarmEvent::Started { config } => {
                info!(
                    "START | sensor detected | config={}",
                    serde_json::to_string(config).unwrap_or_default()
                );
            }
            AlarmEvent::SensorMissing => {
                error!("START | MCP9600 not detected, monitoring disabled");
            }
            AlarmEvent::Reading { reading, state } => {
                info!(
                    "TEMP  | {:.2}\u{00b0}C (raw={}) | LED {}",
                    reading.celsius,
                    reading.raw,
                    match state {
                        AlarmState::Normal => "GREEN",
                        AlarmState::Alarm => "RED",
                    }
                );
            }
            AlarmEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            AlarmEvent::ReadFailed(e) => {
                warn!("TEMP  | read failed: {}", e);
            }
            AlarmEvent::DoorOpened => {
                info!("DOOR  | opened");
            }
            AlarmEvent::DoorHeldOpen { open_ms } => {
                info!("DOOR  | open for {} ms", open_ms);
            }
            AlarmEvent::DoorClosed { last_open_ms } => {
                info!("DOOR  | closed after {} ms", last_open_ms);
            }
            AlarmEvent::DoorReadFailed => {
                warn!("DOOR  | input read failed");
            }
        }
    }
}
