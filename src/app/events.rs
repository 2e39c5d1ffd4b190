//! Outbound application events.
//!
//! The alarm service and the door watch emit these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them; on the board they go to the serial log.

use crate::alarm::AlarmState;
use crate::config::AlarmConfig;
use crate::error::BusError;
use crate::sensors::SensorReading;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AlarmEvent {
    /// Sensor identity confirmed; monitoring may begin.
    Started { config: AlarmConfig },

    /// Identity check failed. Monitoring will not start.
    SensorMissing,

    /// A cycle produced a reading and classified it.
    Reading {
        reading: SensorReading,
        state: AlarmState,
    },

    /// Classification differs from the previous cycle (`from` is `None`
    /// for the first successful reading).
    StateChanged {
        from: Option<AlarmState>,
        to: AlarmState,
    },

    /// The sensor read failed; actuators were left as they were.
    ReadFailed(BusError),

    DoorOpened,

    /// Poll while the door stays open.
    DoorHeldOpen { open_ms: u64 },

    DoorClosed { last_open_ms: u64 },

    DoorReadFailed,
}

/// Point-in-time view of the alarm loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorStatus {
    /// `None` until the first successful reading.
    pub state: Option<AlarmState>,
    pub last_reading: Option<SensorReading>,
    pub cycles: u64,
    pub failed_reads: u64,
}
