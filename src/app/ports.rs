//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AlarmService / door watch (domain)
//! ```
//!
//! Driven adapters (sensor, actuators, clock, event sinks) implement these
//! traits. The services consume them via generics, so the domain core never
//! touches hardware directly. Blocking waits go through
//! `embedded_hal::delay::DelayNs`, which needs no port of its own.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::error::BusError;
use crate::sensors::SensorReading;

use super::events::AlarmEvent;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the thermocouple interface.
pub trait SensorPort {
    /// Bring up the bus and confirm the expected device answers.
    fn check_identity(&mut self) -> bool;

    /// One hot-junction sample. No retry inside the call.
    fn read_hot_junction(&mut self) -> Result<SensorReading, BusError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: indicator elements and buzzer, as plain levels.
/// Pulse timing is sequenced by the caller.
pub trait ActuatorPort {
    fn set_green(&mut self, on: bool);

    fn set_red(&mut self, on: bool);

    fn set_buzzer(&mut self, on: bool);

    /// Everything dark and silent.
    fn all_off(&mut self) {
        self.set_green(false);
        self.set_red(false);
        self.set_buzzer(false);
    }
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond time source.
pub trait ClockPort {
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AlarmEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AlarmEvent);
}

// ───────────────────────────────────────────────────────────────
// Loop termination
// ───────────────────────────────────────────────────────────────

/// Decides, before each iteration, whether a service loop ends.
///
/// `completed` is the number of iterations the loop has finished so far.
pub trait StopSignal {
    fn should_stop(&mut self, completed: u64) -> bool;
}

/// Production setting: never stop.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunForever;

impl StopSignal for RunForever {
    fn should_stop(&mut self, _completed: u64) -> bool {
        false
    }
}

/// Stop after a fixed number of iterations.
#[derive(Debug, Clone, Copy)]
pub struct MaxCycles(pub u64);

impl StopSignal for MaxCycles {
    fn should_stop(&mut self, completed: u64) -> bool {
        completed >= self.0
    }
}

/// Stop once the flag is raised (from another thread or a test).
impl StopSignal for &AtomicBool {
    fn should_stop(&mut self, _completed: u64) -> bool {
        self.load(Ordering::Acquire)
    }
}
