//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the thermocouple driver, the status LED and the buzzer, exposing
//! them through [`SensorPort`] and [`ActuatorPort`]. Generic over the
//! embedded-hal pin types and the register bus, so the same adapter runs
//! on ESP-IDF pin drivers and on host-side fakes.

use embedded_hal::digital::OutputPin;

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::buzzer::Buzzer;
use crate::drivers::status_led::StatusLed;
use crate::error::BusError;
use crate::sensors::SensorReading;
use crate::sensors::bus::RegisterBus;
use crate::sensors::thermocouple::Mcp9600;

/// Concrete adapter that combines all alarm-loop hardware behind port traits.
pub struct HardwareAdapter<B, R, G, Z> {
    sensor: Mcp9600<B>,
    led: StatusLed<R, G>,
    buzzer: Buzzer<Z>,
}

impl<B, R, G, Z> HardwareAdapter<B, R, G, Z>
where
    B: RegisterBus,
    R: OutputPin,
    G: OutputPin,
    Z: OutputPin,
{
    pub fn new(sensor: Mcp9600<B>, led: StatusLed<R, G>, buzzer: Buzzer<Z>) -> Self {
        Self {
            sensor,
            led,
            buzzer,
        }
    }

    /// `(red, green)` as last commanded.
    pub fn led_state(&self) -> (bool, bool) {
        self.led.current()
    }

    pub fn buzzer_on(&self) -> bool {
        self.buzzer.is_on()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<B, R, G, Z> SensorPort for HardwareAdapter<B, R, G, Z>
where
    B: RegisterBus,
    R: OutputPin,
    G: OutputPin,
    Z: OutputPin,
{
    fn check_identity(&mut self) -> bool {
        self.sensor.check_identity()
    }

    fn read_hot_junction(&mut self) -> Result<SensorReading, BusError> {
        self.sensor.read_hot_junction()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<B, R, G, Z> ActuatorPort for HardwareAdapter<B, R, G, Z>
where
    B: RegisterBus,
    R: OutputPin,
    G: OutputPin,
    Z: OutputPin,
{
    fn set_green(&mut self, on: bool) {
        self.led.set_green(on);
    }

    fn set_red(&mut self, on: bool) {
        self.led.set_red(on);
    }

    fn set_buzzer(&mut self, on: bool) {
        self.buzzer.set(on);
    }

    fn all_off(&mut self) {
        self.led.off();
        self.buzzer.set(false);
    }
}
