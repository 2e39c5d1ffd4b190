//! Bicolor status indicator.
//!
//! Two discrete LEDs (red, green), each on its own active-HIGH output.
//! Tracks the last commanded level of each so adapters can report it.

use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

pub struct StatusLed<R, G> {
    red: R,
    green: G,
    current: (bool, bool),
}

impl<R: OutputPin, G: OutputPin> StatusLed<R, G> {
    /// Take both pins and drive them LOW.
    pub fn new(red: R, green: G) -> Self {
        let mut led = Self {
            red,
            green,
            current: (false, false),
        };
        led.off();
        led
    }

    pub fn set_red(&mut self, on: bool) {
        if self.red.set_state(PinState::from(on)).is_err() {
            warn!("status LED: red write failed");
        }
        self.current.0 = on;
    }

    pub fn set_green(&mut self, on: bool) {
        if self.green.set_state(PinState::from(on)).is_err() {
            warn!("status LED: green write failed");
        }
        self.current.1 = on;
    }

    pub fn off(&mut self) {
        self.set_red(false);
        self.set_green(false);
    }

    /// `(red, green)` as last commanded.
    pub fn current(&self) -> (bool, bool) {
        self.current
    }

    pub fn release(self) -> (R, G) {
        (self.red, self.green)
    }
}
