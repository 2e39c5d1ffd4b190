//! Active buzzer on a single GPIO (HIGH = sounding).
//!
//! A dumb actuator: pulse timing is decided by the alarm loop.

use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

pub struct Buzzer<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> Buzzer<P> {
    pub fn new(pin: P) -> Self {
        let mut buzzer = Self { pin, on: false };
        buzzer.set(false);
        buzzer
    }

    pub fn set(&mut self, on: bool) {
        if self.pin.set_state(PinState::from(on)).is_err() {
            warn!("buzzer: GPIO write failed");
        }
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn release(self) -> P {
        self.pin
    }
}
