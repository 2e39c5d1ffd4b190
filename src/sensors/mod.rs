//! Sensor subsystem: the register bus, the thermocouple driver, and the
//! door-contact tracker.

pub mod bus;
pub mod door;
pub mod thermocouple;

use serde::Serialize;

/// One temperature sample. Built per successful read, consumed by the
/// cycle that produced it, never retained as history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorReading {
    pub raw: i16,
    pub celsius: f32,
}

impl SensorReading {
    pub fn from_raw(raw: i16) -> Self {
        Self {
            raw,
            celsius: thermocouple::raw_to_celsius(raw),
        }
    }
}
