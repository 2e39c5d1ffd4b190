//! Actuator drivers.

pub mod buzzer;
pub mod status_led;
