//! System configuration parameters
//!
//! Threshold and timing values for the alarm loop and the door watch.
//! The firmware builds one [`AlarmConfig`] at startup and hands it to the
//! services by value; nothing reads these from globals.

use serde::{Deserialize, Serialize};

use crate::alarm::AlarmState;
use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlarmConfig {
    // --- Threshold ---
    /// Hot-junction temperature (Celsius) at or above which the alarm fires
    pub alarm_threshold_c: f32,

    // --- Cadence ---
    /// Delay after a cycle classified Normal (milliseconds)
    pub nominal_interval_ms: u32,
    /// Delay after a cycle classified Alarm (milliseconds)
    pub alarm_interval_ms: u32,
    /// Delay after a failed sensor read (milliseconds, 0 = retry immediately)
    pub read_retry_delay_ms: u32,
    /// Door poll interval (milliseconds)
    pub door_check_interval_ms: u32,

    // --- Actuator pulses ---
    /// Red indicator on-time per alarm cycle (milliseconds)
    pub red_blink_ms: u32,
    /// Buzzer on-time per alarm cycle (milliseconds)
    pub buzzer_on_ms: u32,
    /// Silence after each buzzer pulse (milliseconds)
    pub buzzer_quiet_ms: u32,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            alarm_threshold_c: 50.0,

            nominal_interval_ms: 10_000, // 0.1 Hz
            alarm_interval_ms: 1_000,    // 1 Hz
            read_retry_delay_ms: 10_000,
            door_check_interval_ms: 30_000,

            red_blink_ms: 200,
            buzzer_on_ms: 50,
            buzzer_quiet_ms: 300,
        }
    }
}

impl AlarmConfig {
    /// Reject values the control loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.alarm_threshold_c.is_finite() {
            return Err(Error::Config("alarm threshold must be finite"));
        }
        if self.nominal_interval_ms == 0 {
            return Err(Error::Config("nominal interval must be non-zero"));
        }
        if self.alarm_interval_ms >= self.nominal_interval_ms {
            return Err(Error::Config("alarm interval must be shorter than nominal"));
        }
        if self.door_check_interval_ms == 0 {
            return Err(Error::Config("door check interval must be non-zero"));
        }
        if self.red_blink_ms == 0 || self.buzzer_on_ms == 0 {
            return Err(Error::Config("alarm pulses must be non-zero"));
        }
        Ok(())
    }

    /// Post-cycle delay for a classified reading.
    pub fn interval_for(&self, state: AlarmState) -> u32 {
        match state {
            AlarmState::Normal => self.nominal_interval_ms,
            AlarmState::Alarm => self.alarm_interval_ms,
        }
    }
}
