//! Alarm classification and the actuator command it maps to.
//!
//! Classification has no hysteresis: the state is a pure function of the
//! latest reading and never depends on the previous state.

use serde::{Deserialize, Serialize};

/// Outcome of comparing one reading against the alarm threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlarmState {
    Normal,
    Alarm,
}

/// What the bicolor indicator shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Green on, red off.
    Green,
    /// Green off, red pulsed once per cycle.
    RedBlinking,
}

/// Actuator output for one cycle. One-to-one with [`AlarmState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorCommand {
    pub indicator: Indicator,
    pub alarm_sound: bool,
}

impl ActuatorCommand {
    pub const NORMAL: Self = Self {
        indicator: Indicator::Green,
        alarm_sound: false,
    };

    pub const ALARM: Self = Self {
        indicator: Indicator::RedBlinking,
        alarm_sound: true,
    };

    pub const fn for_state(state: AlarmState) -> Self {
        match state {
            AlarmState::Normal => Self::NORMAL,
            AlarmState::Alarm => Self::ALARM,
        }
    }
}

/// `Alarm` iff `celsius >= threshold_c`.
///
/// A NaN reading compares false against everything and therefore lands in
/// `Alarm`; an unreadable temperature is not reported as safe.
pub fn classify(celsius: f32, threshold_c: f32) -> AlarmState {
    if celsius < threshold_c {
        AlarmState::Normal
    } else {
        AlarmState::Alarm
    }
}
