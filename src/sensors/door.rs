//! Door-contact tracker.
//!
//! Polled, never interrupt-driven. Each [`DoorTracker::poll`] samples the
//! input once and advances a two-state machine:
//!
//! | Tracked | Level | Effect                                      |
//! |---------|-------|---------------------------------------------|
//! | Closed  | HIGH  | → Open, start = now, duration = 0           |
//! | Open    | HIGH  | duration = now − start                      |
//! | Open    | LOW   | → Closed, start cleared, duration = 0       |
//! | Closed  | LOW   | nothing                                     |
//!
//! [`DoorTracker::is_open`] re-reads the pin instead of returning the tracked
//! state, so it can disagree with [`DoorTracker::tracked_open`] until the
//! next poll. Duration bookkeeping only follows what `poll` observed.

use embedded_hal::digital::InputPin;

use crate::app::ports::ClockPort;
use crate::error::{Result, SensorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Closed,
    Open { since_ms: u64 },
}

/// What a single poll observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorEdge {
    Opened,
    /// `last_open_ms` is how long the door had been open when the closing
    /// poll saw it shut.
    Closed { last_open_ms: u64 },
    Unchanged,
}

pub struct DoorTracker<P, C> {
    pin: P,
    clock: C,
    state: DoorState,
    open_duration_ms: u64,
}

impl<P: InputPin, C: ClockPort> DoorTracker<P, C> {
    /// Bind to the door input. Starts Closed with zero duration regardless
    /// of the current line level; the first poll picks up an already-open door.
    pub fn new(pin: P, clock: C) -> Self {
        Self {
            pin,
            clock,
            state: DoorState::Closed,
            open_duration_ms: 0,
        }
    }

    pub fn poll(&mut self) -> Result<DoorEdge> {
        let level = self.read_level()?;
        let now = self.clock.now_ms();

        let edge = match (self.state, level) {
            (DoorState::Closed, true) => {
                self.state = DoorState::Open { since_ms: now };
                self.open_duration_ms = 0;
                DoorEdge::Opened
            }
            (DoorState::Open { since_ms }, true) => {
                self.open_duration_ms = now.saturating_sub(since_ms);
                DoorEdge::Unchanged
            }
            (DoorState::Open { since_ms }, false) => {
                self.state = DoorState::Closed;
                self.open_duration_ms = 0;
                DoorEdge::Closed {
                    last_open_ms: now.saturating_sub(since_ms),
                }
            }
            (DoorState::Closed, false) => DoorEdge::Unchanged,
        };
        Ok(edge)
    }

    /// Live line level, read from the pin now.
    pub fn is_open(&mut self) -> Result<bool> {
        self.read_level()
    }

    /// Open/closed as of the last poll.
    pub fn tracked_open(&self) -> bool {
        matches!(self.state, DoorState::Open { .. })
    }

    pub fn opened_at_ms(&self) -> Option<u64> {
        match self.state {
            DoorState::Open { since_ms } => Some(since_ms),
            DoorState::Closed => None,
        }
    }

    /// Duration computed by the last poll. Always 0 while tracked Closed.
    pub fn open_duration_ms(&self) -> u64 {
        self.open_duration_ms
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }

    fn read_level(&mut self) -> Result<bool> {
        self.pin
            .is_high()
            .map_err(|_| SensorError::GpioReadFailed.into())
    }
}
