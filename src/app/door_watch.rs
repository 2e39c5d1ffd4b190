//! Door watch — the door tracker's own polling loop.
//!
//! Runs independently of the alarm loop (on the board, in its own thread)
//! and shares nothing with it but the event sink type. Each poll reports
//! edges, and a held-open door is re-reported with its running duration.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use log::warn;

use crate::sensors::door::{DoorEdge, DoorTracker};

use super::events::AlarmEvent;
use super::ports::{ClockPort, EventSink, StopSignal};

/// Poll once and report what changed. `None` if the pin could not be read.
pub fn poll_door<P: InputPin, C: ClockPort>(
    tracker: &mut DoorTracker<P, C>,
    sink: &mut impl EventSink,
) -> Option<DoorEdge> {
    let edge = match tracker.poll() {
        Ok(edge) => edge,
        Err(e) => {
            warn!("door: {}", e);
            sink.emit(&AlarmEvent::DoorReadFailed);
            return None;
        }
    };

    match edge {
        DoorEdge::Opened => sink.emit(&AlarmEvent::DoorOpened),
        DoorEdge::Closed { last_open_ms } => sink.emit(&AlarmEvent::DoorClosed { last_open_ms }),
        DoorEdge::Unchanged if tracker.tracked_open() => sink.emit(&AlarmEvent::DoorHeldOpen {
            open_ms: tracker.open_duration_ms(),
        }),
        DoorEdge::Unchanged => {}
    }
    Some(edge)
}

/// Poll every `interval_ms` until `stop` fires. Returns the poll count.
pub fn run_door_watch<P: InputPin, C: ClockPort>(
    tracker: &mut DoorTracker<P, C>,
    delay: &mut impl DelayNs,
    sink: &mut impl EventSink,
    interval_ms: u32,
    mut stop: impl StopSignal,
) -> u64 {
    let mut polls = 0u64;
    while !stop.should_stop(polls) {
        poll_door(tracker, sink);
        polls += 1;
        delay.delay_ms(interval_ms);
    }
    polls
}
