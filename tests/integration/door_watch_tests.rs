use std::cell::Cell;
use std::rc::Rc;

use crate::mock_hw::{Call, MockClock, MockDelay, MockLine, RecordingSink, ScriptedLine, journal};

use thermoguard::app::door_watch::{poll_door, run_door_watch};
use thermoguard::app::events::AlarmEvent;
use thermoguard::app::ports::MaxCycles;
use thermoguard::sensors::door::{DoorEdge, DoorState, DoorTracker};

#[test]
fn open_hold_close_reports_durations() {
    let j = journal();
    let now = Rc::new(Cell::new(0u64));
    let line = ScriptedLine::new(&[
        Some(false),
        Some(true),
        Some(true),
        Some(true),
        Some(false),
        Some(false),
    ]);
    let mut tracker = DoorTracker::new(line, MockClock(now.clone()));
    let mut delay = MockDelay::advancing(&j, &now);
    let mut sink = RecordingSink::new();

    let polls = run_door_watch(&mut tracker, &mut delay, &mut sink, 30_000, MaxCycles(6));

    assert_eq!(polls, 6);
    assert_eq!(
        sink.events,
        vec![
            AlarmEvent::DoorOpened,
            AlarmEvent::DoorHeldOpen { open_ms: 30_000 },
            AlarmEvent::DoorHeldOpen { open_ms: 60_000 },
            AlarmEvent::DoorClosed {
                last_open_ms: 90_000
            },
        ]
    );
    assert_eq!(j.borrow().len(), 6);
    assert!(j.borrow().iter().all(|c| *c == Call::Delay(30_000)));
    assert_eq!(tracker.state(), DoorState::Closed);
    assert_eq!(tracker.open_duration_ms(), 0);
}

#[test]
fn failed_read_is_reported_and_polling_continues() {
    let j = journal();
    let now = Rc::new(Cell::new(0u64));
    let line = ScriptedLine::new(&[Some(true), None, Some(true)]);
    let mut tracker = DoorTracker::new(line, MockClock(now.clone()));
    let mut delay = MockDelay::advancing(&j, &now);
    let mut sink = RecordingSink::new();

    run_door_watch(&mut tracker, &mut delay, &mut sink, 1_000, MaxCycles(3));

    assert_eq!(
        sink.events,
        vec![
            AlarmEvent::DoorOpened,
            AlarmEvent::DoorReadFailed,
            AlarmEvent::DoorHeldOpen { open_ms: 2_000 },
        ]
    );
    assert_eq!(tracker.opened_at_ms(), Some(0));
}

#[test]
fn opened_at_is_stable_while_held_open() {
    let level = Rc::new(Cell::new(true));
    let now = Rc::new(Cell::new(5_000u64));
    let mut tracker = DoorTracker::new(MockLine(level.clone()), MockClock(now.clone()));
    let mut sink = RecordingSink::new();

    assert_eq!(poll_door(&mut tracker, &mut sink), Some(DoorEdge::Opened));
    let mut last = 0;
    for step in 1..=4u64 {
        now.set(5_000 + step * 700);
        assert_eq!(poll_door(&mut tracker, &mut sink), Some(DoorEdge::Unchanged));
        assert_eq!(tracker.opened_at_ms(), Some(5_000));
        assert!(tracker.open_duration_ms() >= last);
        last = tracker.open_duration_ms();
    }
    assert_eq!(last, 2_800);
}

#[test]
fn closed_door_stays_quiet() {
    let level = Rc::new(Cell::new(false));
    let now = Rc::new(Cell::new(0u64));
    let mut tracker = DoorTracker::new(MockLine(level), MockClock(now.clone()));
    let mut sink = RecordingSink::new();

    for t in [0, 30_000, 60_000] {
        now.set(t);
        assert_eq!(poll_door(&mut tracker, &mut sink), Some(DoorEdge::Unchanged));
    }
    assert!(sink.events.is_empty());
    assert_eq!(tracker.open_duration_ms(), 0);
}

#[test]
fn live_query_sees_line_before_the_next_poll() {
    let level = Rc::new(Cell::new(false));
    let now = Rc::new(Cell::new(0u64));
    let mut tracker = DoorTracker::new(MockLine(level.clone()), MockClock(now));
    let mut sink = RecordingSink::new();

    poll_door(&mut tracker, &mut sink);
    level.set(true);

    assert_eq!(tracker.is_open(), Ok(true));
    assert!(!tracker.tracked_open());
    assert_eq!(tracker.open_duration_ms(), 0);

    poll_door(&mut tracker, &mut sink);
    assert!(tracker.tracked_open());
}
