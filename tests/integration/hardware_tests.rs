//! End-to-end tests: AlarmService over the real HardwareAdapter, with a
//! simulated MCP9600 on an embedded-hal I2C bus and observable GPIO levels.

use std::cell::Cell;
use std::rc::Rc;

use crate::mock_hw::{MockDelay, RecordingSink, SharedPin, SimMcp9600, journal};

use thermoguard::adapters::hardware::HardwareAdapter;
use thermoguard::alarm::AlarmState;
use thermoguard::app::events::AlarmEvent;
use thermoguard::app::ports::{ActuatorPort, SensorPort};
use thermoguard::app::service::{AlarmService, CycleOutcome};
use thermoguard::config::AlarmConfig;
use thermoguard::drivers::buzzer::Buzzer;
use thermoguard::drivers::status_led::StatusLed;
use thermoguard::error::BusError;
use thermoguard::sensors::bus::HalI2cBus;
use thermoguard::sensors::thermocouple::Mcp9600;

type Rig = HardwareAdapter<HalI2cBus<SimMcp9600>, SharedPin, SharedPin, SharedPin>;

struct Lines {
    red: Rc<Cell<bool>>,
    green: Rc<Cell<bool>>,
    buzzer: Rc<Cell<bool>>,
    hot_raw: Rc<Cell<i16>>,
    faulted: Rc<Cell<bool>>,
}

fn rig(device_id: u8) -> (Rig, Lines) {
    let sim = SimMcp9600::new(device_id);
    let hot_raw = sim.hot_raw.clone();
    let faulted = sim.faulted.clone();
    let (red, green, buzzer) = (SharedPin::default(), SharedPin::default(), SharedPin::default());
    let lines = Lines {
        red: red.0.clone(),
        green: green.0.clone(),
        buzzer: buzzer.0.clone(),
        hot_raw,
        faulted,
    };
    let hw = HardwareAdapter::new(
        Mcp9600::new(HalI2cBus::new(sim)),
        StatusLed::new(red, green),
        Buzzer::new(buzzer),
    );
    (hw, lines)
}

#[test]
fn genuine_device_passes_identity_check() {
    let (mut hw, _) = rig(0x40);
    let mut app = AlarmService::new(AlarmConfig::default()).unwrap();
    let mut sink = RecordingSink::new();
    assert!(app.start(&mut hw, &mut sink).is_ok());
}

#[test]
fn foreign_device_fails_identity_check() {
    let (mut hw, lines) = rig(0x41);
    let mut app = AlarmService::new(AlarmConfig::default()).unwrap();
    let mut sink = RecordingSink::new();

    assert!(app.start(&mut hw, &mut sink).is_err());
    assert_eq!(sink.events, vec![AlarmEvent::SensorMissing]);

    hw.all_off();
    assert!(!lines.red.get() && !lines.green.get() && !lines.buzzer.get());
}

#[test]
fn normal_reading_lights_green_only() {
    let (mut hw, lines) = rig(0x40);
    lines.hot_raw.set(400);
    let mut app = AlarmService::new(AlarmConfig::default()).unwrap();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink).unwrap();

    let j = journal();
    app.cycle(&mut hw, &mut MockDelay::new(&j), &mut sink);

    assert_eq!(app.state(), Some(AlarmState::Normal));
    assert_eq!(hw.led_state(), (false, true));
    assert!(lines.green.get());
    assert!(!lines.red.get());
    assert!(!lines.buzzer.get());
}

#[test]
fn alarm_reading_ends_cycle_dark_and_silent() {
    let (mut hw, lines) = rig(0x40);
    lines.hot_raw.set(800);
    let mut app = AlarmService::new(AlarmConfig::default()).unwrap();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink).unwrap();

    let j = journal();
    let outcome = app.cycle(&mut hw, &mut MockDelay::new(&j), &mut sink);

    assert!(matches!(
        outcome,
        CycleOutcome::Completed {
            state: AlarmState::Alarm,
            delay_ms: 1_000,
            ..
        }
    ));
    // Blink and beep are pulses; between cycles everything is off.
    assert_eq!(hw.led_state(), (false, false));
    assert!(!hw.buzzer_on());
    assert!(!lines.buzzer.get());
}

#[test]
fn negative_temperature_decodes_through_the_bus() {
    let (mut hw, lines) = rig(0x40);
    lines.hot_raw.set(-160);
    assert!(hw.check_identity());
    let reading = hw.read_hot_junction().unwrap();
    assert_eq!(reading.raw, -160);
    assert!((reading.celsius + 10.0).abs() < f32::EPSILON);
}

#[test]
fn bus_fault_keeps_previous_indication() {
    let (mut hw, lines) = rig(0x40);
    let mut app = AlarmService::new(AlarmConfig::default()).unwrap();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink).unwrap();

    let j = journal();
    let mut delay = MockDelay::new(&j);
    app.cycle(&mut hw, &mut delay, &mut sink);
    assert!(lines.green.get());

    lines.faulted.set(true);
    let outcome = app.cycle(&mut hw, &mut delay, &mut sink);

    assert!(matches!(
        outcome,
        CycleOutcome::ReadFailed {
            error: BusError::BusFault,
            ..
        }
    ));
    assert_eq!(
        sink.events.last(),
        Some(&AlarmEvent::ReadFailed(BusError::BusFault))
    );
    assert!(lines.green.get());
    assert_eq!(app.state(), Some(AlarmState::Normal));
}
