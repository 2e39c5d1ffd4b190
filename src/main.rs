//! Thermoguard Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter        LogEventSink     MonotonicClock      │
//! │  (Sensor+Actuator)      (EventSink)      (ClockPort)         │
//! │  EspI2cBus (RegisterBus)                                     │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ─────────────────       │
//! │                                                              │
//! │  ┌───────────────────────┐     ┌───────────────────────┐     │
//! │  │ AlarmService (main)   │     │ door watch (thread)   │     │
//! │  │ read, classify, pulse │     │ poll, edge, duration  │     │
//! │  └───────────────────────┘     └───────────────────────┘     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Result, bail};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, AnyInputPin, AnyOutputPin, PinDriver};
use esp_idf_hal::peripherals::Peripherals;
use log::{error, info};

use thermoguard::adapters::hardware::HardwareAdapter;
use thermoguard::adapters::i2c::EspI2cBus;
use thermoguard::adapters::log_sink::LogEventSink;
use thermoguard::adapters::time::MonotonicClock;
use thermoguard::app::door_watch::run_door_watch;
use thermoguard::app::ports::{ActuatorPort, RunForever};
use thermoguard::app::service::AlarmService;
use thermoguard::config::AlarmConfig;
use thermoguard::drivers::buzzer::Buzzer;
use thermoguard::drivers::status_led::StatusLed;
use thermoguard::pins::{self, BoardPins};
use thermoguard::sensors::door::DoorTracker;
use thermoguard::sensors::thermocouple::Mcp9600;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Thermoguard v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = AlarmConfig::default();
    config.validate()?;
    let board = BoardPins::DEFAULT;
    if !board.is_conflict_free() {
        bail!("pin assignment conflict in {:?}", board);
    }

    // ── 3. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;

    // SAFETY: pin numbers come from BoardPins, checked conflict-free
    // above, and each one is claimed exactly once here.
    let (sda, scl, red, green, buzzer, door) = unsafe {
        (
            AnyIOPin::new(board.i2c_sda),
            AnyIOPin::new(board.i2c_scl),
            AnyOutputPin::new(board.led_red),
            AnyOutputPin::new(board.led_green),
            AnyOutputPin::new(board.buzzer),
            AnyInputPin::new(board.door),
        )
    };

    // ── 4. Door watch (independent cadence, own thread) ───────
    let door_pin = PinDriver::input(door)?;
    let door_interval_ms = config.door_check_interval_ms;
    std::thread::Builder::new()
        .name("door".into())
        .stack_size(pins::DOOR_TASK_STACK_KB * 1024)
        .spawn(move || {
            let mut tracker = DoorTracker::new(door_pin, MonotonicClock::new());
            let mut sink = LogEventSink::new();
            run_door_watch(
                &mut tracker,
                &mut FreeRtos,
                &mut sink,
                door_interval_ms,
                RunForever,
            );
        })?;

    // ── 5. Alarm loop hardware ────────────────────────────────
    let sensor = Mcp9600::new(EspI2cBus::new(peripherals.i2c0, sda, scl));
    info!("MCP9600 expected at 0x{:02X}", sensor.address());
    let led = StatusLed::new(PinDriver::output(red)?, PinDriver::output(green)?);
    let mut hw = HardwareAdapter::new(sensor, led, Buzzer::new(PinDriver::output(buzzer)?));
    let mut sink = LogEventSink::new();

    // ── 6. Identity check, then monitor forever ───────────────
    let mut app = AlarmService::new(config)?;
    if let Err(e) = app.start(&mut hw, &mut sink) {
        error!("Startup aborted: {}", e);
        hw.all_off();
        return Err(e.into());
    }

    app.run(&mut hw, &mut FreeRtos, &mut sink, RunForever)?;
    Ok(())
}
