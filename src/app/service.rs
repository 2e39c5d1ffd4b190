//! Alarm control loop — the hexagonal core.
//!
//! [`AlarmService`] owns the configuration and the loop's running state.
//! All I/O flows through port traits passed in at call sites, so the whole
//! loop runs against mock adapters in tests.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      AlarmService      │
//! ActuatorPort ◀──│ read, classify, pulse  │ ──▶ DelayNs
//!                 └────────────────────────┘
//! ```
//!
//! One cycle:
//!
//! 1. Read the hot junction.
//! 2. On a bus error: report it, leave the actuators alone, wait
//!    `read_retry_delay_ms`.
//! 3. Otherwise classify, drive the actuators, and wait the cadence of the
//!    new state. Normal: green solid. Alarm: one red blink, then one buzzer
//!    pulse and its quiet gap, at the shorter alarm cadence.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::alarm::{ActuatorCommand, AlarmState, Indicator, classify};
use crate::config::AlarmConfig;
use crate::error::{BusError, Error, Result, SensorError};
use crate::sensors::SensorReading;

use super::events::{AlarmEvent, MonitorStatus};
use super::ports::{ActuatorPort, EventSink, SensorPort, StopSignal};

/// What a single [`AlarmService::cycle`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleOutcome {
    Completed {
        reading: SensorReading,
        state: AlarmState,
        command: ActuatorCommand,
        /// Post-cycle wait that was applied.
        delay_ms: u32,
    },
    ReadFailed {
        error: BusError,
        delay_ms: u32,
    },
    /// [`AlarmService::start`] has not succeeded; no hardware was touched.
    NotStarted,
}

// ───────────────────────────────────────────────────────────────
// AlarmService
// ───────────────────────────────────────────────────────────────

pub struct AlarmService {
    config: AlarmConfig,
    state: Option<AlarmState>,
    last_reading: Option<SensorReading>,
    started: bool,
    cycles: u64,
    failed_reads: u64,
}

impl AlarmService {
    /// Construct the service from a validated configuration.
    ///
    /// Does **not** touch the sensor — call [`start`](Self::start) next.
    pub fn new(config: AlarmConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
            last_reading: None,
            started: false,
            cycles: 0,
            failed_reads: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Confirm the sensor identity. A mismatch is fatal: the loop must
    /// not run, and [`run`](Self::run) will refuse until a later `start`
    /// succeeds.
    pub fn start(&mut self, hw: &mut impl SensorPort, sink: &mut impl EventSink) -> Result<()> {
        if !hw.check_identity() {
            sink.emit(&AlarmEvent::SensorMissing);
            return Err(SensorError::IdentityMismatch.into());
        }
        self.started = true;
        sink.emit(&AlarmEvent::Started {
            config: self.config,
        });
        info!(
            "AlarmService started (threshold {:.2}\u{00b0}C)",
            self.config.alarm_threshold_c
        );
        Ok(())
    }

    /// Run cycles until `stop` says otherwise. Returns how many ran.
    pub fn run(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
        mut stop: impl StopSignal,
    ) -> Result<u64> {
        if !self.started {
            return Err(Error::Init("sensor identity not verified"));
        }
        let mut completed = 0u64;
        while !stop.should_stop(completed) {
            self.cycle(hw, delay, sink);
            completed += 1;
        }
        Ok(completed)
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run exactly one read → classify → actuate → wait cycle.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] so one adapter can own all the peripherals.
    /// Before a successful [`start`](Self::start) this returns
    /// [`CycleOutcome::NotStarted`] without reading or driving anything.
    pub fn cycle(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> CycleOutcome {
        if !self.started {
            return CycleOutcome::NotStarted;
        }
        self.cycles += 1;

        let reading = match hw.read_hot_junction() {
            Ok(r) => r,
            Err(error) => {
                self.failed_reads += 1;
                sink.emit(&AlarmEvent::ReadFailed(error));
                let delay_ms = self.config.read_retry_delay_ms;
                if delay_ms > 0 {
                    delay.delay_ms(delay_ms);
                }
                return CycleOutcome::ReadFailed { error, delay_ms };
            }
        };

        let state = classify(reading.celsius, self.config.alarm_threshold_c);
        sink.emit(&AlarmEvent::Reading { reading, state });
        if self.state != Some(state) {
            sink.emit(&AlarmEvent::StateChanged {
                from: self.state,
                to: state,
            });
        }
        self.state = Some(state);
        self.last_reading = Some(reading);

        let command = ActuatorCommand::for_state(state);
        self.apply_command(command, hw, delay);

        let delay_ms = self.config.interval_for(state);
        delay.delay_ms(delay_ms);

        CycleOutcome::Completed {
            reading,
            state,
            command,
            delay_ms,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Classification of the last successful reading.
    pub fn state(&self) -> Option<AlarmState> {
        self.state
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn config(&self) -> &AlarmConfig {
        &self.config
    }

    pub fn status(&self) -> MonitorStatus {
        MonitorStatus {
            state: self.state,
            last_reading: self.last_reading,
            cycles: self.cycles,
            failed_reads: self.failed_reads,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate a command into level changes and pulse waits.
    fn apply_command(
        &self,
        command: ActuatorCommand,
        hw: &mut impl ActuatorPort,
        delay: &mut impl DelayNs,
    ) {
        match command.indicator {
            Indicator::Green => {
                hw.set_green(true);
                hw.set_red(false);
            }
            Indicator::RedBlinking => {
                hw.set_red(true);
                delay.delay_ms(self.config.red_blink_ms);
                hw.set_red(false);
                hw.set_green(false);
            }
        }

        if command.alarm_sound {
            hw.set_buzzer(true);
            delay.delay_ms(self.config.buzzer_on_ms);
            hw.set_buzzer(false);
            if self.config.buzzer_quiet_ms > 0 {
                delay.delay_ms(self.config.buzzer_quiet_ms);
            }
        }
    }
}
