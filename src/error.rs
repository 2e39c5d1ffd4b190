//! Unified error types for the Thermoguard firmware.
//!
//! A single `Error` enum that every subsystem converts into, so the startup
//! path and the control loop handle failures uniformly. All variants are
//! `Copy` so they can be carried inside events without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A register transaction on the sensor bus failed.
    Bus(BusError),
    /// A sensor is absent, misidentified, or could not be read.
    Sensor(SensorError),
    /// Peripheral initialisation or startup sequencing failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus: {e}"),
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Bus transport errors
// ---------------------------------------------------------------------------

/// Failure of a single addressed register transaction.
///
/// Recovered locally by the control loop: the cycle's actuator update is
/// skipped and the next cycle tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The transaction did not complete within the bus timeout.
    Timeout,
    /// The device did not acknowledge its address or a data byte.
    Nack,
    /// Bus-level fault (arbitration loss, overrun, stuck line).
    BusFault,
    /// The bus driver has not been initialised yet.
    NotInitialised,
    /// Any other driver-reported failure.
    Other,
}

impl BusError {
    /// Map an embedded-hal I2C error kind onto the firmware's bus errors.
    pub fn from_kind(kind: embedded_hal::i2c::ErrorKind) -> Self {
        use embedded_hal::i2c::ErrorKind;
        match kind {
            ErrorKind::NoAcknowledge(_) => Self::Nack,
            ErrorKind::Bus | ErrorKind::ArbitrationLoss | ErrorKind::Overrun => Self::BusFault,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "transaction timed out"),
            Self::Nack => write!(f, "no acknowledge"),
            Self::BusFault => write!(f, "bus fault"),
            Self::NotInitialised => write!(f, "bus not initialised"),
            Self::Other => write!(f, "driver error"),
        }
    }
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Self::Bus(e)
    }
}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The thermocouple interface did not answer with the expected device id.
    /// Fatal at startup.
    IdentityMismatch,
    /// A digital input could not be read.
    GpioReadFailed,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdentityMismatch => write!(f, "device identity mismatch"),
            Self::GpioReadFailed => write!(f, "GPIO read failed"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
