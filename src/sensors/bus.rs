//! Register-bus transport.
//!
//! [`RegisterBus`] is the one capability the thermocouple driver needs from
//! the two-wire bus: bring it up once, then do addressed "write register
//! pointer, read N bytes" transactions. [`HalI2cBus`] provides it over any
//! embedded-hal 1.0 I2C implementation; the ESP-IDF build uses
//! `adapters::i2c::EspI2cBus`, which adds a bounded per-transaction timeout.

use embedded_hal::i2c::{Error as _, I2c};
use log::info;

use crate::error::BusError;

/// Addressed register access on a shared bus.
pub trait RegisterBus {
    /// Bring the bus up. Idempotent: later calls after a success are no-ops.
    fn init(&mut self) -> Result<(), BusError>;

    /// Write `register` to the device at `address`, then read `buf.len()`
    /// bytes back in the same transaction.
    fn write_read(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), BusError>;
}

/// [`RegisterBus`] over an already-configured embedded-hal I2C master.
pub struct HalI2cBus<I> {
    i2c: I,
    ready: bool,
}

impl<I: I2c> HalI2cBus<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c, ready: false }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> RegisterBus for HalI2cBus<I> {
    fn init(&mut self) -> Result<(), BusError> {
        if !self.ready {
            self.ready = true;
            info!("i2c: bus ready");
        }
        Ok(())
    }

    fn write_read(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), BusError> {
        if !self.ready {
            return Err(BusError::NotInitialised);
        }
        self.i2c
            .write_read(address, &[register], buf)
            .map_err(|e| BusError::from_kind(e.kind()))
    }
}
