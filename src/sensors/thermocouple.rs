//! MCP9600 thermocouple EMF-to-temperature converter.
//!
//! The device sits on the register bus at 0x60. Temperatures are
//! big-endian 16-bit two's-complement words at 0.0625 °C per LSB.
//!
//! The driver keeps no state beyond the bus handle and device address.
//! Retry policy belongs to the caller: a failed read is returned as-is.

use log::{debug, warn};

use crate::error::BusError;
use crate::sensors::SensorReading;
use crate::sensors::bus::RegisterBus;

/// Factory-default bus address (ADDR pin floating).
pub const DEFAULT_ADDRESS: u8 = 0x60;
/// Value the device-id register reports for an MCP9600.
pub const EXPECTED_DEVICE_ID: u8 = 0x40;
/// Temperature resolution.
pub const CELSIUS_PER_LSB: f32 = 0.0625;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    HotJunction = 0x00,
    ColdJunction = 0x01,
    DeviceId = 0x20,
}

/// Convert a raw temperature word to degrees Celsius.
pub fn raw_to_celsius(raw: i16) -> f32 {
    f32::from(raw) * CELSIUS_PER_LSB
}

pub struct Mcp9600<B> {
    bus: B,
    address: u8,
}

impl<B: RegisterBus> Mcp9600<B> {
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, DEFAULT_ADDRESS)
    }

    pub fn with_address(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Bring the bus up and confirm the device answers with the MCP9600 id.
    ///
    /// Returns `false` on any transport failure or id mismatch; a missing
    /// or wrong device is an expected outcome, not an error.
    pub fn check_identity(&mut self) -> bool {
        if let Err(e) = self.bus.init() {
            warn!("mcp9600: bus init failed: {}", e);
            return false;
        }

        let mut id = [0u8; 1];
        match self
            .bus
            .write_read(self.address, Register::DeviceId as u8, &mut id)
        {
            Ok(()) => {
                debug!("mcp9600: device id = 0x{:02X}", id[0]);
                id[0] == EXPECTED_DEVICE_ID
            }
            Err(e) => {
                warn!("mcp9600: device id read failed: {}", e);
                false
            }
        }
    }

    /// Thermocouple (hot-junction) temperature.
    pub fn read_hot_junction(&mut self) -> Result<SensorReading, BusError> {
        self.read_temperature(Register::HotJunction)
    }

    /// Ambient (cold-junction) temperature at the device.
    pub fn read_cold_junction(&mut self) -> Result<SensorReading, BusError> {
        self.read_temperature(Register::ColdJunction)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn release(self) -> B {
        self.bus
    }

    fn read_temperature(&mut self, register: Register) -> Result<SensorReading, BusError> {
        let mut data = [0u8; 2];
        self.bus.write_read(self.address, register as u8, &mut data)?;
        debug!(
            "mcp9600: {:?} data[0]=0x{:02X} data[1]=0x{:02X}",
            register, data[0], data[1]
        );
        Ok(SensorReading::from_raw(i16::from_be_bytes(data)))
    }
}
