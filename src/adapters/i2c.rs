//! ESP-IDF I²C master adapter.
//!
//! Implements [`RegisterBus`] on I2C0. The driver is installed lazily by
//! the first [`RegisterBus::init`] call (pull-ups on, 100 kHz) and every
//! transaction is bounded by [`pins::I2C_TIMEOUT_MS`].

use esp_idf_hal::delay::TickType;
use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::i2c::{I2C0, I2cConfig, I2cDriver};
use esp_idf_hal::units::Hertz;
use esp_idf_svc::sys::{ESP_ERR_TIMEOUT, ESP_FAIL, EspError};
use log::info;

use crate::error::BusError;
use crate::pins;
use crate::sensors::bus::RegisterBus;

pub struct EspI2cBus {
    /// Peripherals waiting for the first `init()`.
    pending: Option<(I2C0, AnyIOPin, AnyIOPin)>,
    driver: Option<I2cDriver<'static>>,
}

impl EspI2cBus {
    pub fn new(i2c: I2C0, sda: AnyIOPin, scl: AnyIOPin) -> Self {
        Self {
            pending: Some((i2c, sda, scl)),
            driver: None,
        }
    }
}

fn map_esp_error(e: EspError) -> BusError {
    let code = e.code();
    if code == ESP_ERR_TIMEOUT as i32 {
        BusError::Timeout
    } else if code == ESP_FAIL {
        // The legacy I²C driver reports a missing ACK as ESP_FAIL.
        BusError::Nack
    } else {
        BusError::BusFault
    }
}

impl RegisterBus for EspI2cBus {
    fn init(&mut self) -> Result<(), BusError> {
        if self.driver.is_some() {
            return Ok(());
        }
        let Some((i2c, sda, scl)) = self.pending.take() else {
            return Err(BusError::NotInitialised);
        };

        let config = I2cConfig::new()
            .baudrate(Hertz(pins::I2C_FREQ_HZ))
            .sda_enable_pullup(true)
            .scl_enable_pullup(true);
        let driver = I2cDriver::new(i2c, sda, scl, &config).map_err(map_esp_error)?;
        self.driver = Some(driver);
        info!("i2c: I2C0 master up at {} Hz", pins::I2C_FREQ_HZ);
        Ok(())
    }

    fn write_read(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), BusError> {
        let driver = self.driver.as_mut().ok_or(BusError::NotInitialised)?;
        driver
            .write_read(
                address,
                &[register],
                buf,
                TickType::new_millis(pins::I2C_TIMEOUT_MS).ticks(),
            )
            .map_err(map_esp_error)
    }
}
