//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements         | Connects to                  |
//! |-------------|--------------------|------------------------------|
//! | `hardware`  | SensorPort         | MCP9600 over the register bus|
//! |             | ActuatorPort       | Status LED, buzzer GPIOs     |
//! | `i2c`       | RegisterBus        | ESP-IDF I²C master (I2C0)    |
//! | `log_sink`  | EventSink          | Serial log output            |
//! | `time`      | ClockPort          | ESP32 system timer           |

pub mod hardware;
#[cfg(target_os = "espidf")]
pub mod i2c;
pub mod log_sink;
pub mod time;
