//! GPIO / peripheral pin assignments for the Thermoguard board.
//!
//! Single source of truth: the startup wiring in `main` owns one
//! [`BoardPins`] value and hands pin numbers to the drivers it builds.
//! No driver hard-codes a pin.

/// Every GPIO the firmware touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPins {
    /// Bicolor indicator, red element (active HIGH).
    pub led_red: i32,
    /// Bicolor indicator, green element (active HIGH).
    pub led_green: i32,
    /// Active buzzer (HIGH = sounding).
    pub buzzer: i32,
    /// Door contact input. HIGH = open.
    pub door: i32,
    /// Sensor bus data line.
    pub i2c_sda: i32,
    /// Sensor bus clock line.
    pub i2c_scl: i32,
}

impl BoardPins {
    pub const DEFAULT: Self = Self {
        led_red: 18,
        led_green: 21,
        buzzer: 19,
        door: 4,
        i2c_sda: 6,
        i2c_scl: 7,
    };

    fn all(&self) -> [i32; 6] {
        [
            self.led_red,
            self.led_green,
            self.buzzer,
            self.door,
            self.i2c_sda,
            self.i2c_scl,
        ]
    }

    /// True when no GPIO is assigned to two functions.
    pub fn is_conflict_free(&self) -> bool {
        let pins = self.all();
        pins.iter()
            .enumerate()
            .all(|(i, p)| !pins[i + 1..].contains(p))
    }
}

impl Default for BoardPins {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// I²C bus
// ---------------------------------------------------------------------------

/// Bus clock (100 kHz standard mode).
pub const I2C_FREQ_HZ: u32 = 100_000;
/// Upper bound on a single register transaction.
pub const I2C_TIMEOUT_MS: u64 = 1_000;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Stack for the door-watch thread, in KiB.
pub const DOOR_TASK_STACK_KB: usize = 4;
