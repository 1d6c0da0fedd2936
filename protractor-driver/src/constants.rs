pub(crate) const CMD_REQUEST_DATA: u8 = 0x15;
pub(crate) const CMD_SCAN_TIME: u8 = 0x20;
pub(crate) const CMD_I2C_ADDRESS: u8 = 0x24;
pub(crate) const CMD_BAUD_RATE: u8 = 0x26;
pub(crate) const CMD_LED_USAGE: u8 = 0x30;
pub(crate) const CMD_TERMINATOR: u8 = 0x10;

// The sensor needs at least this long to complete a sweep
pub(crate) const MIN_SCAN_TIME_MS: i32 = 15;
pub(crate) const MAX_SCAN_TIME_MS: i32 = 32767;
pub(crate) const MIN_I2C_ADDRESS: i32 = 2;
pub(crate) const MAX_I2C_ADDRESS: i32 = 127;
pub(crate) const MIN_BAUD_RATE: i32 = 1200;
pub(crate) const MAX_BAUD_RATE: i32 = 1_000_000;

pub(crate) const SERIAL_TIMEOUT_MS: u64 = 1000;

/// Factory I2C address of the sensor.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x45;
/// Factory serial baud rate of the sensor.
pub const DEFAULT_BAUD_RATE: u32 = 9600;
/// Scan time the sensor uses after power up, in milliseconds.
pub const DEFAULT_SCAN_TIME_MS: i32 = 30;
/// Time the sensor needs after power up before it answers requests.
pub const BOOT_DELAY_MS: u64 = 500;
