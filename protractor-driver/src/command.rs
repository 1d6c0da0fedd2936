//! Command frames understood by the Protractor.
//!
//! Every frame has the shape `[opcode, parameters.., 0x10]`. Encoders for
//! settings return `None` when the parameter lies outside the range the sensor
//! accepts; such settings are never sent.

use crate::constants::{
    CMD_BAUD_RATE, CMD_I2C_ADDRESS, CMD_LED_USAGE, CMD_REQUEST_DATA, CMD_SCAN_TIME,
    CMD_TERMINATOR, MAX_BAUD_RATE, MAX_I2C_ADDRESS, MAX_SCAN_TIME_MS, MIN_BAUD_RATE,
    MIN_I2C_ADDRESS, MIN_SCAN_TIME_MS,
};
use crate::numeric::to_le_bytes;

/// Behaviour of the feedback LEDs on top of the sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LedMode {
    /// Follow the most visible object.
    ShowObject = 1,
    /// Follow the most open pathway.
    ShowPath = 2,
    /// All LEDs off, including the green status LED.
    Off = 3,
}

fn frame(opcode: u8, params: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(params.len() + 2);
    data.push(opcode);
    data.extend_from_slice(params);
    data.push(CMD_TERMINATOR);
    data
}

/// Asks the sensor to send `n_bytes` of scan data. Serial only.
pub(crate) fn request_data(n_bytes: u8) -> Vec<u8> {
    frame(CMD_REQUEST_DATA, &[n_bytes])
}

/// `0` disables continuous scanning, 1-14 ms is raised to the 15 ms minimum.
pub(crate) fn scan_time(milliseconds: i32) -> Option<Vec<u8>> {
    match milliseconds {
        ms if ms > 0 && ms < MIN_SCAN_TIME_MS => Some(frame(CMD_SCAN_TIME, &[MIN_SCAN_TIME_MS as u8])),
        0..=MAX_SCAN_TIME_MS => Some(frame(CMD_SCAN_TIME, &to_le_bytes(milliseconds, 2))),
        _ => None,
    }
}

pub(crate) fn i2c_address(address: i32) -> Option<Vec<u8>> {
    match address {
        MIN_I2C_ADDRESS..=MAX_I2C_ADDRESS => Some(frame(CMD_I2C_ADDRESS, &[address as u8])),
        _ => None,
    }
}

pub(crate) fn baud_rate(rate: i32) -> Option<Vec<u8>> {
    match rate {
        MIN_BAUD_RATE..=MAX_BAUD_RATE => Some(frame(CMD_BAUD_RATE, &to_le_bytes(rate, 3))),
        _ => None,
    }
}

pub(crate) fn led_usage(mode: LedMode) -> Vec<u8> {
    frame(CMD_LED_USAGE, &[mode as u8])
}
