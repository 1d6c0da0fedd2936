//! Driver for the Protractor angle and proximity sensor.
//!
//! The Protractor sweeps 180° and reports up to four objects, ranked from most
//! to least visible, and up to four open pathways, ranked from most to least
//! open. It can be reached over I2C ([`Protractor::new_i2c`]) or a serial port
//! ([`Protractor::new_serial`]).
//!
//! ```no_run
//! use protractor_driver::Protractor;
//!
//! let mut protractor = Protractor::new_serial("/dev/ttyUSB0", 9600)?;
//! if protractor.read()? {
//!     for i in 0..protractor.object_count() as i32 {
//!         println!("{} degrees", protractor.object_angle_at(i));
//!     }
//! }
//! # Ok::<(), protractor_driver::ProtractorError>(())
//! ```

mod command;
mod constants;
mod error;
mod i2c;
mod numeric;
mod serial;
#[cfg(test)]
mod testutils;
mod transport;

use crate::numeric::to_string;
use embedded_hal::i2c::{I2c, SevenBitAddress};
use log::{debug, warn};
use protractor_data::{response_length, Reading, Scan, ScanBuffer, MAX_OBJECTS};

pub use crate::command::LedMode;
pub use crate::constants::{
    BOOT_DELAY_MS, DEFAULT_BAUD_RATE, DEFAULT_I2C_ADDRESS, DEFAULT_SCAN_TIME_MS,
};
pub use crate::error::ProtractorError;
pub use crate::i2c::{open_register_channel, RegisterChannel};
pub use crate::serial::{open_stream_channel, StreamChannel};
pub use crate::transport::{Transport, TransportKind};

/// Returned by the angle and visibility accessors when the requested entry
/// was not reported by the last scan.
pub const NO_READING: i32 = -1;

/// A Protractor attached through one [`Transport`].
///
/// Readings are decoded from the raw response on every call, nothing is
/// cached between [`read`](Protractor::read) calls.
pub struct Protractor<T> {
    transport: T,
    kind: TransportKind,
    buffer: ScanBuffer,
    requested: u8,
    fast_mode: bool,
}

impl<I: I2c> Protractor<RegisterChannel<I>> {
    /// Talks to the sensor at `address` on `bus`.
    ///
    /// `fast_mode` is reserved. It is recorded but the bus speed is left as
    /// configured by the caller.
    pub fn new_i2c(bus: I, address: SevenBitAddress, fast_mode: bool) -> Self {
        if fast_mode {
            debug!("I2C fast mode requested, bus speed left unchanged");
        }
        Protractor {
            fast_mode,
            ..Protractor::new(open_register_channel(bus, address))
        }
    }
}

impl Protractor<StreamChannel> {
    /// Opens the serial port `port_name` at `baud_rate`.
    pub fn new_serial(port_name: &str, baud_rate: u32) -> Result<Self, ProtractorError> {
        let channel = open_stream_channel(port_name, baud_rate)?;
        Ok(Protractor::new(channel))
    }
}

impl<T: Transport> Protractor<T> {
    pub fn new(transport: T) -> Self {
        let kind = transport.kind();
        Protractor {
            transport,
            kind,
            buffer: ScanBuffer::new(),
            requested: 0,
            fast_mode: false,
        }
    }

    /// Fetches all objects and paths. See [`read_objects`](Protractor::read_objects).
    pub fn read(&mut self) -> Result<bool, ProtractorError> {
        self.read_objects(MAX_OBJECTS)
    }

    /// Fetches the `requested` most visible objects and most open paths.
    /// Requests above four are clamped.
    ///
    /// Returns `Ok(true)` when at least one byte arrived. The response length
    /// is not validated. Any failed byte read, timeouts included, ends the call
    /// with that error; there are no retries.
    pub fn read_objects(&mut self, requested: u8) -> Result<bool, ProtractorError> {
        let requested = requested.min(MAX_OBJECTS);
        let n_bytes = response_length(requested);
        self.requested = requested;
        self.buffer.clear();

        if self.kind == TransportKind::Stream {
            // bytes left over from a response that arrived after its timeout
            self.transport.discard_input()?;
            self.send(&command::request_data(n_bytes as u8))?;
        }

        for _ in 0..n_bytes {
            let byte = self.transport.read_byte()?;
            self.buffer.push(byte);
        }
        debug!("Received {}", to_string(self.buffer.as_bytes()));
        Ok(!self.buffer.is_empty())
    }

    /// Number of objects in view as reported by the sensor (high nibble of
    /// the count byte).
    pub fn object_count(&self) -> u8 {
        self.buffer.object_count()
    }

    /// Number of open paths in view (low nibble of the count byte).
    pub fn path_count(&self) -> u8 {
        self.buffer.path_count()
    }

    fn object_at(&self, index: i32) -> Option<Reading> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.buffer.object(i))
    }

    fn path_at(&self, index: i32) -> Option<Reading> {
        usize::try_from(index).ok().and_then(|i| self.buffer.path(i))
    }

    /// Angle in degrees of the most visible object.
    pub fn object_angle(&self) -> i32 {
        self.object_angle_at(0)
    }

    /// Angle in degrees of the `index`-th most visible object, or
    /// [`NO_READING`].
    pub fn object_angle_at(&self, index: i32) -> i32 {
        self.object_at(index)
            .map_or(NO_READING, |r| r.angle.into())
    }

    pub fn object_visibility(&self) -> i32 {
        self.object_visibility_at(0)
    }

    /// Visibility (0-255) of the `index`-th most visible object, or
    /// [`NO_READING`].
    pub fn object_visibility_at(&self, index: i32) -> i32 {
        self.object_at(index)
            .map_or(NO_READING, |r| r.visibility.into())
    }

    /// Angle in degrees of the most open path.
    pub fn path_angle(&self) -> i32 {
        self.path_angle_at(0)
    }

    pub fn path_angle_at(&self, index: i32) -> i32 {
        self.path_at(index).map_or(NO_READING, |r| r.angle.into())
    }

    pub fn path_visibility(&self) -> i32 {
        self.path_visibility_at(0)
    }

    pub fn path_visibility_at(&self, index: i32) -> i32 {
        self.path_at(index)
            .map_or(NO_READING, |r| r.visibility.into())
    }

    /// Decoded copy of the last response.
    pub fn scan(&self) -> Scan {
        self.buffer.to_scan()
    }

    /// Raw bytes of the last response.
    pub fn buffer(&self) -> &ScanBuffer {
        &self.buffer
    }

    /// Entry count asked for by the last read.
    pub fn requested_objects(&self) -> u8 {
        self.requested
    }

    pub fn fast_mode(&self) -> bool {
        self.fast_mode
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    fn send(&mut self, frame: &[u8]) -> Result<(), ProtractorError> {
        debug!("Sending {}", to_string(frame));
        self.transport.write(frame)
    }

    // Out of range settings are dropped without touching the sensor.
    fn send_setting(&mut self, frame: Option<Vec<u8>>, what: &str) -> Result<(), ProtractorError> {
        match frame {
            Some(frame) => self.send(&frame),
            None => {
                warn!("Ignoring out of range {}", what);
                Ok(())
            }
        }
    }

    /// Sets the time the sensor takes for one sweep, in milliseconds.
    ///
    /// `0` stops continuous scanning so that a scan only happens on request.
    /// Values from 1 to 14 are raised to the 15 ms minimum. Values outside
    /// 0-32767 are ignored. The setting is lost when the sensor reboots.
    pub fn set_scan_time(&mut self, milliseconds: i32) -> Result<(), ProtractorError> {
        let frame = command::scan_time(milliseconds);
        self.send_setting(frame, &format!("scan time {} ms", milliseconds))
    }

    /// Changes the I2C address, 2 to 127, effective after the next reboot.
    /// Other values are ignored.
    pub fn set_i2c_address(&mut self, address: i32) -> Result<(), ProtractorError> {
        let frame = command::i2c_address(address);
        self.send_setting(frame, &format!("I2C address {}", address))
    }

    /// Changes the serial baud rate, 1200 to 1000000, effective after the next
    /// reboot. Other values are ignored.
    pub fn set_serial_baud_rate(&mut self, rate: i32) -> Result<(), ProtractorError> {
        let frame = command::baud_rate(rate);
        self.send_setting(frame, &format!("baud rate {}", rate))
    }

    pub fn set_led_mode(&mut self, mode: LedMode) -> Result<(), ProtractorError> {
        self.send(&command::led_usage(mode))
    }

    /// Feedback LEDs follow the most visible object.
    pub fn led_show_object(&mut self) -> Result<(), ProtractorError> {
        self.set_led_mode(LedMode::ShowObject)
    }

    /// Feedback LEDs follow the most open path.
    pub fn led_show_path(&mut self) -> Result<(), ProtractorError> {
        self.set_led_mode(LedMode::ShowPath)
    }

    /// Turns the feedback LEDs off, the green status LED included.
    pub fn led_off(&mut self) -> Result<(), ProtractorError> {
        self.set_led_mode(LedMode::Off)
    }
}
