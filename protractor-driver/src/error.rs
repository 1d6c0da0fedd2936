use std::io;

use embedded_hal::i2c;

#[derive(Debug, thiserror::Error)]
pub enum ProtractorError {
    /// No serial port with the given name exists.
    #[error("Serial port \"{0}\" not found")]
    PortNotFound(String),
    /// The channel exists but the sensor cannot be reached through it.
    #[error("Protractor unavailable. Check the wiring and the configured address.")]
    DeviceUnavailable,
    #[error("Timed out waiting for data from the Protractor")]
    ReadTimeout,
    #[error("Timed out sending a command to the Protractor")]
    WriteTimeout,
    /// I2C transaction failure other than a missing acknowledge.
    #[error("I2C bus error: {0:?}")]
    Bus(i2c::ErrorKind),
    #[error(transparent)]
    Serial(#[from] serialport::Error),
    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for ProtractorError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => ProtractorError::ReadTimeout,
            _ => ProtractorError::Io(err),
        }
    }
}

impl ProtractorError {
    /// Same as the `io::Error` conversion, but attributes timeouts to the
    /// write direction.
    pub(crate) fn from_write(err: io::Error) -> Self {
        match ProtractorError::from(err) {
            ProtractorError::ReadTimeout => ProtractorError::WriteTimeout,
            other => other,
        }
    }

    pub(crate) fn from_i2c<E: i2c::Error>(err: E) -> Self {
        match err.kind() {
            i2c::ErrorKind::NoAcknowledge(_) => ProtractorError::DeviceUnavailable,
            kind => ProtractorError::Bus(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err = ProtractorError::from(io::Error::new(io::ErrorKind::TimedOut, "timeout"));
        assert!(matches!(err, ProtractorError::ReadTimeout));

        let err = ProtractorError::from_write(io::Error::new(io::ErrorKind::TimedOut, "timeout"));
        assert!(matches!(err, ProtractorError::WriteTimeout));

        let err = ProtractorError::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(matches!(err, ProtractorError::Io(_)));
    }

    #[test]
    fn test_i2c_error_conversion() {
        let err = ProtractorError::from_i2c(i2c::ErrorKind::NoAcknowledge(
            i2c::NoAcknowledgeSource::Address,
        ));
        assert!(matches!(err, ProtractorError::DeviceUnavailable));

        let err = ProtractorError::from_i2c(i2c::ErrorKind::ArbitrationLoss);
        assert!(matches!(
            err,
            ProtractorError::Bus(i2c::ErrorKind::ArbitrationLoss)
        ));
    }

    #[test]
    fn test_display() {
        let err = ProtractorError::PortNotFound("/dev/ttyUSB9".to_string());
        assert_eq!(err.to_string(), "Serial port \"/dev/ttyUSB9\" not found");
    }
}
