use crate::constants::SERIAL_TIMEOUT_MS;
use crate::error::ProtractorError;
use crate::transport::{Transport, TransportKind};
use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

/// Serial connection to a Protractor.
pub struct StreamChannel {
    port: Box<dyn SerialPort>,
}

impl StreamChannel {
    /// Wraps an already configured port.
    pub fn from_port(port: Box<dyn SerialPort>) -> StreamChannel {
        StreamChannel { port }
    }

    pub fn port(&self) -> &dyn SerialPort {
        self.port.as_ref()
    }
}

fn port_exists(port_name: &str) -> bool {
    let listed = serialport::available_ports()
        .map(|ports| ports.iter().any(|p| p.port_name == port_name))
        .unwrap_or(false);
    // pseudo terminals and some USB adapters are not enumerated
    listed || Path::new(port_name).exists()
}

/// Opens `port_name` with the framing the Protractor expects:
/// 8 data bits, no parity, one stop bit, no flow control and one second
/// timeouts.
pub fn open_stream_channel(
    port_name: &str,
    baud_rate: u32,
) -> Result<StreamChannel, ProtractorError> {
    if !port_exists(port_name) {
        return Err(ProtractorError::PortNotFound(port_name.to_string()));
    }
    let maybe_port = serialport::new(port_name, baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(Duration::from_millis(SERIAL_TIMEOUT_MS))
        .open();

    match maybe_port {
        Ok(port) => Ok(StreamChannel::from_port(port)),
        Err(e) => {
            log::error!("Failed to open \"{}\". Error: {}", port_name, e);
            Err(ProtractorError::DeviceUnavailable)
        }
    }
}

impl Transport for StreamChannel {
    fn kind(&self) -> TransportKind {
        TransportKind::Stream
    }

    fn write(&mut self, data: &[u8]) -> Result<(), ProtractorError> {
        self.port
            .write_all(data)
            .and_then(|_| self.port.flush())
            .map_err(ProtractorError::from_write)
    }

    fn read_byte(&mut self) -> Result<u8, ProtractorError> {
        let mut byte = [0u8; 1];
        self.port.read_exact(&mut byte)?;
        Ok(byte[0])
    }

    fn discard_input(&mut self) -> Result<(), ProtractorError> {
        let n_read = self.port.bytes_to_read().unwrap_or(0);
        if n_read > 0 {
            log::warn!("Discarding {} stale bytes", n_read);
        }
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::sleep_ms;
    use serialport::TTYPort;

    fn channel_pair() -> (TTYPort, StreamChannel) {
        let (master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let slave_ptr = Box::new(slave) as Box<dyn SerialPort>;
        (master, StreamChannel::from_port(slave_ptr))
    }

    #[test]
    fn test_write() {
        let (mut master, mut channel) = channel_pair();
        channel.write(&[0x30, 0x02, 0x10]).unwrap();

        sleep_ms(10);

        let mut buf = [0u8; 3];
        master.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [0x30, 0x02, 0x10]);
    }

    #[test]
    fn test_read_byte() {
        let (mut master, mut channel) = channel_pair();
        master.write_all(&[0x21, 0x32]).unwrap();

        sleep_ms(10);

        assert_eq!(channel.read_byte().unwrap(), 0x21);
        assert_eq!(channel.read_byte().unwrap(), 0x32);
    }

    #[test]
    fn test_read_byte_timeout() {
        let (_master, mut channel) = channel_pair();
        assert!(matches!(
            channel.read_byte(),
            Err(ProtractorError::ReadTimeout)
        ));
    }

    #[test]
    fn test_open_missing_port() {
        let result = open_stream_channel("/dev/protractor-does-not-exist", 9600);
        assert!(matches!(result, Err(ProtractorError::PortNotFound(name))
            if name == "/dev/protractor-does-not-exist"));
    }

    #[test]
    fn test_open_existing_port() {
        let (_master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let name = slave.name().unwrap();
        let channel = open_stream_channel(&name, 9600).unwrap();
        assert_eq!(channel.kind(), TransportKind::Stream);
        assert_eq!(
            channel.port().timeout(),
            Duration::from_millis(SERIAL_TIMEOUT_MS)
        );
    }

    #[test]
    fn test_discard_input() {
        let (mut master, mut channel) = channel_pair();
        master.write_all(&[0x50, 0x46, 0x00]).unwrap();

        sleep_ms(10);

        channel.discard_input().unwrap();
        master.write_all(&[0x21]).unwrap();

        sleep_ms(10);

        assert_eq!(channel.read_byte().unwrap(), 0x21);
    }

    #[test]
    fn test_open_port_that_is_not_a_tty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let name = file.path().to_str().unwrap();
        assert!(matches!(
            open_stream_channel(name, 9600),
            Err(ProtractorError::DeviceUnavailable)
        ));
    }
}
