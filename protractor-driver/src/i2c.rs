use crate::error::ProtractorError;
use crate::transport::{Transport, TransportKind};
use embedded_hal::i2c::{I2c, SevenBitAddress};

/// Connection to a Protractor at a fixed address on an I2C bus.
///
/// Opening does not touch the bus. A sensor that does not answer shows up as
/// [`ProtractorError::DeviceUnavailable`] on the first transaction.
pub struct RegisterChannel<I> {
    bus: I,
    address: SevenBitAddress,
}

pub fn open_register_channel<I: I2c>(bus: I, address: SevenBitAddress) -> RegisterChannel<I> {
    RegisterChannel { bus, address }
}

impl<I> RegisterChannel<I> {
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Releases the bus.
    pub fn into_bus(self) -> I {
        self.bus
    }
}

impl<I: I2c> Transport for RegisterChannel<I> {
    fn kind(&self) -> TransportKind {
        TransportKind::Register
    }

    fn write(&mut self, data: &[u8]) -> Result<(), ProtractorError> {
        self.bus
            .write(self.address, data)
            .map_err(ProtractorError::from_i2c)
    }

    fn read_byte(&mut self) -> Result<u8, ProtractorError> {
        let mut byte = [0u8; 1];
        self.bus
            .read(self.address, &mut byte)
            .map_err(ProtractorError::from_i2c)?;
        Ok(byte[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::FakeBus;

    #[test]
    fn test_write_targets_address() {
        let mut channel = open_register_channel(FakeBus::new(0x45), 0x45);
        channel.write(&[0x30, 0x01, 0x10]).unwrap();
        assert_eq!(channel.address(), 0x45);

        let bus = channel.into_bus();
        assert_eq!(bus.written, vec![vec![0x30, 0x01, 0x10]]);
    }

    #[test]
    fn test_read_byte() {
        let mut bus = FakeBus::new(0x45);
        bus.respond(&[0x10, 0x80]);
        let mut channel = open_register_channel(bus, 0x45);
        assert_eq!(channel.kind(), TransportKind::Register);
        assert_eq!(channel.read_byte().unwrap(), 0x10);
        assert_eq!(channel.read_byte().unwrap(), 0x80);
        assert_eq!(channel.into_bus().n_reads, 2);
    }

    #[test]
    fn test_wrong_address_is_unavailable() {
        let mut channel = open_register_channel(FakeBus::new(0x45), 0x1C);
        assert!(matches!(
            channel.read_byte(),
            Err(ProtractorError::DeviceUnavailable)
        ));
        assert!(matches!(
            channel.write(&[0x30, 0x03, 0x10]),
            Err(ProtractorError::DeviceUnavailable)
        ));
    }
}
