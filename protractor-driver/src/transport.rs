use crate::error::ProtractorError;

/// How a channel delimits responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    /// Addressed bus. Every read is a bus transaction, no request frame is needed.
    Register,
    /// Byte stream without message boundaries. The sensor only answers after
    /// a data request frame.
    Stream,
}

/// Byte level access to one Protractor.
pub trait Transport {
    fn kind(&self) -> TransportKind;

    /// Sends `data` in full, blocking up to the channel's write timeout.
    fn write(&mut self, data: &[u8]) -> Result<(), ProtractorError>;

    /// Receives exactly one byte, blocking up to the channel's read timeout.
    fn read_byte(&mut self) -> Result<u8, ProtractorError>;

    /// Drops bytes received but not read yet. Channels without a receive
    /// queue have nothing to drop.
    fn discard_input(&mut self) -> Result<(), ProtractorError> {
        Ok(())
    }
}
