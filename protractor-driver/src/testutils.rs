use crate::constants::CMD_REQUEST_DATA;
use crate::error::ProtractorError;
use crate::transport::{Transport, TransportKind};
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use std::collections::VecDeque;
use std::io;

pub(crate) fn sleep_ms(duration: u64) {
    std::thread::sleep(std::time::Duration::from_millis(duration));
}

/// I2C bus with a single device that answers from a byte queue.
pub(crate) struct FakeBus {
    device_address: u8,
    responses: VecDeque<u8>,
    pub(crate) written: Vec<Vec<u8>>,
    pub(crate) n_reads: usize,
}

impl FakeBus {
    pub(crate) fn new(device_address: u8) -> FakeBus {
        FakeBus {
            device_address,
            responses: VecDeque::new(),
            written: Vec::new(),
            n_reads: 0,
        }
    }

    pub(crate) fn respond(&mut self, data: &[u8]) {
        self.responses.extend(data);
    }
}

impl ErrorType for FakeBus {
    type Error = ErrorKind;
}

impl I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.device_address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for operation in operations {
            match operation {
                Operation::Read(buf) => {
                    self.n_reads += 1;
                    for b in buf.iter_mut() {
                        *b = self.responses.pop_front().ok_or(ErrorKind::Other)?;
                    }
                }
                Operation::Write(data) => self.written.push(data.to_vec()),
            }
        }
        Ok(())
    }
}

/// Transport that records written frames and plays the device side.
///
/// `respond` puts bytes straight into the receive queue. `reply` queues a
/// response that only arrives once a data request frame has been written.
/// Reads from an empty queue time out, or fail with an I/O error when `broken`
/// is set.
pub(crate) struct FakeTransport {
    kind: TransportKind,
    input: VecDeque<u8>,
    replies: VecDeque<Vec<u8>>,
    pub(crate) written: Vec<Vec<u8>>,
    pub(crate) n_reads: usize,
    pub(crate) n_discarded: usize,
    pub(crate) broken: bool,
}

impl FakeTransport {
    pub(crate) fn new(kind: TransportKind) -> FakeTransport {
        FakeTransport {
            kind,
            input: VecDeque::new(),
            replies: VecDeque::new(),
            written: Vec::new(),
            n_reads: 0,
            n_discarded: 0,
            broken: false,
        }
    }

    pub(crate) fn respond(&mut self, data: &[u8]) {
        self.input.extend(data);
    }

    pub(crate) fn reply(&mut self, data: &[u8]) {
        self.replies.push_back(data.to_vec());
    }
}

impl Transport for FakeTransport {
    fn kind(&self) -> TransportKind {
        self.kind
    }

    fn write(&mut self, data: &[u8]) -> Result<(), ProtractorError> {
        self.written.push(data.to_vec());
        if data.first() == Some(&CMD_REQUEST_DATA) {
            if let Some(reply) = self.replies.pop_front() {
                self.input.extend(reply);
            }
        }
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, ProtractorError> {
        self.n_reads += 1;
        match self.input.pop_front() {
            Some(b) => Ok(b),
            None if self.broken => Err(ProtractorError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "disconnected",
            ))),
            None => Err(ProtractorError::ReadTimeout),
        }
    }

    fn discard_input(&mut self) -> Result<(), ProtractorError> {
        self.n_discarded += self.input.len();
        self.input.clear();
        Ok(())
    }
}
