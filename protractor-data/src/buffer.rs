use crate::angle::raw_to_degrees;
use crate::scan::{Reading, Scan};

/// Maximum number of objects (and paths) the sensor reports per scan.
pub const MAX_OBJECTS: u8 = 4;
/// Size of a full response: the count byte followed by four bytes per entry.
pub const BUFFER_SIZE: usize = response_length(MAX_OBJECTS);

const ENTRY_SIZE: usize = 4;
const OBJECT_ANGLE_OFFSET: usize = 1;
const OBJECT_VISIBILITY_OFFSET: usize = 2;
const PATH_ANGLE_OFFSET: usize = 3;
const PATH_VISIBILITY_OFFSET: usize = 4;

/// Number of response bytes for `requested` objects and paths.
/// Requests above [`MAX_OBJECTS`] are clamped.
pub const fn response_length(requested: u8) -> usize {
    let requested = if requested > MAX_OBJECTS {
        MAX_OBJECTS
    } else {
        requested
    };
    1 + ENTRY_SIZE * requested as usize
}

/// Raw response bytes as received from the sensor.
///
/// Byte 0 packs the object count (high nibble) and the path count (low
/// nibble). Entry `i` occupies bytes `1 + 4i ..= 4 + 4i`: object angle, object
/// visibility, path angle, path visibility.
///
/// Nothing is decoded ahead of time. Every accessor reads the raw bytes, and an
/// entry is only reported when the bytes backing it were actually received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanBuffer {
    bytes: [u8; BUFFER_SIZE],
    len: usize,
}

impl ScanBuffer {
    pub fn new() -> ScanBuffer {
        ScanBuffer::default()
    }

    /// Builds a buffer from already received bytes. Bytes past
    /// [`BUFFER_SIZE`] are ignored.
    pub fn from_bytes(data: &[u8]) -> ScanBuffer {
        let mut buffer = ScanBuffer::new();
        data.iter().for_each(|&b| {
            buffer.push(b);
        });
        buffer
    }

    /// Discards the previous response.
    pub fn clear(&mut self) {
        self.bytes = [0; BUFFER_SIZE];
        self.len = 0;
    }

    /// Appends a received byte. Returns `false` when the buffer is already full.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.len >= BUFFER_SIZE {
            return false;
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        true
    }

    /// Number of bytes received for the current response.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of objects reported by the sensor (high nibble of the count byte).
    pub fn object_count(&self) -> u8 {
        self.bytes[0] >> 4
    }

    /// Number of paths reported by the sensor (low nibble of the count byte).
    pub fn path_count(&self) -> u8 {
        self.bytes[0] & 0x0F
    }

    /// Number of complete entries present in the buffer.
    fn entries_received(&self) -> usize {
        self.len.saturating_sub(1) / ENTRY_SIZE
    }

    fn entry(&self, index: usize, count: u8, angle_offset: usize, visibility_offset: usize) -> Option<Reading> {
        if index >= count as usize || index >= self.entries_received() {
            return None;
        }
        let base = ENTRY_SIZE * index;
        Some(Reading {
            angle: raw_to_degrees(self.bytes[base + angle_offset]),
            visibility: self.bytes[base + visibility_offset],
        })
    }

    /// The `index`-th most visible object, if it was reported and received.
    pub fn object(&self, index: usize) -> Option<Reading> {
        self.entry(
            index,
            self.object_count(),
            OBJECT_ANGLE_OFFSET,
            OBJECT_VISIBILITY_OFFSET,
        )
    }

    /// The `index`-th most open path, if it was reported and received.
    pub fn path(&self, index: usize) -> Option<Reading> {
        self.entry(
            index,
            self.path_count(),
            PATH_ANGLE_OFFSET,
            PATH_VISIBILITY_OFFSET,
        )
    }

    pub fn objects(&self) -> impl Iterator<Item = Reading> + '_ {
        (0..MAX_OBJECTS as usize).map_while(|i| self.object(i))
    }

    pub fn paths(&self) -> impl Iterator<Item = Reading> + '_ {
        (0..MAX_OBJECTS as usize).map_while(|i| self.path(i))
    }

    pub fn to_scan(&self) -> Scan {
        Scan {
            objects: self.objects().collect(),
            paths: self.paths().collect(),
        }
    }
}
