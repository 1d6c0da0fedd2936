pub mod angle;
pub mod buffer;
pub mod scan;

pub use angle::raw_to_degrees;
pub use buffer::{response_length, ScanBuffer, BUFFER_SIZE, MAX_OBJECTS};
pub use scan::{Reading, Scan};
