use thiserror::Error;

/// Errors that can occur when manipulating bits.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("bit index {index} out of range for {bits}-bit value")]
    BitIndexOutOfRange { index: u32, bits: u32 },
    #[error("invalid bit range: end ({end}) is before start ({start})")]
    InvalidBitRange { start: u32, end: u32 },
}
