//! Error types for `UInt24` operations.

use crate::NumberKind;
use thiserror::Error;

/// Error type for `UInt24` operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("value is outside the range of {0}")]
    Overflow(NumberKind),
    #[error("division by zero")]
    DivisionByZero,
    #[error("object must be of type UInt24")]
    TypeMismatch,
    #[error("conversion to {0} is not supported")]
    NotSupported(NumberKind),
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
    #[error("codec error: {0}")]
    Codec(#[from] binprim_codec::Error),
}
