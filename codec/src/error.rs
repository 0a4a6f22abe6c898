//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("insufficient space: {needed} bytes needed, {available} available")]
    InsufficientSpace { needed: usize, available: usize },
}
