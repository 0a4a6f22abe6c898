//! Helpers for splitting and joining 16-bit words.

use crate::Endian;

/// Returns the most significant byte of `value`.
#[inline]
pub const fn msb(value: u16) -> u8 {
    (value >> 8) as u8
}

/// Returns the least significant byte of `value`.
#[inline]
pub const fn lsb(value: u16) -> u8 {
    value as u8
}

/// Splits `value` into `(msb, lsb)`.
#[inline]
pub const fn to_bytes(value: u16) -> (u8, u8) {
    (msb(value), lsb(value))
}

/// Joins a pair of bytes, given in memory order, into a word.
///
/// The pair produced by [to_bytes] is in big-endian memory order, so
/// `from_bytes(to_bytes(w), Endian::Big) == w`.
#[inline]
pub const fn from_bytes(bytes: (u8, u8), endian: Endian) -> u16 {
    endian.compose_u16(bytes.0, bytes.1)
}
