//! Parsing and formatting.
//!
//! Text is parsed as a `u32` and then range checked, so a number that fits in 32 bits but not
//! in 24 fails with [Error::Overflow] rather than an invalid digit error. A well-formed negative
//! number is below the range too and also fails with [Error::Overflow], except for `-0`.

use crate::{Error, NumberKind, UInt24};
use core::{
    fmt,
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};

fn map_parse_error(err: ParseIntError) -> Error {
    match err.kind() {
        IntErrorKind::Empty => Error::Empty,
        IntErrorKind::PosOverflow => Error::Overflow(NumberKind::UInt24),
        _ => Error::InvalidDigit,
    }
}

impl UInt24 {
    /// Parses a number in the given radix.
    ///
    /// Like [u32::from_str_radix], an optional leading `+` is accepted and surrounding
    /// whitespace is not. A leading `-` followed by valid digits is [Error::Overflow] unless
    /// the digits are all zero.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in the range `2..=36`.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, Error> {
        if let Some(digits) = src.strip_prefix('-') {
            if digits.starts_with(['+', '-']) {
                return Err(Error::InvalidDigit);
            }
            return match u32::from_str_radix(digits, radix) {
                Ok(0) => Ok(Self::ZERO),
                Ok(_) => Err(Error::Overflow(NumberKind::UInt24)),
                Err(err) => match err.kind() {
                    IntErrorKind::Empty => Err(Error::InvalidDigit),
                    _ => Err(map_parse_error(err)),
                },
            };
        }
        let value = u32::from_str_radix(src, radix).map_err(map_parse_error)?;
        Self::new(value)
    }

    /// Parses decimal text given as UTF-8 bytes.
    pub fn parse_utf8(src: &[u8]) -> Result<Self, Error> {
        let src = core::str::from_utf8(src).map_err(|_| Error::InvalidDigit)?;
        src.parse()
    }

    /// Parses decimal text, returning `None` on any failure.
    pub fn try_parse(src: &str) -> Option<Self> {
        src.parse().ok()
    }
}

impl FromStr for UInt24 {
    type Err = Error;

    /// Parses decimal text, ignoring leading and trailing whitespace.
    fn from_str(src: &str) -> Result<Self, Error> {
        Self::from_str_radix(src.trim(), 10)
    }
}

macro_rules! impl_fmt {
    ($($trait:ident),*) => {
        $(
            impl fmt::$trait for UInt24 {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$trait::fmt(&self.get(), f)
                }
            }
        )*
    };
}

impl_fmt!(Display, Debug, LowerHex, UpperHex, Octal, Binary);
