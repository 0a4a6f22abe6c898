//! Bit-level access to the built-in integers.
//!
//! Bit indexes count from the least significant bit (index 0). Every index is validated
//! against the width of the type and reported as [Error::BitIndexOutOfRange] instead of
//! silently wrapping.

use crate::Error;

#[inline]
fn check_index(index: u32, bits: u32) -> Result<u32, Error> {
    if index >= bits {
        return Err(Error::BitIndexOutOfRange { index, bits });
    }
    Ok(index)
}

/// Validates an inclusive bit range, returning its start and width.
#[inline]
fn check_range(start: u32, end: u32, bits: u32) -> Result<(u32, u32), Error> {
    check_index(start, bits)?;
    check_index(end, bits)?;
    if end < start {
        return Err(Error::InvalidBitRange { start, end });
    }
    Ok((start, end - start + 1))
}

/// Returns `'1'` for `true` and `'0'` for `false`.
#[inline]
pub const fn to_bit_char(bit: bool) -> char {
    (b'0' + bit as u8) as char
}

/// Single bit access.
pub trait Bits: Copy {
    /// Width of the type in bits.
    const BITS: u32;

    /// Returns whether the bit at `index` is set.
    fn get_bit(self, index: u32) -> Result<bool, Error>;

    /// Returns a copy with the bit at `index` set.
    fn set_bit(self, index: u32) -> Result<Self, Error>;

    /// Returns a copy with the bit at `index` cleared.
    fn reset_bit(self, index: u32) -> Result<Self, Error>;

    /// Returns the most significant bit, which is the sign for two's complement values.
    fn sign_bit(self) -> bool;

    #[inline]
    fn left_most_bit(self) -> bool {
        self.sign_bit()
    }

    fn right_most_bit(self) -> bool;

    /// Formats the value as `0b` followed by every bit, most significant first.
    fn to_binary_string(self) -> String;
}

/// Access to inclusive ranges of bits.
pub trait BitRange: Bits {
    /// Returns bits `start..=end`, shifted down so that `start` becomes bit 0.
    fn get_bits(self, start: u32, end: u32) -> Result<Self, Error>;

    /// Replaces bits `start..=end` with the low bits of `bits`, leaving the rest untouched.
    fn set_bits(self, bits: Self, start: u32, end: u32) -> Result<Self, Error>;
}

macro_rules! impl_bits {
    ($($type:ty => $unsigned:ty),*) => {
        $(
            impl Bits for $type {
                const BITS: u32 = <$type>::BITS;

                #[inline]
                fn get_bit(self, index: u32) -> Result<bool, Error> {
                    let index = check_index(index, Self::BITS)?;
                    Ok(((self as $unsigned) >> index) & 1 == 1)
                }

                #[inline]
                fn set_bit(self, index: u32) -> Result<Self, Error> {
                    let index = check_index(index, Self::BITS)?;
                    Ok(((self as $unsigned) | (1 << index)) as $type)
                }

                #[inline]
                fn reset_bit(self, index: u32) -> Result<Self, Error> {
                    let index = check_index(index, Self::BITS)?;
                    Ok(((self as $unsigned) & !(1 << index)) as $type)
                }

                #[inline]
                fn sign_bit(self) -> bool {
                    (self as $unsigned) >> (Self::BITS - 1) == 1
                }

                #[inline]
                fn right_most_bit(self) -> bool {
                    (self as $unsigned) & 1 == 1
                }

                fn to_binary_string(self) -> String {
                    format!("0b{:0width$b}", self as $unsigned, width = Self::BITS as usize)
                }
            }

            impl BitRange for $type {
                #[inline]
                fn get_bits(self, start: u32, end: u32) -> Result<Self, Error> {
                    let (start, width) = check_range(start, end, Self::BITS)?;
                    let ones = <$unsigned>::MAX >> (Self::BITS - width);
                    Ok((((self as $unsigned) >> start) & ones) as $type)
                }

                #[inline]
                fn set_bits(self, bits: Self, start: u32, end: u32) -> Result<Self, Error> {
                    let (start, width) = check_range(start, end, Self::BITS)?;
                    let ones = <$unsigned>::MAX >> (Self::BITS - width);
                    let preserved = (self as $unsigned) & !(ones << start);
                    Ok((preserved | (((bits as $unsigned) & ones) << start)) as $type)
                }
            }
        )*
    };
}

impl_bits!(u8 => u8, u16 => u16, u32 => u32, u64 => u64, i32 => u32, i64 => u64);

/// Helpers that only make sense for a single byte.
pub trait ByteExt: Copy {
    /// Returns bits 4 to 7, shifted down.
    fn high_nibble(self) -> u8;

    /// Returns bits 0 to 3.
    fn low_nibble(self) -> u8;

    /// Replaces bits 4 to 7 with the low nibble of `nibble`.
    fn set_high_nibble(self, nibble: u8) -> u8;

    /// Replaces bits 0 to 3 with the low nibble of `nibble`.
    fn set_low_nibble(self, nibble: u8) -> u8;

    /// Returns true when an even number of bits are set.
    fn parity(self) -> bool;

    /// Takes the bits selected by `mask` from `source` and the rest from `self`.
    fn copy_bits_from(self, source: u8, mask: u8) -> u8;
}

impl ByteExt for u8 {
    #[inline]
    fn high_nibble(self) -> u8 {
        self >> 4
    }

    #[inline]
    fn low_nibble(self) -> u8 {
        self & 0x0F
    }

    #[inline]
    fn set_high_nibble(self, nibble: u8) -> u8 {
        (self & 0x0F) | (nibble << 4)
    }

    #[inline]
    fn set_low_nibble(self, nibble: u8) -> u8 {
        (self & 0xF0) | (nibble & 0x0F)
    }

    #[inline]
    fn parity(self) -> bool {
        self.count_ones() % 2 == 0
    }

    #[inline]
    fn copy_bits_from(self, source: u8, mask: u8) -> u8 {
        (source & mask) | (self & !mask)
    }
}
