//! The `UInt24` value type and its arithmetic.

use crate::{Error, NumberKind};
use core::{any::Any, cmp::Ordering};

/// Mask selecting the 24 value bits of the carrier.
pub(crate) const MASK: u32 = 0x00FF_FFFF;

/// An unsigned 24-bit integer.
///
/// The value is carried in a `u32` whose upper 8 bits are always zero. Operators wrap modulo
/// 2^24, exactly as the built-in unsigned integers wrap modulo their own width when overflow
/// checks are disabled. Use the `checked_*` forms to detect overflow and the `saturating_*`
/// forms to clamp.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct UInt24(u32);

impl UInt24 {
    /// The smallest value, 0.
    pub const MIN: Self = Self(0);
    /// The largest value, 16,777,215.
    pub const MAX: Self = Self(MASK);
    /// The additive identity.
    pub const ZERO: Self = Self(0);
    /// The multiplicative identity.
    pub const ONE: Self = Self(1);
    /// Number of value bits.
    pub const BITS: u32 = 24;
    /// Number of bytes in the serialized form.
    pub const BYTES: usize = 3;
    /// Radix of the representation.
    pub const RADIX: u32 = 2;

    /// Creates a value, failing with [Error::Overflow] if `value` does not fit in 24 bits.
    #[inline]
    pub const fn new(value: u32) -> Result<Self, Error> {
        if value > MASK {
            return Err(Error::Overflow(NumberKind::UInt24));
        }
        Ok(Self(value))
    }

    /// Creates a value from the low 24 bits of `value`.
    #[inline]
    pub const fn new_truncating(value: u32) -> Self {
        Self(value & MASK)
    }

    /// Creates a value, clamping anything above [UInt24::MAX].
    #[inline]
    pub const fn new_saturating(value: u32) -> Self {
        if value > MASK {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the value as a `u32`.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0) & MASK)
    }

    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0) & MASK)
    }

    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0) & MASK)
    }

    /// Divides, truncating toward zero.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub const fn wrapping_div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub const fn wrapping_rem(self, rhs: Self) -> Self {
        Self(self.0 % rhs.0)
    }

    /// Two's complement negation within 24 bits.
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg() & MASK)
    }

    /// Adds one, wrapping [UInt24::MAX] to zero.
    #[inline]
    pub const fn increment(self) -> Self {
        self.wrapping_add(Self::ONE)
    }

    /// Subtracts one, wrapping zero to [UInt24::MAX].
    #[inline]
    pub const fn decrement(self) -> Self {
        self.wrapping_sub(Self::ONE)
    }

    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Result<Self, Error> {
        Self::new(self.0 + rhs.0)
    }

    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Result<Self, Error> {
        match self.0.checked_sub(rhs.0) {
            Some(difference) => Ok(Self(difference)),
            None => Err(Error::Overflow(NumberKind::UInt24)),
        }
    }

    #[inline]
    pub const fn checked_mul(self, rhs: Self) -> Result<Self, Error> {
        let product = self.0 as u64 * rhs.0 as u64;
        if product > MASK as u64 {
            return Err(Error::Overflow(NumberKind::UInt24));
        }
        Ok(Self(product as u32))
    }

    /// Divides, failing with [Error::DivisionByZero] instead of panicking.
    #[inline]
    pub const fn checked_div(self, rhs: Self) -> Result<Self, Error> {
        if rhs.0 == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(self.0 / rhs.0))
    }

    #[inline]
    pub const fn checked_rem(self, rhs: Self) -> Result<Self, Error> {
        if rhs.0 == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(self.0 % rhs.0))
    }

    /// Negates, which only succeeds for zero.
    #[inline]
    pub const fn checked_neg(self) -> Result<Self, Error> {
        if self.0 != 0 {
            return Err(Error::Overflow(NumberKind::UInt24));
        }
        Ok(self)
    }

    #[inline]
    pub const fn checked_increment(self) -> Result<Self, Error> {
        self.checked_add(Self::ONE)
    }

    #[inline]
    pub const fn checked_decrement(self) -> Result<Self, Error> {
        self.checked_sub(Self::ONE)
    }

    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self::new_saturating(self.0 + rhs.0)
    }

    #[inline]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    #[inline]
    pub const fn saturating_mul(self, rhs: Self) -> Self {
        match self.checked_mul(rhs) {
            Ok(product) => product,
            Err(_) => Self::MAX,
        }
    }

    /// Rotates the 24 value bits left by `n`.
    ///
    /// `n` may be negative or larger than 24; it is reduced modulo 24 first, so a negative
    /// amount rotates right.
    #[inline]
    pub const fn rotate_left(self, n: i32) -> Self {
        let n = n.rem_euclid(24) as u32;
        Self(((self.0 << n) | (self.0 >> (24 - n))) & MASK)
    }

    /// Rotates the 24 value bits right by `n`.
    ///
    /// `n` may be negative or larger than 24; it is reduced modulo 24 first, so a negative
    /// amount rotates left.
    #[inline]
    pub const fn rotate_right(self, n: i32) -> Self {
        let n = n.rem_euclid(24) as u32;
        Self(((self.0 >> n) | (self.0 << (24 - n))) & MASK)
    }

    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn count_zeros(self) -> u32 {
        Self::BITS - self.0.count_ones()
    }

    /// Number of leading zero bits within the 24-bit field (24 for zero).
    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        self.0.leading_zeros() - 8
    }

    /// Number of trailing zero bits within the 24-bit field (24 for zero).
    #[inline]
    pub const fn trailing_zeros(self) -> u32 {
        let count = self.0.trailing_zeros();
        if count > Self::BITS {
            Self::BITS
        } else {
            count
        }
    }

    /// Floor of the base-2 logarithm, with `log2(0) == 0`.
    #[inline]
    pub const fn log2(self) -> u32 {
        if self.0 == 0 {
            return 0;
        }
        31 - self.0.leading_zeros()
    }

    #[inline]
    pub const fn is_power_of_two(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Minimum number of bits needed to represent the value (0 for zero).
    #[inline]
    pub const fn shortest_bit_length(self) -> u32 {
        32 - self.0.leading_zeros()
    }

    /// Number of bytes written by [UInt24::try_write_little_endian] and friends.
    #[inline]
    pub const fn byte_count(self) -> usize {
        Self::BYTES
    }

    /// Compares against a value of unknown type.
    ///
    /// `None` sorts before every value. Anything other than a `UInt24` is rejected with
    /// [Error::TypeMismatch].
    pub fn compare_any(&self, other: Option<&dyn Any>) -> Result<Ordering, Error> {
        let Some(other) = other else {
            return Ok(Ordering::Greater);
        };
        match other.downcast_ref::<Self>() {
            Some(other) => Ok(self.cmp(other)),
            None => Err(Error::TypeMismatch),
        }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Always true: every value is non-negative.
    #[inline]
    pub const fn is_positive(self) -> bool {
        true
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        false
    }

    #[inline]
    pub const fn is_even_integer(self) -> bool {
        self.0 & 1 == 0
    }

    #[inline]
    pub const fn is_odd_integer(self) -> bool {
        self.0 & 1 != 0
    }

    /// True for every nonzero value.
    #[inline]
    pub const fn is_normal(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn is_canonical(self) -> bool {
        true
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        true
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        true
    }

    #[inline]
    pub const fn is_real_number(self) -> bool {
        true
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        false
    }

    #[inline]
    pub const fn is_infinity(self) -> bool {
        false
    }

    #[inline]
    pub const fn is_positive_infinity(self) -> bool {
        false
    }

    #[inline]
    pub const fn is_negative_infinity(self) -> bool {
        false
    }

    #[inline]
    pub const fn is_complex_number(self) -> bool {
        false
    }

    #[inline]
    pub const fn is_imaginary_number(self) -> bool {
        false
    }

    #[inline]
    pub const fn is_subnormal(self) -> bool {
        false
    }

    /// Returns 0 for zero and 1 otherwise.
    #[inline]
    pub const fn sign(self) -> i32 {
        if self.0 == 0 {
            0
        } else {
            1
        }
    }

    #[inline]
    pub const fn abs(self) -> Self {
        self
    }

    /// The larger of the two values (magnitude and value coincide for unsigned integers).
    #[inline]
    pub fn max_magnitude(self, other: Self) -> Self {
        self.max(other)
    }

    /// The smaller of the two values (magnitude and value coincide for unsigned integers).
    #[inline]
    pub fn min_magnitude(self, other: Self) -> Self {
        self.min(other)
    }
}

impl core::iter::Sum for UInt24 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::wrapping_add)
    }
}

impl core::iter::Product for UInt24 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Self::wrapping_mul)
    }
}

impl<'a> core::iter::Sum<&'a UInt24> for UInt24 {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
