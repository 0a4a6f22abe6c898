//! Processor-style status flags recovered from the result of an arithmetic operation.
//!
//! Each method is called on the (wrapped) result and given the operands that produced it.
//! The checks still hold when the operation included an incoming carry or borrow.

/// Overflow and half-carry detection.
pub trait Flags: Copy {
    /// Returns whether adding `left` and `right` as two's complement values overflowed.
    fn did_addition_overflow(self, left: Self, right: Self) -> bool;

    /// Returns whether subtracting `right` from `left` as two's complement values overflowed.
    fn did_subtraction_overflow(self, left: Self, right: Self) -> bool;

    /// Returns whether the addition carried into the half-carry bit (bit 4 for bytes and
    /// bit 12 for words).
    fn did_addition_half_carry(self, left: Self, right: Self) -> bool;

    /// Returns whether the subtraction borrowed from the half-carry bit.
    fn did_subtraction_half_borrow(self, left: Self, right: Self) -> bool;
}

macro_rules! impl_flags {
    ($($type:ty => $half:expr),*) => {
        $(
            impl Flags for $type {
                #[inline]
                fn did_addition_overflow(self, left: Self, right: Self) -> bool {
                    // Both operands share a sign that the result does not.
                    (self ^ left) & (self ^ right) & (1 << (<$type>::BITS - 1)) != 0
                }

                #[inline]
                fn did_subtraction_overflow(self, left: Self, right: Self) -> bool {
                    // Operands differ in sign and the result took the sign of `right`.
                    (left ^ right) & (self ^ left) & (1 << (<$type>::BITS - 1)) != 0
                }

                #[inline]
                fn did_addition_half_carry(self, left: Self, right: Self) -> bool {
                    (left ^ right ^ self) & $half != 0
                }

                #[inline]
                fn did_subtraction_half_borrow(self, left: Self, right: Self) -> bool {
                    (left ^ right ^ self) & $half != 0
                }
            }
        )*
    };
}

impl_flags!(u8 => 0x10, u16 => 0x1000);
