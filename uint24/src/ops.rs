//! Operator implementations for `UInt24`.
//!
//! Arithmetic operators wrap modulo 2^24 and division by zero panics, matching the built-in
//! unsigned integers with overflow checks disabled. Shift amounts are reduced modulo 32, the
//! width of the carrier, before shifting.

use crate::{uint24::MASK, UInt24};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

macro_rules! impl_binary {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:expr;)*) => {
        $(
            impl $trait for UInt24 {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    $op(self, rhs)
                }
            }

            impl $assign_trait for UInt24 {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = $op(*self, rhs);
                }
            }
        )*
    };
}

impl_binary! {
    Add, add, AddAssign, add_assign, UInt24::wrapping_add;
    Sub, sub, SubAssign, sub_assign, UInt24::wrapping_sub;
    Mul, mul, MulAssign, mul_assign, UInt24::wrapping_mul;
    Div, div, DivAssign, div_assign, UInt24::wrapping_div;
    Rem, rem, RemAssign, rem_assign, UInt24::wrapping_rem;
    BitAnd, bitand, BitAndAssign, bitand_assign, |a: UInt24, b: UInt24| UInt24::new_truncating(a.get() & b.get());
    BitOr, bitor, BitOrAssign, bitor_assign, |a: UInt24, b: UInt24| UInt24::new_truncating(a.get() | b.get());
    BitXor, bitxor, BitXorAssign, bitxor_assign, |a: UInt24, b: UInt24| UInt24::new_truncating(a.get() ^ b.get());
}

impl Neg for UInt24 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl Not for UInt24 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::new_truncating(!self.get() & MASK)
    }
}

impl Shl<u32> for UInt24 {
    type Output = Self;

    #[inline]
    fn shl(self, rhs: u32) -> Self {
        Self::new_truncating(self.get().wrapping_shl(rhs))
    }
}

impl Shr<u32> for UInt24 {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: u32) -> Self {
        Self::new_truncating(self.get().wrapping_shr(rhs))
    }
}

impl ShlAssign<u32> for UInt24 {
    #[inline]
    fn shl_assign(&mut self, rhs: u32) {
        *self = *self << rhs;
    }
}

impl ShrAssign<u32> for UInt24 {
    #[inline]
    fn shr_assign(&mut self, rhs: u32) {
        *self = *self >> rhs;
    }
}
