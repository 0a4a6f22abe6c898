//! Conversions between `UInt24` and the built-in numeric types.
//!
//! Conversions that can never lose information are [From] implementations; every other
//! conversion is a [TryFrom] implementation failing with [Error::Overflow].

use crate::{Error, NumberKind, UInt24};

macro_rules! impl_from_narrow {
    ($($type:ty),*) => {
        $(
            impl From<$type> for UInt24 {
                #[inline]
                fn from(value: $type) -> Self {
                    Self::new_truncating(value as u32)
                }
            }
        )*
    };
}

impl_from_narrow!(u8, u16);

macro_rules! impl_try_from {
    ($($type:ty),*) => {
        $(
            impl TryFrom<$type> for UInt24 {
                type Error = Error;

                #[inline]
                fn try_from(value: $type) -> Result<Self, Error> {
                    Self::create_checked(value)
                }
            }
        )*
    };
}

impl_try_from!(u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! impl_into_wide {
    ($($type:ty),*) => {
        $(
            impl From<UInt24> for $type {
                #[inline]
                fn from(value: UInt24) -> Self {
                    value.get() as $type
                }
            }
        )*
    };
}

// `f32` has a 24-bit significand, so every value is exact.
impl_into_wide!(u32, u64, u128, i32, i64, i128, f32, f64);

macro_rules! impl_try_into_narrow {
    ($($variant:ident => $type:ty),*) => {
        $(
            impl TryFrom<UInt24> for $type {
                type Error = Error;

                #[inline]
                fn try_from(value: UInt24) -> Result<Self, Error> {
                    <$type>::try_from(value.get()).map_err(|_| Error::Overflow(NumberKind::$variant))
                }
            }
        )*
    };
}

impl_try_into_narrow!(U8 => u8, I8 => i8, U16 => u16, I16 => i16, Usize => usize, Isize => isize);
