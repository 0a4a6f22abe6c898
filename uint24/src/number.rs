//! Conversions between `UInt24` and every other numeric type, chosen at runtime.
//!
//! [Number] is a tagged value of any supported numeric type and [NumberKind] names one of
//! those types. Each direction of conversion comes in three flavours:
//!
//! - _checked_: fails with [Error::Overflow] if the value does not fit the destination.
//! - _saturating_: clamps to the destination's range. `NaN` saturates to zero.
//! - _truncating_: keeps the low bits of the two's complement representation, like `as`.
//!
//! Converting out of a `UInt24` is only defined for integer destinations; asking for a
//! floating-point destination fails with [Error::NotSupported].

use crate::{uint24::MASK, Error, UInt24};
use core::fmt;

/// Identifies one of the numeric types a [Number] can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    F32,
    F64,
    UInt24,
}

impl NumberKind {
    /// Name of the type, as written in Rust.
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::UInt24 => "UInt24",
        }
    }

    /// Returns `true` for every kind except `F32` and `F64`.
    pub const fn is_integer(self) -> bool {
        !matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value of any supported numeric type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    F32(f32),
    F64(f64),
    UInt24(UInt24),
}

mod private {
    pub trait Sealed {}
}

/// A Rust numeric type that can be stored in a [Number].
pub trait Primitive: Copy + Into<Number> + private::Sealed {
    /// The kind of [Number] that holds this type.
    const KIND: NumberKind;

    /// Extracts the value if `number` holds this type.
    fn from_number(number: Number) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($($variant:ident => $type:ty),* $(,)?) => {
        $(
            impl private::Sealed for $type {}

            impl Primitive for $type {
                const KIND: NumberKind = NumberKind::$variant;

                #[inline]
                fn from_number(number: Number) -> Option<Self> {
                    match number {
                        Number::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }

            impl From<$type> for Number {
                #[inline]
                fn from(value: $type) -> Self {
                    Number::$variant(value)
                }
            }
        )*

        impl Number {
            /// Returns the kind of value held.
            pub const fn kind(&self) -> NumberKind {
                match self {
                    $(Number::$variant(_) => NumberKind::$variant,)*
                }
            }
        }
    };
}

impl_primitive! {
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    U128 => u128,
    Usize => usize,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    I128 => i128,
    Isize => isize,
    F32 => f32,
    F64 => f64,
    UInt24 => UInt24,
}

// Applies `$int` to the value of every integer variant and `$float` to every floating-point
// variant (widened to `f64`, which holds every `f32` exactly).
macro_rules! dispatch {
    ($number:expr, |$v:ident| $int:expr, |$f:ident| $float:expr, |$u:ident| $same:expr) => {
        match $number {
            Number::U8($v) => $int,
            Number::U16($v) => $int,
            Number::U32($v) => $int,
            Number::U64($v) => $int,
            Number::U128($v) => $int,
            Number::Usize($v) => $int,
            Number::I8($v) => $int,
            Number::I16($v) => $int,
            Number::I32($v) => $int,
            Number::I64($v) => $int,
            Number::I128($v) => $int,
            Number::Isize($v) => $int,
            Number::F32($f) => {
                let $f = $f as f64;
                $float
            }
            Number::F64($f) => $float,
            Number::UInt24($u) => $same,
        }
    };
}

/// One past [UInt24::MAX], the smallest float that no longer fits.
const LIMIT: f64 = 16_777_216.0;

impl UInt24 {
    /// Converts any [Number], failing with [Error::Overflow] if it is negative, `NaN`,
    /// infinite, or larger than [UInt24::MAX].
    ///
    /// Floating-point values are truncated toward zero before the range check, so `-0.5`
    /// converts to zero.
    pub fn create_checked(value: impl Into<Number>) -> Result<Self, Error> {
        let value: Number = value.into();
        let overflow = Error::Overflow(NumberKind::UInt24);
        dispatch!(
            value,
            |v| u32::try_from(v)
                .ok()
                .and_then(|v| Self::new(v).ok())
                .ok_or(overflow),
            |f| {
                if f > -1.0 && f < LIMIT {
                    Ok(Self::new_truncating(f as u32))
                } else {
                    Err(overflow)
                }
            },
            |u| Ok(u)
        )
    }

    /// Converts any [Number], clamping it to `[0, MAX]`. `NaN` converts to zero.
    pub fn create_saturating(value: impl Into<Number>) -> Self {
        let value: Number = value.into();
        dispatch!(
            value,
            |v| i128::try_from(v).map_or(Self::MAX, |v| {
                Self::new_truncating(v.clamp(0, MASK as i128) as u32)
            }),
            |f| {
                if f.is_nan() || f < 0.0 {
                    Self::ZERO
                } else if f >= MASK as f64 {
                    Self::MAX
                } else {
                    Self::new_truncating(f as u32)
                }
            },
            |u| u
        )
    }

    /// Converts any [Number], keeping the low 24 bits of its two's complement representation.
    ///
    /// Floating-point values are first converted to a `u32` with `as`, which truncates toward
    /// zero and saturates at the bounds of `u32` (`NaN` becomes zero), and then masked. So a
    /// negative float gives zero and a float above `u32::MAX` gives [UInt24::MAX].
    pub fn create_truncating(value: impl Into<Number>) -> Self {
        let value: Number = value.into();
        dispatch!(
            value,
            |v| Self::new_truncating(v as u32),
            |f| Self::new_truncating(f as u32),
            |u| u
        )
    }

    /// Converts into the `T` kind of [Number], see [UInt24::convert_to_checked].
    pub fn to_checked<T: Primitive>(self) -> Result<T, Error> {
        Self::unwrap_kind(self.convert_to_checked(T::KIND)?)
    }

    /// Converts into the `T` kind of [Number], see [UInt24::convert_to_saturating].
    pub fn to_saturating<T: Primitive>(self) -> Result<T, Error> {
        Self::unwrap_kind(self.convert_to_saturating(T::KIND)?)
    }

    /// Converts into the `T` kind of [Number], see [UInt24::convert_to_truncating].
    pub fn to_truncating<T: Primitive>(self) -> Result<T, Error> {
        Self::unwrap_kind(self.convert_to_truncating(T::KIND)?)
    }

    fn unwrap_kind<T: Primitive>(number: Number) -> Result<T, Error> {
        T::from_number(number).ok_or(Error::NotSupported(T::KIND))
    }
}

macro_rules! impl_convert_to {
    ($($variant:ident => $type:ty),* $(,)?) => {
        impl UInt24 {
            /// Converts into the given kind, failing with [Error::Overflow] if the value does
            /// not fit and [Error::NotSupported] for floating-point kinds.
            pub fn convert_to_checked(self, kind: NumberKind) -> Result<Number, Error> {
                match kind {
                    $(
                        NumberKind::$variant => <$type>::try_from(self.get())
                            .map(Number::$variant)
                            .map_err(|_| Error::Overflow(kind)),
                    )*
                    NumberKind::UInt24 => Ok(Number::UInt24(self)),
                    NumberKind::F32 | NumberKind::F64 => Err(Error::NotSupported(kind)),
                }
            }

            /// Converts into the given kind, clamping to its maximum. Fails with
            /// [Error::NotSupported] for floating-point kinds.
            pub fn convert_to_saturating(self, kind: NumberKind) -> Result<Number, Error> {
                match kind {
                    $(
                        NumberKind::$variant => Ok(Number::$variant(
                            <$type>::try_from(self.get()).unwrap_or(<$type>::MAX),
                        )),
                    )*
                    NumberKind::UInt24 => Ok(Number::UInt24(self)),
                    NumberKind::F32 | NumberKind::F64 => Err(Error::NotSupported(kind)),
                }
            }

            /// Converts into the given kind, keeping only the bits that fit. Fails with
            /// [Error::NotSupported] for floating-point kinds.
            pub fn convert_to_truncating(self, kind: NumberKind) -> Result<Number, Error> {
                match kind {
                    $(
                        NumberKind::$variant => Ok(Number::$variant(self.get() as $type)),
                    )*
                    NumberKind::UInt24 => Ok(Number::UInt24(self)),
                    NumberKind::F32 | NumberKind::F64 => Err(Error::NotSupported(kind)),
                }
            }
        }
    };
}

impl_convert_to! {
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    U128 => u128,
    Usize => usize,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    I128 => i128,
    Isize => isize,
}
