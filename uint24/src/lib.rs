//! An unsigned 24-bit integer.
//!
//! # Overview
//!
//! [UInt24] behaves like the built-in unsigned integers, restricted to the range
//! `0..=16_777_215`. It is carried in a `u32` whose upper 8 bits are always zero, and every
//! operation preserves that.
//!
//! - Operators wrap modulo 2^24. `checked_*` methods return [Error::Overflow] instead and
//!   `saturating_*` methods clamp.
//! - Lossless conversions are [From] implementations; all others are [TryFrom].
//! - Conversions chosen at runtime go through [Number] and [NumberKind], with checked,
//!   saturating and truncating variants in each direction.
//! - Values serialize to exactly 3 bytes in either byte order, and can be read from and
//!   written to any `binprim_codec` container.
//!
//! # Example
//!
//! ```
//! use binprim_uint24::{Error, NumberKind, UInt24};
//!
//! let max: UInt24 = "16777215".parse().unwrap();
//! assert_eq!(max, UInt24::MAX);
//! assert_eq!(max + UInt24::ONE, UInt24::ZERO);
//! assert_eq!(max.checked_add(UInt24::ONE), Err(Error::Overflow(NumberKind::UInt24)));
//!
//! assert_eq!(UInt24::create_saturating(-5i32), UInt24::ZERO);
//! assert_eq!(UInt24::create_truncating(-1i32), UInt24::MAX);
//! assert_eq!(UInt24::try_read_big_endian(&[0x12, 0x34, 0x56], true).unwrap().get(), 0x123456);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod codec;
pub use codec::{BufMutUInt24Ext, BufUInt24Ext, GetUInt24Ext, SetUInt24Ext};
mod convert;
mod error;
pub use error::Error;
mod fmt;
mod number;
pub use number::{Number, NumberKind, Primitive};
mod ops;
mod uint24;
pub use uint24::UInt24;
