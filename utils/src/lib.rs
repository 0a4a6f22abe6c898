//! Bit manipulation, flag detection, and byte-order aware I/O.
//!
//! # Example
//!
//! ```rust
//! use binprim_codec::Endian;
//! use binprim_utils::{io::{ReadBytesExt, WriteBytesExt}, BitRange, Bits, Flags};
//! use std::io::Cursor;
//!
//! // Decode a status byte.
//! let status = 0b1010_0110u8;
//! assert!(status.get_bit(7).unwrap());
//! assert_eq!(status.get_bits(1, 3).unwrap(), 0b011);
//!
//! // Recover the flags of an 8-bit addition.
//! let sum = 0x7Fu8.wrapping_add(0x01);
//! assert!(sum.did_addition_overflow(0x7F, 0x01));
//! assert!(sum.did_addition_half_carry(0x7F, 0x01));
//!
//! // Stream fixed-width values.
//! let mut out = Vec::new();
//! out.write_u32_with(0xCAFE_F00D, Endian::Big).unwrap();
//! assert_eq!(out, [0xCA, 0xFE, 0xF0, 0x0D]);
//! assert_eq!(Cursor::new(out).read_u32_with(Endian::Big).unwrap(), 0xCAFE_F00D);
//! ```

mod bits;
pub use bits::{to_bit_char, BitRange, Bits, ByteExt};
mod error;
pub use error::Error;
mod flags;
pub use flags::Flags;
pub mod io;
