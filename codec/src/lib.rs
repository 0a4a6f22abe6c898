//! Read and write fixed-width integers in byte containers.
//!
//! # Overview
//!
//! Binary formats (file headers, wire protocols, emulator memory images) store multi-byte
//! integers at known offsets with a known byte order. This crate reads and writes 16-, 24-, 32-
//! and 64-bit integers at caller-chosen offsets in any byte container, in either byte order,
//! without any intermediate allocation.
//!
//! # Containers
//!
//! Anything implementing [ByteList] can be read from and anything implementing [ByteListMut] can
//! be written to. Implementations are provided for `[u8]`, `[u8; N]`, `Vec<u8>`, `VecDeque<u8>`,
//! [bytes::Bytes] and [bytes::BytesMut]. Contiguous containers copy whole runs of bytes; other
//! containers are visited one index at a time. Both produce identical results.
//!
//! # Byte order
//!
//! Methods without an [Endian] argument are little-endian. Every method has a `_with` form that
//! takes the byte order explicitly.
//!
//! # Example
//!
//! ```
//! use binprim_codec::{Endian, GetExt, SetExt};
//!
//! let mut header = vec![0u8; 8];
//! header.set_u32_with(0, 0x7F454C46, Endian::Big);
//! header.set_u24(4, 0x123456);
//!
//! assert_eq!(&header[..4], b"\x7FELF");
//! assert_eq!(header.get_u24(4), 0x123456);
//! assert_eq!(header.get_u16_with(5, Endian::Big), 0x3412);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod buf;
pub use buf::{wrapped, BufExt, BufMutExt};
pub mod endian;
pub use endian::Endian;
pub mod error;
pub use error::Error;
pub mod list;
pub use list::{copy_to, copy_to_at, ByteList, ByteListMut};
pub mod primitives;
pub use primitives::{ContiguousExt, GetExt, SetExt};
pub mod word;
