//! Sequential reads and writes with a runtime byte order.
//!
//! [bytes::Buf] and [bytes::BufMut] pick the byte order by method name (`get_u32` vs
//! `get_u32_le`). These extensions take an [Endian] instead and add 24-bit support. Appending
//! to a `Vec<u8>` or [bytes::BytesMut] goes through [BufMutExt].

use crate::{Endian, Error};
use bytes::{buf::Chain, Buf, BufMut, Bytes};

/// Returns [Error::EndOfBuffer] if `buf` holds fewer than `len` bytes.
#[inline]
fn at_least<B: Buf + ?Sized>(buf: &B, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

macro_rules! read_methods {
    ($($read_with:ident, $type:ty, $get_le:ident, $get_be:ident;)*) => {
        $(
            #[doc = concat!("Reads a `", stringify!($type), "` in the given byte order and advances past it.")]
            ///
            /// Returns [Error::EndOfBuffer], without consuming anything, if too few bytes remain.
            #[inline]
            fn $read_with(&mut self, endian: Endian) -> Result<$type, Error> {
                at_least(self, core::mem::size_of::<$type>())?;
                Ok(match endian {
                    Endian::Little => self.$get_le(),
                    Endian::Big => self.$get_be(),
                })
            }
        )*
    };
}

macro_rules! put_methods {
    ($($put_with:ident, $type:ty, $put_le:ident, $put_be:ident;)*) => {
        $(
            #[doc = concat!("Appends `value` as a `", stringify!($type), "` in the given byte order.")]
            #[inline]
            fn $put_with(&mut self, value: $type, endian: Endian) {
                match endian {
                    Endian::Little => self.$put_le(value),
                    Endian::Big => self.$put_be(value),
                }
            }
        )*
    };
}

/// Endian-parameterised reads for any [Buf].
pub trait BufExt: Buf {
    read_methods! {
        read_i16_with, i16, get_i16_le, get_i16;
        read_u16_with, u16, get_u16_le, get_u16;
        read_i32_with, i32, get_i32_le, get_i32;
        read_u32_with, u32, get_u32_le, get_u32;
        read_i64_with, i64, get_i64_le, get_i64;
        read_u64_with, u64, get_u64_le, get_u64;
    }

    /// Reads an unsigned 24-bit integer in the given byte order and advances past it.
    ///
    /// The upper 8 bits of the result are always zero.
    #[inline]
    fn read_u24_with(&mut self, endian: Endian) -> Result<u32, Error> {
        at_least(self, 3)?;
        let value = match endian {
            Endian::Little => self.get_uint_le(3),
            Endian::Big => self.get_uint(3),
        };
        Ok(value as u32)
    }
}

impl<B: Buf + ?Sized> BufExt for B {}

/// Endian-parameterised writes for any [BufMut].
pub trait BufMutExt: BufMut {
    put_methods! {
        put_i16_with, i16, put_i16_le, put_i16;
        put_u16_with, u16, put_u16_le, put_u16;
        put_i32_with, i32, put_i32_le, put_i32;
        put_u32_with, u32, put_u32_le, put_u32;
        put_i64_with, i64, put_i64_le, put_i64;
        put_u64_with, u64, put_u64_le, put_u64;
    }

    /// Appends the low 24 bits of `value` in the given byte order.
    #[inline]
    fn put_u24_with(&mut self, value: u32, endian: Endian) {
        self.put_slice(&endian.decompose_u24(value));
    }
}

impl<B: BufMut + ?Sized> BufMutExt for B {}

/// Returns a reader over `bytes[start..]` followed by all of `bytes`.
///
/// Reading a ring buffer from `start` therefore yields every byte once before wrapping around
/// to `start` again. Neither half is copied.
///
/// # Panics
///
/// Panics if `start > bytes.len()`.
pub fn wrapped(bytes: &Bytes, start: usize) -> Chain<Bytes, Bytes> {
    bytes.slice(start..).chain(bytes.clone())
}
