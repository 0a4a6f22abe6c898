//! Fixed-width integers at caller-chosen offsets.
//!
//! # Widths
//!
//! `i16`, `u16`, `i32`, `u32`, `i64` and `u64` are read and written as their native types. There
//! is no native 24-bit integer, so 24-bit values are carried in a `u32`: reads always return a
//! value with the upper 8 bits clear, and writes only store the low 24 bits of the value given.
//!
//! # Offsets
//!
//! An integer of `W` bytes occupies the `W` consecutive positions starting at `offset`. Nothing
//! is prefixed or padded, and no bounds checks are added on top of the container's own: an
//! offset too close to the end of the container panics in the same way as indexing it would.
//!
//! # Byte order
//!
//! Every method has a form without an [Endian] argument, which is little-endian, and a `_with`
//! form that takes one explicitly.

use crate::{ByteList, ByteListMut, Endian};

macro_rules! get_methods {
    ($($get:ident, $get_with:ident, $type:ty;)*) => {
        $(
            #[doc = concat!("Reads a little-endian `", stringify!($type), "` starting at `offset`.")]
            #[inline]
            fn $get(&self, offset: usize) -> $type {
                self.$get_with(offset, Endian::Little)
            }

            #[doc = concat!("Reads a `", stringify!($type), "` starting at `offset` in the given byte order.")]
            #[inline]
            fn $get_with(&self, offset: usize, endian: Endian) -> $type {
                let bytes = self.array::<{ core::mem::size_of::<$type>() }>(offset);
                match endian {
                    Endian::Little => <$type>::from_le_bytes(bytes),
                    Endian::Big => <$type>::from_be_bytes(bytes),
                }
            }
        )*
    };
}

macro_rules! set_methods {
    ($($set:ident, $set_with:ident, $type:ty;)*) => {
        $(
            #[doc = concat!("Writes `value` as a little-endian `", stringify!($type), "` starting at `offset`.")]
            #[inline]
            fn $set(&mut self, offset: usize, value: $type) {
                self.$set_with(offset, value, Endian::Little)
            }

            #[doc = concat!("Writes `value` as a `", stringify!($type), "` starting at `offset` in the given byte order.")]
            #[inline]
            fn $set_with(&mut self, offset: usize, value: $type, endian: Endian) {
                let bytes = match endian {
                    Endian::Little => value.to_le_bytes(),
                    Endian::Big => value.to_be_bytes(),
                };
                self.put_array(offset, bytes);
            }
        )*
    };
}

/// Reads integers out of any [ByteList].
pub trait GetExt: ByteList {
    get_methods! {
        get_i16, get_i16_with, i16;
        get_u16, get_u16_with, u16;
        get_i32, get_i32_with, i32;
        get_u32, get_u32_with, u32;
        get_i64, get_i64_with, i64;
        get_u64, get_u64_with, u64;
    }

    /// Reads a little-endian unsigned 24-bit integer starting at `offset`.
    #[inline]
    fn get_u24(&self, offset: usize) -> u32 {
        self.get_u24_with(offset, Endian::Little)
    }

    /// Reads an unsigned 24-bit integer starting at `offset` in the given byte order.
    ///
    /// The upper 8 bits of the result are always zero.
    #[inline]
    fn get_u24_with(&self, offset: usize, endian: Endian) -> u32 {
        let [b0, b1, b2] = self.array::<3>(offset);
        endian.compose_u24(b0, b1, b2)
    }
}

impl<T: ByteList + ?Sized> GetExt for T {}

/// Writes integers into any [ByteListMut].
pub trait SetExt: ByteListMut {
    set_methods! {
        set_i16, set_i16_with, i16;
        set_u16, set_u16_with, u16;
        set_i32, set_i32_with, i32;
        set_u32, set_u32_with, u32;
        set_i64, set_i64_with, i64;
        set_u64, set_u64_with, u64;
    }

    /// Writes the low 24 bits of `value` as a little-endian integer starting at `offset`.
    #[inline]
    fn set_u24(&mut self, offset: usize, value: u32) {
        self.set_u24_with(offset, value, Endian::Little)
    }

    /// Writes the low 24 bits of `value` starting at `offset` in the given byte order.
    ///
    /// The upper 8 bits of `value` are ignored.
    #[inline]
    fn set_u24_with(&mut self, offset: usize, value: u32, endian: Endian) {
        self.put_array(offset, endian.decompose_u24(value));
    }
}

impl<T: ByteListMut + ?Sized> SetExt for T {}

macro_rules! load_methods {
    ($($load:ident, $load_with:ident, $get_with:ident, $type:ty;)*) => {
        $(
            #[doc = concat!("Reads a little-endian `", stringify!($type), "` from the start of the buffer.")]
            #[inline]
            fn $load(&self) -> $type {
                GetExt::$get_with(self, 0, Endian::Little)
            }

            #[doc = concat!("Reads a `", stringify!($type), "` from the start of the buffer in the given byte order.")]
            #[inline]
            fn $load_with(&self, endian: Endian) -> $type {
                GetExt::$get_with(self, 0, endian)
            }
        )*
    };
}

macro_rules! store_methods {
    ($($store:ident, $store_with:ident, $set_with:ident, $type:ty;)*) => {
        $(
            #[doc = concat!("Writes `value` as a little-endian `", stringify!($type), "` at the start of the buffer.")]
            #[inline]
            fn $store(&mut self, value: $type) {
                SetExt::$set_with(self, 0, value, Endian::Little)
            }

            #[doc = concat!("Writes `value` as a `", stringify!($type), "` at the start of the buffer in the given byte order.")]
            #[inline]
            fn $store_with(&mut self, value: $type, endian: Endian) {
                SetExt::$set_with(self, 0, value, endian)
            }
        )*
    };
}

/// Whole-buffer access for contiguous byte slices.
///
/// The buffer is expected to be exactly as long as the integer (or longer, in which case only
/// the leading bytes are used).
pub trait ContiguousExt: GetExt + SetExt {
    load_methods! {
        load_i16, load_i16_with, get_i16_with, i16;
        load_u16, load_u16_with, get_u16_with, u16;
        load_u24, load_u24_with, get_u24_with, u32;
        load_i32, load_i32_with, get_i32_with, i32;
        load_u32, load_u32_with, get_u32_with, u32;
        load_i64, load_i64_with, get_i64_with, i64;
        load_u64, load_u64_with, get_u64_with, u64;
    }

    store_methods! {
        store_i16, store_i16_with, set_i16_with, i16;
        store_u16, store_u16_with, set_u16_with, u16;
        store_u24, store_u24_with, set_u24_with, u32;
        store_i32, store_i32_with, set_i32_with, i32;
        store_u32, store_u32_with, set_u32_with, u32;
        store_i64, store_i64_with, set_i64_with, i64;
        store_u64, store_u64_with, set_u64_with, u64;
    }
}

impl ContiguousExt for [u8] {}
