//! Byte serialization of `UInt24` and access through byte containers.

use crate::{Error, UInt24};
use binprim_codec::{BufExt, BufMutExt, ByteList, ByteListMut, Endian, GetExt, SetExt};
use bytes::{Buf, BufMut};

impl UInt24 {
    /// Returns the 3-byte little-endian representation.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 3] {
        Endian::Little.decompose_u24(self.get())
    }

    /// Returns the 3-byte big-endian representation.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 3] {
        Endian::Big.decompose_u24(self.get())
    }

    /// Returns the 3-byte representation in the given byte order.
    #[inline]
    pub const fn to_bytes(self, endian: Endian) -> [u8; 3] {
        endian.decompose_u24(self.get())
    }

    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes, Endian::Little)
    }

    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes, Endian::Big)
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; 3], endian: Endian) -> Self {
        Self::new_truncating(endian.compose_u24(bytes[0], bytes[1], bytes[2]))
    }

    /// Writes the 3-byte big-endian representation to the front of `destination`.
    ///
    /// Returns the number of bytes written, or `None` (writing nothing) if `destination` is
    /// shorter than 3 bytes.
    pub fn try_write_big_endian(self, destination: &mut [u8]) -> Option<usize> {
        let slot = destination.get_mut(..Self::BYTES)?;
        slot.copy_from_slice(&self.to_be_bytes());
        Some(Self::BYTES)
    }

    /// Writes the 3-byte little-endian representation to the front of `destination`.
    ///
    /// Returns the number of bytes written, or `None` (writing nothing) if `destination` is
    /// shorter than 3 bytes.
    pub fn try_write_little_endian(self, destination: &mut [u8]) -> Option<usize> {
        let slot = destination.get_mut(..Self::BYTES)?;
        slot.copy_from_slice(&self.to_le_bytes());
        Some(Self::BYTES)
    }

    /// Reads a big-endian integer of any length.
    ///
    /// Sources shorter than 3 bytes are zero-extended. Longer sources are accepted only if the
    /// extra leading bytes are all zero. If `is_unsigned` is false, the source is treated as
    /// two's complement and rejected when its first byte has the sign bit set. An empty source
    /// is rejected.
    pub fn try_read_big_endian(source: &[u8], is_unsigned: bool) -> Option<Self> {
        let first = *source.first()?;
        if !is_unsigned && first & 0x80 != 0 {
            return None;
        }
        let split = source.len().saturating_sub(Self::BYTES);
        let (extra, value) = source.split_at(split);
        if extra.iter().any(|byte| *byte != 0) {
            return None;
        }
        let value = value
            .iter()
            .fold(0u32, |acc, byte| (acc << 8) | *byte as u32);
        Some(Self::new_truncating(value))
    }

    /// Reads a little-endian integer of any length.
    ///
    /// Sources shorter than 3 bytes are zero-extended. Longer sources are accepted only if the
    /// extra trailing bytes are all zero. If `is_unsigned` is false, the source is treated as
    /// two's complement and rejected when its last byte has the sign bit set. An empty source
    /// is rejected.
    pub fn try_read_little_endian(source: &[u8], is_unsigned: bool) -> Option<Self> {
        let last = *source.last()?;
        if !is_unsigned && last & 0x80 != 0 {
            return None;
        }
        let split = source.len().min(Self::BYTES);
        let (value, extra) = source.split_at(split);
        if extra.iter().any(|byte| *byte != 0) {
            return None;
        }
        let value = value
            .iter()
            .rev()
            .fold(0u32, |acc, byte| (acc << 8) | *byte as u32);
        Some(Self::new_truncating(value))
    }
}

/// Reads `UInt24` values out of any [ByteList].
pub trait GetUInt24Ext: ByteList {
    /// Reads a little-endian value starting at `offset`.
    #[inline]
    fn get_uint24(&self, offset: usize) -> UInt24 {
        self.get_uint24_with(offset, Endian::Little)
    }

    /// Reads a value starting at `offset` in the given byte order.
    #[inline]
    fn get_uint24_with(&self, offset: usize, endian: Endian) -> UInt24 {
        UInt24::new_truncating(self.get_u24_with(offset, endian))
    }
}

impl<T: ByteList + ?Sized> GetUInt24Ext for T {}

/// Writes `UInt24` values into any [ByteListMut].
pub trait SetUInt24Ext: ByteListMut {
    /// Writes `value` in little-endian order starting at `offset`.
    #[inline]
    fn set_uint24(&mut self, offset: usize, value: UInt24) {
        self.set_uint24_with(offset, value, Endian::Little)
    }

    /// Writes `value` starting at `offset` in the given byte order.
    #[inline]
    fn set_uint24_with(&mut self, offset: usize, value: UInt24, endian: Endian) {
        self.set_u24_with(offset, value.get(), endian)
    }
}

impl<T: ByteListMut + ?Sized> SetUInt24Ext for T {}

/// Sequential `UInt24` reads for any [Buf].
pub trait BufUInt24Ext: Buf {
    /// Reads a value in the given byte order and advances past it.
    ///
    /// Returns [Error::Codec] if fewer than 3 bytes remain.
    #[inline]
    fn read_uint24_with(&mut self, endian: Endian) -> Result<UInt24, Error> {
        let value = self.read_u24_with(endian)?;
        Ok(UInt24::new_truncating(value))
    }
}

impl<B: Buf + ?Sized> BufUInt24Ext for B {}

/// Sequential `UInt24` writes for any [BufMut].
pub trait BufMutUInt24Ext: BufMut {
    /// Appends `value` in the given byte order.
    #[inline]
    fn put_uint24_with(&mut self, value: UInt24, endian: Endian) {
        self.put_u24_with(value.get(), endian)
    }
}

impl<B: BufMut + ?Sized> BufMutUInt24Ext for B {}
