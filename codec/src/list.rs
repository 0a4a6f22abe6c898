//! Byte containers that integers can be read from and written to.
//!
//! A container is anything that can hand out (and optionally overwrite) the byte at a given
//! index. Contiguous containers (slices, arrays, `Vec<u8>`, [bytes::Bytes], [bytes::BytesMut])
//! copy whole runs of bytes at once, while other containers (like [VecDeque]) fall back to
//! visiting one index at a time.
//!
//! Indexing follows the container's own rules: an index past the end panics exactly as it would
//! when indexing the container directly.

use crate::Error;
use alloc::{collections::VecDeque, vec::Vec};
use bytes::{Bytes, BytesMut};

/// A read-only, indexable sequence of bytes.
pub trait ByteList {
    /// Number of bytes in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the byte at `index`.
    ///
    /// Panics if `index` is out of bounds.
    fn byte(&self, index: usize) -> u8;

    /// Returns the `N` bytes starting at `offset`.
    ///
    /// Panics if any of them are out of bounds.
    #[inline]
    fn array<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut out = [0u8; N];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.byte(offset + i);
        }
        out
    }
}

/// An indexable sequence of bytes whose contents can be overwritten in place.
pub trait ByteListMut: ByteList {
    /// Overwrites the byte at `index`.
    ///
    /// Panics if `index` is out of bounds.
    fn set_byte(&mut self, index: usize, value: u8);

    /// Overwrites the `N` bytes starting at `offset`.
    ///
    /// Panics if any of them are out of bounds.
    #[inline]
    fn put_array<const N: usize>(&mut self, offset: usize, bytes: [u8; N]) {
        for (i, byte) in bytes.into_iter().enumerate() {
            self.set_byte(offset + i, byte);
        }
    }
}

impl ByteList for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self[index]
    }

    #[inline]
    fn array<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self[offset..offset + N]);
        out
    }
}

impl ByteListMut for [u8] {
    #[inline]
    fn set_byte(&mut self, index: usize, value: u8) {
        self[index] = value;
    }

    #[inline]
    fn put_array<const N: usize>(&mut self, offset: usize, bytes: [u8; N]) {
        self[offset..offset + N].copy_from_slice(&bytes);
    }
}

// Containers that dereference to a contiguous slice delegate to the slice implementation.
macro_rules! impl_contiguous {
    ($type:ty $(, const $n:ident)?) => {
        impl$(<const $n: usize>)? ByteList for $type {
            #[inline]
            fn len(&self) -> usize {
                self[..].len()
            }

            #[inline]
            fn byte(&self, index: usize) -> u8 {
                self[index]
            }

            #[inline]
            fn array<const N: usize>(&self, offset: usize) -> [u8; N] {
                ByteList::array(&self[..], offset)
            }
        }
    };
}

macro_rules! impl_contiguous_mut {
    ($type:ty $(, const $n:ident)?) => {
        impl$(<const $n: usize>)? ByteListMut for $type {
            #[inline]
            fn set_byte(&mut self, index: usize, value: u8) {
                self[index] = value;
            }

            #[inline]
            fn put_array<const N: usize>(&mut self, offset: usize, bytes: [u8; N]) {
                ByteListMut::put_array(&mut self[..], offset, bytes)
            }
        }
    };
}

impl_contiguous!([u8; M], const M);
impl_contiguous_mut!([u8; M], const M);
impl_contiguous!(Vec<u8>);
impl_contiguous_mut!(Vec<u8>);
impl_contiguous!(Bytes);
impl_contiguous!(BytesMut);
impl_contiguous_mut!(BytesMut);

impl ByteList for VecDeque<u8> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn byte(&self, index: usize) -> u8 {
        self[index]
    }
}

impl ByteListMut for VecDeque<u8> {
    #[inline]
    fn set_byte(&mut self, index: usize, value: u8) {
        self[index] = value;
    }
}

impl<T: ByteList + ?Sized> ByteList for &T {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn byte(&self, index: usize) -> u8 {
        (**self).byte(index)
    }

    #[inline]
    fn array<const N: usize>(&self, offset: usize) -> [u8; N] {
        (**self).array(offset)
    }
}

impl<T: ByteList + ?Sized> ByteList for &mut T {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn byte(&self, index: usize) -> u8 {
        (**self).byte(index)
    }

    #[inline]
    fn array<const N: usize>(&self, offset: usize) -> [u8; N] {
        (**self).array(offset)
    }
}

impl<T: ByteListMut + ?Sized> ByteListMut for &mut T {
    #[inline]
    fn set_byte(&mut self, index: usize, value: u8) {
        (**self).set_byte(index, value)
    }

    #[inline]
    fn put_array<const N: usize>(&mut self, offset: usize, bytes: [u8; N]) {
        (**self).put_array(offset, bytes)
    }
}

/// Copies every byte of `source` into the front of `destination`.
///
/// Returns [Error::InsufficientSpace] if `destination` is shorter than `source`.
pub fn copy_to<L: ByteList + ?Sized>(source: &L, destination: &mut [u8]) -> Result<(), Error> {
    let needed = source.len();
    if needed > destination.len() {
        return Err(Error::InsufficientSpace {
            needed,
            available: destination.len(),
        });
    }
    for (index, slot) in destination[..needed].iter_mut().enumerate() {
        *slot = source.byte(index);
    }
    Ok(())
}

/// Copies every byte of `source` into `destination`, starting at `start`.
///
/// Panics if `start` is past the end of `destination`.
pub fn copy_to_at<L: ByteList + ?Sized>(
    source: &L,
    destination: &mut [u8],
    start: usize,
) -> Result<(), Error> {
    copy_to(source, &mut destination[start..])
}
