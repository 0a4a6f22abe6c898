//! Byte-order aware extensions and adapters for [std::io].

use binprim_codec::{ByteList, Endian};
use binprim_uint24::UInt24;
use byteorder::{BigEndian, LittleEndian};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use tracing::{debug, trace};

macro_rules! read_with {
    ($($name:ident, $read:ident, $type:ty;)*) => {
        $(
            #[doc = concat!("Reads a `", stringify!($type), "` in the given byte order.")]
            #[inline]
            fn $name(&mut self, endian: Endian) -> io::Result<$type> {
                match endian {
                    Endian::Little => byteorder::ReadBytesExt::$read::<LittleEndian>(self),
                    Endian::Big => byteorder::ReadBytesExt::$read::<BigEndian>(self),
                }
            }
        )*
    };
}

macro_rules! write_with {
    ($($name:ident, $write:ident, $type:ty;)*) => {
        $(
            #[doc = concat!("Writes `value` as a `", stringify!($type), "` in the given byte order.")]
            #[inline]
            fn $name(&mut self, value: $type, endian: Endian) -> io::Result<()> {
                match endian {
                    Endian::Little => byteorder::WriteBytesExt::$write::<LittleEndian>(self, value),
                    Endian::Big => byteorder::WriteBytesExt::$write::<BigEndian>(self, value),
                }
            }
        )*
    };
}

/// Extensions for any [Read].
///
/// Fixed-width reads are decoded by [byteorder] and fail with [ErrorKind::UnexpectedEof] if
/// the reader ends first.
pub trait ReadBytesExt: Read {
    /// Reads every remaining byte.
    fn read_all_bytes(&mut self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    /// Reads exactly `len` bytes.
    fn read_exactly(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let mut bytes = vec![0u8; len];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    /// Reads a single byte, returning `None` at the end of the reader.
    fn read_byte_or_eof(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            return match self.read(&mut byte) {
                Ok(0) => Ok(None),
                Ok(_) => Ok(Some(byte[0])),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => Err(err),
            };
        }
    }

    /// Reads a single byte.
    #[inline]
    fn read_u8(&mut self) -> io::Result<u8> {
        byteorder::ReadBytesExt::read_u8(self)
    }

    read_with! {
        read_i16_with, read_i16, i16;
        read_u16_with, read_u16, u16;
        read_i32_with, read_i32, i32;
        read_u32_with, read_u32, u32;
        read_i64_with, read_i64, i64;
        read_u64_with, read_u64, u64;
    }

    /// Reads 3 bytes in the given byte order as a [UInt24].
    #[inline]
    fn read_uint24_with(&mut self, endian: Endian) -> io::Result<UInt24> {
        let value = match endian {
            Endian::Little => byteorder::ReadBytesExt::read_u24::<LittleEndian>(self)?,
            Endian::Big => byteorder::ReadBytesExt::read_u24::<BigEndian>(self)?,
        };
        Ok(UInt24::new_truncating(value))
    }
}

impl<R: Read + ?Sized> ReadBytesExt for R {}

/// Extensions for any [Write].
pub trait WriteBytesExt: Write {
    #[inline]
    fn write_u8(&mut self, value: u8) -> io::Result<()> {
        byteorder::WriteBytesExt::write_u8(self, value)
    }

    write_with! {
        write_i16_with, write_i16, i16;
        write_u16_with, write_u16, u16;
        write_i32_with, write_i32, i32;
        write_u32_with, write_u32, u32;
        write_i64_with, write_i64, i64;
        write_u64_with, write_u64, u64;
    }

    #[inline]
    fn write_uint24_with(&mut self, value: UInt24, endian: Endian) -> io::Result<()> {
        let value = value.get();
        match endian {
            Endian::Little => byteorder::WriteBytesExt::write_u24::<LittleEndian>(self, value),
            Endian::Big => byteorder::WriteBytesExt::write_u24::<BigEndian>(self, value),
        }
    }
}

impl<W: Write + ?Sized> WriteBytesExt for W {}

/// A read-only adapter that can look at the next byte without consuming it.
///
/// Once a peek reaches the end of the inner reader, reads keep returning 0 until the adapter
/// is seeked.
pub struct PeekableReader<R> {
    inner: R,
    // `None` when nothing is buffered, `Some(None)` once the end has been observed.
    peeked: Option<Option<u8>>,
}

impl<R: Read> PeekableReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
        }
    }

    /// Returns the next byte without consuming it, or `None` at the end of the reader.
    ///
    /// Repeated peeks return the same byte.
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        if let Some(peeked) = self.peeked {
            return Ok(peeked);
        }
        let peeked = self.inner.read_byte_or_eof()?;
        trace!(?peeked, "peeked");
        self.peeked = Some(peeked);
        Ok(peeked)
    }

    /// Returns whether the reader is exhausted. May buffer the next byte.
    pub fn is_eof(&mut self) -> io::Result<bool> {
        Ok(self.peek()?.is_none())
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns the inner reader. A buffered byte is lost.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for PeekableReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        match self.peeked.take() {
            None => self.inner.read(buf),
            Some(None) => {
                self.peeked = Some(None);
                Ok(0)
            }
            Some(Some(byte)) => {
                buf[0] = byte;
                match self.inner.read(&mut buf[1..]) {
                    Ok(read) => Ok(read + 1),
                    Err(err) => {
                        // The buffered byte was delivered; the error surfaces on the next read.
                        debug!(?err, "read after peeked byte failed");
                        Ok(1)
                    }
                }
            }
        }
    }
}

impl<R: Read + Seek> Seek for PeekableReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        // The inner reader is one byte ahead while a byte is buffered.
        let pos = match (pos, self.peeked.take()) {
            (SeekFrom::Current(offset), Some(Some(byte))) => {
                let Some(offset) = offset.checked_sub(1) else {
                    // Nothing moved, so keep the buffered byte.
                    self.peeked = Some(Some(byte));
                    return Err(io::Error::new(
                        ErrorKind::InvalidInput,
                        "seek offset overflows the current position",
                    ));
                };
                SeekFrom::Current(offset)
            }
            (pos, _) => pos,
        };
        self.inner.seek(pos)
    }
}

/// A [Read] and [Seek] cursor over any read-only [ByteList].
///
/// Unlike [io::Cursor], the list does not need to be contiguous.
pub struct ListReader<L> {
    list: L,
    position: usize,
}

impl<L: ByteList> ListReader<L> {
    pub fn new(list: L) -> Self {
        Self { list, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get_ref(&self) -> &L {
        &self.list
    }

    pub fn into_inner(self) -> L {
        self.list
    }
}

impl<L: ByteList> Read for ListReader<L> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.list.len().saturating_sub(self.position);
        let count = buf.len().min(available);
        for (offset, slot) in buf[..count].iter_mut().enumerate() {
            *slot = self.list.byte(self.position + offset);
        }
        self.position += count;
        Ok(count)
    }
}

impl<L: ByteList> Seek for ListReader<L> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let len = self.list.len() as i128;
        let target = match pos {
            SeekFrom::Start(offset) => offset as i128,
            SeekFrom::Current(offset) => self.position as i128 + offset as i128,
            SeekFrom::End(offset) => len + offset as i128,
        };
        if target < 0 || target > len {
            debug!(?pos, len = self.list.len(), "seek out of range");
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("seek to {target} is outside 0..={len}"),
            ));
        }
        self.position = target as usize;
        Ok(self.position as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::VecDeque, io::Cursor};
    use test_case::test_case;

    #[test]
    fn test_read_helpers() {
        let mut reader = Cursor::new(vec![1u8, 2, 3, 4, 5]);
        assert_eq!(reader.read_u8().unwrap(), 1);
        assert_eq!(reader.read_exactly(2).unwrap(), vec![2, 3]);
        assert_eq!(reader.read_all_bytes().unwrap(), vec![4, 5]);
        assert_eq!(reader.read_byte_or_eof().unwrap(), None);
        assert_eq!(
            reader.read_u8().unwrap_err().kind(),
            ErrorKind::UnexpectedEof
        );
        assert_eq!(reader.read_all_bytes().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_read_exactly_short() {
        let mut reader = Cursor::new(vec![1u8, 2]);
        assert_eq!(
            reader.read_exactly(3).unwrap_err().kind(),
            ErrorKind::UnexpectedEof
        );
    }

    #[test_case(Endian::Little; "little")]
    #[test_case(Endian::Big; "big")]
    fn test_fixed_width_round_trip(endian: Endian) {
        let mut out = Vec::new();
        out.write_i16_with(-2, endian).unwrap();
        out.write_u16_with(0xBEEF, endian).unwrap();
        out.write_uint24_with(UInt24::MAX, endian).unwrap();
        out.write_i32_with(i32::MIN, endian).unwrap();
        out.write_u32_with(0xDEAD_BEEF, endian).unwrap();
        out.write_i64_with(-1, endian).unwrap();
        out.write_u64_with(0x0102_0304_0506_0708, endian).unwrap();
        assert_eq!(out.len(), 2 + 2 + 3 + 4 + 4 + 8 + 8);

        let mut reader = Cursor::new(out);
        assert_eq!(reader.read_i16_with(endian).unwrap(), -2);
        assert_eq!(reader.read_u16_with(endian).unwrap(), 0xBEEF);
        assert_eq!(reader.read_uint24_with(endian).unwrap(), UInt24::MAX);
        assert_eq!(reader.read_i32_with(endian).unwrap(), i32::MIN);
        assert_eq!(reader.read_u32_with(endian).unwrap(), 0xDEAD_BEEF);
        assert_eq!(reader.read_i64_with(endian).unwrap(), -1);
        assert_eq!(reader.read_u64_with(endian).unwrap(), 0x0102_0304_0506_0708);
        assert!(reader.read_byte_or_eof().unwrap().is_none());
    }

    #[test]
    fn test_write_layout() {
        let mut out = Vec::new();
        out.write_u16_with(0x0102, Endian::Little).unwrap();
        out.write_u16_with(0x0102, Endian::Big).unwrap();
        out.write_uint24_with(UInt24::from(0x0304u16), Endian::Big).unwrap();
        out.write_u8(0xFF).unwrap();
        assert_eq!(out, vec![0x02, 0x01, 0x01, 0x02, 0x00, 0x03, 0x04, 0xFF]);
    }

    #[test]
    fn test_peek() {
        let mut reader = PeekableReader::new(Cursor::new(vec![1u8, 2, 3]));
        assert_eq!(reader.peek().unwrap(), Some(1));
        assert_eq!(reader.peek().unwrap(), Some(1));
        assert!(!reader.is_eof().unwrap());

        let mut buf = [0u8; 2];
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(buf, [1, 2]);

        assert_eq!(reader.peek().unwrap(), Some(3));
        let mut single = [0u8; 1];
        assert_eq!(reader.read(&mut single).unwrap(), 1);
        assert_eq!(single, [3]);

        assert!(reader.is_eof().unwrap());
        assert_eq!(reader.peek().unwrap(), None);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_peek_then_read_all() {
        let mut reader = PeekableReader::new(Cursor::new(vec![9u8, 8, 7]));
        assert_eq!(reader.peek().unwrap(), Some(9));
        assert_eq!(reader.read_all_bytes().unwrap(), vec![9, 8, 7]);
    }

    #[test]
    fn test_peek_seek() {
        let mut reader = PeekableReader::new(Cursor::new(vec![1u8, 2, 3, 4]));
        assert_eq!(reader.read_u8().unwrap(), 1);
        assert_eq!(reader.peek().unwrap(), Some(2));
        assert_eq!(reader.stream_position().unwrap(), 1);
        assert_eq!(reader.seek(SeekFrom::Current(1)).unwrap(), 2);
        assert_eq!(reader.read_u8().unwrap(), 3);

        assert!(reader.seek(SeekFrom::End(0)).is_ok());
        assert!(reader.is_eof().unwrap());
        assert_eq!(reader.seek(SeekFrom::Start(0)).unwrap(), 0);
        assert!(!reader.is_eof().unwrap());
        assert_eq!(reader.into_inner().position(), 1);
    }

    #[test]
    fn test_peek_seek_offset_overflow() {
        let mut reader = PeekableReader::new(Cursor::new(vec![1u8, 2, 3]));
        assert_eq!(reader.peek().unwrap(), Some(1));
        let err = reader.seek(SeekFrom::Current(i64::MIN)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        // The failed seek left the position and the buffered byte alone.
        assert_eq!(reader.peek().unwrap(), Some(1));
        assert_eq!(reader.read_all_bytes().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_list_reader_deque() {
        let mut deque: VecDeque<u8> = (4..8).collect();
        deque.push_front(3);
        deque.push_front(2);
        let mut reader = ListReader::new(deque);
        assert_eq!(reader.len(), 6);

        let mut buf = [0u8; 4];
        assert_eq!(reader.read(&mut buf).unwrap(), 4);
        assert_eq!(buf, [2, 3, 4, 5]);
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], &[6, 7]);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
        assert_eq!(reader.position(), 6);
    }

    #[test]
    fn test_list_reader_seek() {
        let mut reader = ListReader::new(vec![10u8, 11, 12, 13]);
        assert_eq!(reader.seek(SeekFrom::Start(2)).unwrap(), 2);
        assert_eq!(reader.read_u8().unwrap(), 12);
        assert_eq!(reader.seek(SeekFrom::Current(-3)).unwrap(), 0);
        assert_eq!(reader.seek(SeekFrom::End(-1)).unwrap(), 3);
        assert_eq!(reader.read_u8().unwrap(), 13);
        assert_eq!(reader.seek(SeekFrom::End(0)).unwrap(), 4);
        assert_eq!(reader.read_byte_or_eof().unwrap(), None);

        for pos in [SeekFrom::Start(5), SeekFrom::Current(-5), SeekFrom::End(1)] {
            let err = reader.seek(pos).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn test_list_reader_fixed_width() {
        let bytes = bytes::Bytes::from_static(&[0x12, 0x34, 0x56, 0x78]);
        let mut reader = ListReader::new(&bytes);
        assert_eq!(
            reader.read_uint24_with(Endian::Big).unwrap(),
            UInt24::from_be_bytes([0x12, 0x34, 0x56])
        );
        assert_eq!(
            reader.read_u16_with(Endian::Big).unwrap_err().kind(),
            ErrorKind::UnexpectedEof
        );
    }
}
