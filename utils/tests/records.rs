//! Parse a tagged record stream through the adapters, the way a file format reader would.

use binprim_codec::Endian;
use binprim_uint24::UInt24;
use binprim_utils::{
    io::{ListReader, PeekableReader, ReadBytesExt, WriteBytesExt},
    BitRange, ByteExt,
};
use std::{
    collections::VecDeque,
    io::{Read, Seek, SeekFrom},
};

#[derive(Debug, PartialEq)]
enum Record {
    Short(u16),
    Medium(UInt24),
    Long(u64),
}

// The high nibble of each tag selects the record kind and the low nibble its byte order.
fn encode(records: &[Record]) -> Vec<u8> {
    let mut out = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let endian = if index % 2 == 0 { Endian::Little } else { Endian::Big };
        let order = match endian {
            Endian::Little => 0,
            Endian::Big => 1,
        };
        match record {
            Record::Short(value) => {
                out.write_u8(0u8.set_high_nibble(1).set_low_nibble(order)).unwrap();
                out.write_u16_with(*value, endian).unwrap();
            }
            Record::Medium(value) => {
                out.write_u8(0u8.set_high_nibble(2).set_low_nibble(order)).unwrap();
                out.write_uint24_with(*value, endian).unwrap();
            }
            Record::Long(value) => {
                out.write_u8(0u8.set_high_nibble(3).set_low_nibble(order)).unwrap();
                out.write_u64_with(*value, endian).unwrap();
            }
        }
    }
    out
}

fn decode<R: Read>(reader: R) -> Vec<Record> {
    let mut reader = PeekableReader::new(reader);
    let mut records = Vec::new();
    while !reader.is_eof().unwrap() {
        let tag = reader.read_u8().unwrap();
        let endian = match tag.get_bits(0, 3).unwrap() {
            0 => Endian::Little,
            _ => Endian::Big,
        };
        let record = match tag.high_nibble() {
            1 => Record::Short(reader.read_u16_with(endian).unwrap()),
            2 => Record::Medium(reader.read_uint24_with(endian).unwrap()),
            3 => Record::Long(reader.read_u64_with(endian).unwrap()),
            kind => panic!("unknown record kind {kind}"),
        };
        records.push(record);
    }
    records
}

fn sample() -> Vec<Record> {
    vec![
        Record::Short(0xBEEF),
        Record::Medium(UInt24::MAX),
        Record::Long(0x0102_0304_0506_0708),
        Record::Medium(UInt24::from(0x1234u16)),
        Record::Short(0),
    ]
}

#[test]
fn test_decode_from_cursor() {
    let encoded = encode(&sample());
    assert_eq!(decode(std::io::Cursor::new(encoded)), sample());
}

#[test]
fn test_decode_from_wrapped_deque() {
    // Force the deque to wrap so the reader sees a non-contiguous list.
    let encoded = encode(&sample());
    let mut deque = VecDeque::with_capacity(encoded.len());
    let (head, tail) = encoded.split_at(encoded.len() / 2);
    deque.extend(tail.iter().copied());
    for byte in head.iter().rev() {
        deque.push_front(*byte);
    }
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), encoded);
    assert_eq!(decode(ListReader::new(deque)), sample());
}

#[test]
fn test_rewind_after_peek() {
    let encoded = encode(&sample());
    let mut reader = PeekableReader::new(ListReader::new(encoded.clone()));
    assert_eq!(reader.peek().unwrap(), Some(encoded[0]));
    reader.seek(SeekFrom::End(-2)).unwrap();
    assert_eq!(reader.read_all_bytes().unwrap(), vec![0, 0]);
    reader.rewind().unwrap();
    assert_eq!(reader.read_all_bytes().unwrap(), encoded);
}
