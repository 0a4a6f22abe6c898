#![no_main]

use arbitrary::Arbitrary;
use binprim_codec::{BufExt, BufMutExt, ByteList, ByteListMut, Endian, GetExt, SetExt};
use bytes::{Bytes, BytesMut};
use libfuzzer_sys::fuzz_target;
use std::collections::VecDeque;

#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzEndian {
    Little,
    Big,
}

impl From<FuzzEndian> for Endian {
    fn from(endian: FuzzEndian) -> Self {
        match endian {
            FuzzEndian::Little => Endian::Little,
            FuzzEndian::Big => Endian::Big,
        }
    }
}

#[derive(Arbitrary, Debug, Clone, Copy, PartialEq, Eq)]
enum Value {
    I16(i16),
    U16(u16),
    U24(u32),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
}

impl Value {
    fn width(self) -> usize {
        match self {
            Value::I16(_) | Value::U16(_) => 2,
            Value::U24(_) => 3,
            Value::I32(_) | Value::U32(_) => 4,
            Value::I64(_) | Value::U64(_) => 8,
        }
    }

    // The value a read is expected to return after this value is written.
    fn stored(self) -> Self {
        match self {
            Value::U24(v) => Value::U24(v & 0xFF_FFFF),
            other => other,
        }
    }
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    initial: Vec<u8>,
    offset: u8,
    value: Value,
    endian: FuzzEndian,
}

fn set<L: ByteListMut + ?Sized>(list: &mut L, offset: usize, value: Value, endian: Endian) {
    match value {
        Value::I16(v) => list.set_i16_with(offset, v, endian),
        Value::U16(v) => list.set_u16_with(offset, v, endian),
        Value::U24(v) => list.set_u24_with(offset, v, endian),
        Value::I32(v) => list.set_i32_with(offset, v, endian),
        Value::U32(v) => list.set_u32_with(offset, v, endian),
        Value::I64(v) => list.set_i64_with(offset, v, endian),
        Value::U64(v) => list.set_u64_with(offset, v, endian),
    }
}

fn get<L: ByteList + ?Sized>(list: &L, offset: usize, kind: Value, endian: Endian) -> Value {
    match kind {
        Value::I16(_) => Value::I16(list.get_i16_with(offset, endian)),
        Value::U16(_) => Value::U16(list.get_u16_with(offset, endian)),
        Value::U24(_) => Value::U24(list.get_u24_with(offset, endian)),
        Value::I32(_) => Value::I32(list.get_i32_with(offset, endian)),
        Value::U32(_) => Value::U32(list.get_u32_with(offset, endian)),
        Value::I64(_) => Value::I64(list.get_i64_with(offset, endian)),
        Value::U64(_) => Value::U64(list.get_u64_with(offset, endian)),
    }
}

fn put(buf: &mut BytesMut, value: Value, endian: Endian) {
    match value {
        Value::I16(v) => buf.put_i16_with(v, endian),
        Value::U16(v) => buf.put_u16_with(v, endian),
        Value::U24(v) => buf.put_u24_with(v, endian),
        Value::I32(v) => buf.put_i32_with(v, endian),
        Value::U32(v) => buf.put_u32_with(v, endian),
        Value::I64(v) => buf.put_i64_with(v, endian),
        Value::U64(v) => buf.put_u64_with(v, endian),
    }
}

fn read(buf: &mut Bytes, kind: Value, endian: Endian) -> Value {
    let result = match kind {
        Value::I16(_) => buf.read_i16_with(endian).map(Value::I16),
        Value::U16(_) => buf.read_u16_with(endian).map(Value::U16),
        Value::U24(_) => buf.read_u24_with(endian).map(Value::U24),
        Value::I32(_) => buf.read_i32_with(endian).map(Value::I32),
        Value::U32(_) => buf.read_u32_with(endian).map(Value::U32),
        Value::I64(_) => buf.read_i64_with(endian).map(Value::I64),
        Value::U64(_) => buf.read_u64_with(endian).map(Value::U64),
    };
    result.expect("failed to read a value that was just written")
}

fn fuzz(input: FuzzInput) {
    let endian = Endian::from(input.endian);
    let width = input.value.width();
    let offset = input.offset as usize;
    if offset + width > input.initial.len() {
        return;
    }
    let expected = input.value.stored();

    // Write into each container kind and compare against the slice.
    let mut slice = input.initial.clone();
    set(&mut slice[..], offset, input.value, endian);
    let mut deque: VecDeque<u8> = input.initial.iter().copied().collect();
    set(&mut deque, offset, input.value, endian);
    let mut bytes = BytesMut::from(&input.initial[..]);
    set(&mut bytes, offset, input.value, endian);

    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), slice);
    assert_eq!(&bytes[..], &slice[..]);
    assert_eq!(&slice[..offset], &input.initial[..offset]);
    assert_eq!(&slice[offset + width..], &input.initial[offset + width..]);

    assert_eq!(get(&slice[..], offset, expected, endian), expected);
    assert_eq!(get(&deque, offset, expected, endian), expected);

    // Sequential writes must produce the same bytes as offset writes.
    let mut sequential = BytesMut::new();
    put(&mut sequential, input.value, endian);
    assert_eq!(&sequential[..], &slice[offset..offset + width]);
    let mut sequential = sequential.freeze();
    assert_eq!(read(&mut sequential, expected, endian), expected);
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
