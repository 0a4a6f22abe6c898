//! Every container kind must behave identically for every width and byte order.

use binprim_codec::{word, ByteList, ByteListMut, ContiguousExt, Endian, GetExt, SetExt};
use bytes::{Bytes, BytesMut};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;
use test_case::test_case;

const ENDIANS: [Endian; 2] = [Endian::Little, Endian::Big];

fn containers(data: &[u8]) -> (Vec<u8>, VecDeque<u8>, BytesMut) {
    (
        data.to_vec(),
        data.iter().copied().collect(),
        BytesMut::from(data),
    )
}

fn readers(data: &[u8]) -> Vec<Box<dyn Fn(usize, Endian) -> u32>> {
    let (vec, deque, bytes) = containers(data);
    let array: [u8; 4] = data[..4].try_into().unwrap();
    let frozen = Bytes::copy_from_slice(data);
    vec![
        Box::new(move |offset, endian| vec.get_u24_with(offset, endian)),
        Box::new(move |offset, endian| deque.get_u24_with(offset, endian)),
        Box::new(move |offset, endian| bytes.get_u24_with(offset, endian)),
        Box::new(move |offset, endian| array.get_u24_with(offset, endian)),
        Box::new(move |offset, endian| frozen.get_u24_with(offset, endian)),
    ]
}

#[test]
fn test_get_i16_scenario() {
    let (vec, deque, bytes) = containers(&[0x01, 0x02, 0x03, 0x04]);
    assert_eq!(vec.get_i16(1), 0x0302);
    assert_eq!(deque.get_i16(1), 0x0302);
    assert_eq!(bytes.get_i16(1), 0x0302);
    assert_eq!(vec.get_i16_with(1, Endian::Big), 0x0203);
    assert_eq!(deque.get_i16_with(1, Endian::Big), 0x0203);
    assert_eq!(bytes.get_i16_with(1, Endian::Big), 0x0203);
}

#[test_case(Endian::Little, 0x345678; "little")]
#[test_case(Endian::Big, 0x785634; "big")]
fn test_get_u24_scenario(endian: Endian, expected: u32) {
    for read in readers(&[0x78, 0x56, 0x34, 0x12]) {
        assert_eq!(read(0, endian), expected);
    }
}

#[test]
fn test_u24_sampled_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..512 {
        let value = rng.gen_range(0..=0xFF_FFFF);
        let offset = rng.gen_range(0..5);
        for endian in ENDIANS {
            let (mut vec, mut deque, mut bytes) = containers(&[0u8; 8]);
            vec.set_u24_with(offset, value, endian);
            deque.set_u24_with(offset, value, endian);
            bytes.set_u24_with(offset, value, endian);
            assert_eq!(vec.get_u24_with(offset, endian), value);
            assert_eq!(deque.get_u24_with(offset, endian), value);
            assert_eq!(bytes.get_u24_with(offset, endian), value);
        }
    }
}

#[test]
fn test_endian_symmetry() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..512 {
        let data: [u8; 8] = rng.gen();
        assert_eq!(
            data.get_u16_with(0, Endian::Big),
            data.get_u16(0).swap_bytes()
        );
        assert_eq!(
            data.get_u32_with(0, Endian::Big),
            data.get_u32(0).swap_bytes()
        );
        assert_eq!(
            data.get_u64_with(0, Endian::Big),
            data.get_u64(0).swap_bytes()
        );
        assert_eq!(
            data.get_u24_with(0, Endian::Big),
            data.get_u24(0).swap_bytes() >> 8
        );
    }
}

#[test]
fn test_whole_buffer_matches_offset_zero() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..128 {
        let data: [u8; 8] = rng.gen();
        for endian in ENDIANS {
            assert_eq!(data.load_i16_with(endian), data.get_i16_with(0, endian));
            assert_eq!(data.load_u24_with(endian), data.get_u24_with(0, endian));
            assert_eq!(data.load_i32_with(endian), data.get_i32_with(0, endian));
            assert_eq!(data.load_u64_with(endian), data.get_u64_with(0, endian));
        }
    }
}

#[test]
fn test_generic_over_container() {
    fn stamp<L: ByteListMut + ?Sized>(list: &mut L) {
        list.set_u16_with(0, 0xCAFE, Endian::Big);
        list.set_u32(2, 0x01020304);
    }

    fn check<L: ByteList + ?Sized>(list: &L) {
        assert_eq!(list.get_u16_with(0, Endian::Big), 0xCAFE);
        assert_eq!(list.get_u32(2), 0x01020304);
        assert_eq!(list.get_u16_with(4, Endian::Big), 0x0201);
    }

    let (mut vec, mut deque, mut bytes) = containers(&[0u8; 6]);
    let mut array = [0u8; 6];
    stamp(&mut vec);
    stamp(&mut deque);
    stamp(&mut bytes);
    stamp(&mut array[..]);
    check(&vec);
    check(&deque);
    check(&bytes.freeze());
    check(&array);
}

#[test]
fn test_word_helpers() {
    let mut data = [0u8; 2];
    data.set_u16_with(0, 0xBEEF, Endian::Big);
    let (msb, lsb) = word::to_bytes(0xBEEF);
    assert_eq!(data, [msb, lsb]);
    assert_eq!(word::from_bytes((data[0], data[1]), Endian::Big), 0xBEEF);
    assert_eq!(word::from_bytes((data[0], data[1]), Endian::Little), 0xEFBE);
}
