use binprim_codec::{ByteListMut, Endian, SetExt};
use bytes::BytesMut;
use criterion::{criterion_group, Criterion};
use std::{collections::VecDeque, hint::black_box};

const LEN: usize = 4096;

fn write_all<L: ByteListMut + ?Sized>(list: &mut L, endian: Endian) {
    let mut offset = 0;
    while offset + 8 <= list.len() {
        list.set_u64_with(offset, offset as u64, endian);
        list.set_u24_with(offset, offset as u32 & 0xFF_FFFF, endian);
        offset += 8;
    }
}

fn bench_set(c: &mut Criterion) {
    let mut slice = vec![0u8; LEN];
    let mut bytes = BytesMut::zeroed(LEN);
    let mut deque = VecDeque::from(vec![0u8; LEN]);

    for endian in [Endian::Little, Endian::Big] {
        c.bench_function(
            &format!("{}/container=slice endian={endian:?}", module_path!()),
            |b| b.iter(|| write_all(black_box(&mut slice[..]), endian)),
        );
        c.bench_function(
            &format!("{}/container=bytes endian={endian:?}", module_path!()),
            |b| b.iter(|| write_all(black_box(&mut bytes), endian)),
        );
        c.bench_function(
            &format!("{}/container=deque endian={endian:?}", module_path!()),
            |b| b.iter(|| write_all(black_box(&mut deque), endian)),
        );
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_set,
}
