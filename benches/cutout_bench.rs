use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cutout::{binary, json::ExportOptions, text::TextValue, Document};

const DRAGON_JSON: &[u8] = include_bytes!("../tests/fixtures/dragon.json");
const DRAGON_MPACK: &[u8] = include_bytes!("../tests/fixtures/dragon.mpack");

pub fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(DRAGON_JSON.len() as u64));
    group.bench_function("json", |b| {
        b.iter(|| TextValue::from_slice(black_box(DRAGON_JSON)).unwrap())
    });
    group.throughput(Throughput::Bytes(DRAGON_MPACK.len() as u64));
    group.bench_function("mpack", |b| {
        b.iter(|| binary::from_slice(black_box(DRAGON_MPACK)).unwrap())
    });
    group.finish();
}

pub fn decode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(DRAGON_JSON.len() as u64));
    group.bench_function("json", |b| {
        b.iter(|| Document::from_json_slice(black_box(DRAGON_JSON)).unwrap())
    });
    group.throughput(Throughput::Bytes(DRAGON_MPACK.len() as u64));
    group.bench_function("mpack", |b| {
        b.iter(|| Document::from_mpack_slice(black_box(DRAGON_MPACK)).unwrap())
    });
    group.finish();
}

pub fn export_benchmark(c: &mut Criterion) {
    let doc = Document::from_json_slice(DRAGON_JSON).unwrap();
    let mut group = c.benchmark_group("export");
    group.bench_function("json", |b| {
        b.iter(|| black_box(&doc).to_json(ExportOptions::default()).unwrap())
    });
    group.bench_function("mpack", |b| b.iter(|| black_box(&doc).to_mpack().unwrap()));
    group.finish();
}

criterion_group!(
    benches,
    parse_benchmark,
    decode_benchmark,
    export_benchmark
);
criterion_main!(benches);
