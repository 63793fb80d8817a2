//! Benchmarks for width normalization throughput
//!
//! Run with: cargo bench

use charwidth_engine::{Category, NormalizeOptions, Normalizer, normalize};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

const MIXED_LINE: &str = "Ｈｅｌｌｏ　ﾜｰﾙﾄﾞ！｢ﾃﾞｰﾀﾍﾞｰｽ｣､ﾊﾟｿｺﾝ￥１，０００ 日本語のテキスト\n";
const PLAIN_LINE: &str = "plain ascii text that needs no folding at all, only scanning\n";

fn bench_normalize(c: &mut Criterion) {
    let mixed = MIXED_LINE.repeat(256);
    let plain = PLAIN_LINE.repeat(256);

    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Bytes(mixed.len() as u64));

    let options = NormalizeOptions::default();
    group.bench_function("mixed_default", |b| {
        b.iter(|| normalize(black_box(&mixed), black_box(&options)))
    });

    group.bench_function("plain_default", |b| {
        b.iter(|| normalize(black_box(&plain), black_box(&options)))
    });

    let only_space = NormalizeOptions::only([Category::Space]);
    group.bench_function("mixed_only_space_rebuild", |b| {
        b.iter(|| normalize(black_box(&mixed), black_box(&only_space)))
    });

    let normalizer = Normalizer::new(&only_space);
    group.bench_function("mixed_only_space_reused", |b| {
        b.iter(|| normalizer.normalize(black_box(&mixed)))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
