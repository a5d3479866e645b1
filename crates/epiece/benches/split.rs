//! Benchmark – `epiece::split`
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use epiece::{MAX_SUBJECT_LEN, split};

/// Produce a *deterministic* subject of exactly `target_len` bytes made of
/// `field_len`-byte fields joined by `delimiter`.
fn make_subject(target_len: usize, field_len: usize, delimiter: &[u8]) -> Vec<u8> {
    let mut subject = Vec::with_capacity(target_len);
    while subject.len() < target_len {
        subject.extend(std::iter::repeat_n(b'a', field_len));
        subject.extend_from_slice(delimiter);
    }
    subject.truncate(target_len);
    subject
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    let cases: [(usize, &[u8]); 4] = [(1, b","), (16, b","), (16, b"::"), (256, b"<|>")];
    for (field_len, delimiter) in cases {
        let subject = make_subject(MAX_SUBJECT_LEN, field_len, delimiter);
        group.throughput(Throughput::Bytes(subject.len() as u64));
        let id = format!("field{field_len}/delim{}", delimiter.len());
        group.bench_with_input(BenchmarkId::from_parameter(id), &subject, |b, subject| {
            b.iter(|| split(black_box(subject), black_box(delimiter)).unwrap().len());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
