use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqlens_bio::alignment::consensus;
use seqlens_bio::motif::{search, DEFAULT_CONTEXT};
use seqlens_bio::{CollectionSummary, NaiveAligner, SequenceRecord, SimilarityMatrix};
use std::hint::black_box;

fn generate_records(count: usize, max_length: usize) -> Vec<SequenceRecord> {
    let mut rng = StdRng::seed_from_u64(42);
    let bases = b"ACGT";

    (0..count)
        .map(|i| {
            let length = rng.gen_range(max_length / 2..=max_length);
            let sequence = (0..length).map(|_| bases[rng.gen_range(0..4)]).collect();
            SequenceRecord::new(format!("seq_{}", i), sequence)
        })
        .collect()
}

fn bench_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("naive_alignment");

    for count in [4, 16, 64] {
        let records = generate_records(count, 1000);
        let bases: usize = records.iter().map(SequenceRecord::len).sum();
        group.throughput(Throughput::Bytes(bases as u64));

        group.bench_with_input(BenchmarkId::new("align", count), &records, |b, records| {
            let aligner = NaiveAligner::new();
            b.iter(|| aligner.align(black_box(records)));
        });

        let alignment = NaiveAligner::new().align(&records);
        group.bench_with_input(BenchmarkId::new("consensus", count), &alignment, |b, alignment| {
            b.iter(|| consensus(black_box(alignment)));
        });
    }

    group.finish();
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity_matrix");

    for count in [8, 32] {
        let records = generate_records(count, 500);
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| SimilarityMatrix::compute(black_box(records)));
        });
    }

    group.finish();
}

fn bench_scans(c: &mut Criterion) {
    let records = generate_records(32, 5000);
    let bases: usize = records.iter().map(SequenceRecord::len).sum();

    let mut group = c.benchmark_group("scans");
    group.throughput(Throughput::Bytes(bases as u64));
    group.bench_function("motif_search", |b| {
        b.iter(|| search(black_box("GATC"), &records, DEFAULT_CONTEXT));
    });
    group.bench_function("collection_summary", |b| {
        b.iter(|| CollectionSummary::from_records(black_box(&records), 15));
    });
    group.finish();
}

criterion_group!(benches, bench_alignment, bench_matrix, bench_scans);
criterion_main!(benches);
