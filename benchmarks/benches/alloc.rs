// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use randkit_alloc::{checked_size, safer_calloc, safer_malloc};

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench alloc
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// vec![0; n] vs safer_calloc
// =============================================================================

fn bench_zeroed(c: &mut Criterion) {
    let mut group = c.benchmark_group("zeroed");
    configure_group(&mut group);

    for size in [64usize, 4_096, 1 << 20] {
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("vec", size), &size, |b, &s| {
            b.iter(|| black_box(vec![0u8; s]));
        });

        group.bench_with_input(BenchmarkId::new("safer_calloc", size), &size, |b, &s| {
            b.iter(|| black_box(safer_calloc(black_box(s), 1)));
        });
    }

    group.finish();
}

fn bench_filled(c: &mut Criterion) {
    let mut group = c.benchmark_group("filled");
    configure_group(&mut group);

    for size in [64usize, 4_096, 1 << 20] {
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("vec", size), &size, |b, &s| {
            b.iter(|| black_box(vec![0xA5u8; s]));
        });

        group.bench_with_input(BenchmarkId::new("safer_malloc_fill", size), &size, |b, &s| {
            b.iter(|| black_box(safer_malloc(black_box(s), 1).map(|block| block.fill(0xA5))));
        });
    }

    group.finish();
}

fn bench_checked_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_size");
    configure_group(&mut group);

    group.bench_function("fits", |b| {
        b.iter(|| black_box(checked_size(black_box(4_096), black_box(16))));
    });
    group.bench_function("overflows", |b| {
        b.iter(|| black_box(checked_size(black_box(usize::MAX), black_box(2))));
    });

    group.finish();
}

criterion_group!(benches, bench_zeroed, bench_filled, bench_checked_size);
criterion_main!(benches);
