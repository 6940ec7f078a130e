// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for folder scanning and cursor navigation.
//!
//! Measures the performance of:
//! - Directory scanning (finding all image files)
//! - Cursor stepping (advance/retreat)
//! - Single-file selection (scan + position seeding)

use criterion::{criterion_group, criterion_main, Criterion};
use filmstrip::directory_scanner;
use filmstrip::image_navigation::{ImageNavigator, StepOutcome};
use std::fs;
use std::hint::black_box;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds a directory with `count` fake image files.
fn populate(count: usize) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let mut middle = PathBuf::new();
    for i in 0..count {
        let path = dir.path().join(format!("img_{i:04}.jpg"));
        fs::write(&path, b"fake image data").expect("failed to write test file");
        if i == count / 2 {
            middle = path;
        }
    }
    (dir, middle)
}

/// Benchmark directory scanning performance.
fn bench_scan_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    let (dir, _) = populate(200);

    group.bench_function("scan_directory", |b| {
        b.iter(|| {
            let sequence = directory_scanner::scan(dir.path()).unwrap();
            black_box(&sequence);
        });
    });

    group.finish();
}

/// Benchmark cursor stepping without image loading.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    let (dir, _) = populate(200);
    let mut navigator = ImageNavigator::new();
    navigator.open_directory(dir.path()).unwrap();

    group.bench_function("advance", |b| {
        b.iter(|| {
            let mut nav = navigator.clone();
            black_box(nav.advance());
        });
    });

    group.bench_function("retreat_from_end", |b| {
        let mut at_end = navigator.clone();
        while matches!(at_end.advance(), StepOutcome::Moved(_)) {}
        b.iter(|| {
            let mut nav = at_end.clone();
            black_box(nav.retreat());
        });
    });

    group.finish();
}

/// Benchmark single-file selection: scan the parent and seed the cursor.
fn bench_open_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    let (_dir, middle) = populate(200);

    group.bench_function("open_file_middle", |b| {
        b.iter(|| {
            let mut nav = ImageNavigator::new();
            nav.open_file(&middle).unwrap();
            black_box(nav.current_index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scan_directory, bench_step, bench_open_file);
criterion_main!(benches);
