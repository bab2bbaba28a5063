use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gs1_scan::{EanValidator, detect_type};

mod common;

fn bench_check_digit(c: &mut Criterion) {
    c.bench_function("check_digit_12", |b| {
        b.iter(|| EanValidator::compute_check_digit(black_box("400638133393")))
    });
}

fn bench_detect_ean13(c: &mut Criterion) {
    c.bench_function("detect_ean13", |b| {
        b.iter(|| detect_type(black_box("]E04006381333931")))
    });
}

fn bench_detect_datamatrix(c: &mut Criterion) {
    c.bench_function("detect_datamatrix", |b| {
        b.iter(|| detect_type(black_box("]d2011234567890123417250101")))
    });
}

fn bench_detect_sample_list(c: &mut Criterion) {
    let scans = common::collect_scans();
    c.bench_function("detect_sample_list", |b| {
        b.iter(|| {
            for scan in &scans {
                black_box(detect_type(black_box(scan)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_check_digit,
    bench_detect_ean13,
    bench_detect_datamatrix,
    bench_detect_sample_list
);
criterion_main!(benches);
