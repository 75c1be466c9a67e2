use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Vector3;
use std::hint::black_box;

use qspace::{
    ang2q_area, ang2q_linear, ang2q_point, AreaGeometry, GoniometerBatch, LinearGeometry,
    Parallelism, Roi,
};

const WAVELENGTH: f64 = 1.5406;

fn scan_angles(npoints: usize, circles: usize) -> Vec<f64> {
    (0..npoints * circles)
        .map(|i| (i as f64) * 1e-3)
        .collect()
}

fn bench_point_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_conversion");

    let npoints = 1000;
    let sample_angles = scan_angles(npoints, 3);
    let detector_angles = scan_angles(npoints, 2);
    let batch = GoniometerBatch::new(&sample_angles, &detector_angles, npoints);
    let beam = Vector3::new(0.0, 0.0, 1.0);

    group.bench_function("1000_points_sequential", |b| {
        b.iter(|| {
            ang2q_point(
                black_box(&batch),
                black_box("x+y-z+"),
                black_box("x+y-"),
                black_box(beam),
                black_box(WAVELENGTH),
                Parallelism::Sequential,
            )
            .unwrap()
        });
    });

    group.bench_function("1000_points_auto", |b| {
        b.iter(|| {
            ang2q_point(
                black_box(&batch),
                black_box("x+y-z+"),
                black_box("x+y-"),
                black_box(beam),
                black_box(WAVELENGTH),
                Parallelism::Auto,
            )
            .unwrap()
        });
    });

    group.finish();
}

fn bench_linear_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_conversion");

    let npoints = 200;
    let sample_angles = scan_angles(npoints, 1);
    let detector_angles = scan_angles(npoints, 1);
    let batch = GoniometerBatch::new(&sample_angles, &detector_angles, npoints);
    let beam = Vector3::new(0.0, 0.0, 1.0);
    let geometry =
        LinearGeometry::from_channels_per_degree("y+", 640.0, 1280, 345.28).unwrap();

    group.bench_function("200_points_1280_channels", |b| {
        b.iter(|| {
            ang2q_linear(
                black_box(&batch),
                black_box("x+"),
                black_box("x+"),
                black_box(beam),
                black_box(&geometry),
                black_box(WAVELENGTH),
                Parallelism::Auto,
            )
            .unwrap()
        });
    });

    group.finish();
}

fn bench_area_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("area_conversion");
    group.sample_size(20);

    let npoints = 10;
    let sample_angles = scan_angles(npoints, 2);
    let detector_angles = scan_angles(npoints, 1);
    let batch = GoniometerBatch::new(&sample_angles, &detector_angles, npoints);
    let beam = Vector3::new(0.0, 0.0, 1.0);
    let geometry = AreaGeometry::new("y+", "x-", 128.0, 128.0, 256, 256, 0.3, 55e-6, 55e-6)
        .unwrap()
        .with_roi(Roi::new(0, 256), Roi::new(0, 256));

    group.bench_function("10_points_256x256_pixels", |b| {
        b.iter(|| {
            ang2q_area(
                black_box(&batch),
                black_box("x+y+"),
                black_box("x+"),
                black_box(beam),
                black_box(&geometry),
                black_box(WAVELENGTH),
                Parallelism::Auto,
            )
            .unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_point_conversion,
    bench_linear_conversion,
    bench_area_conversion
);
criterion_main!(benches);
