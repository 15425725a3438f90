use chip_layout_editor::{
    curvature_about_point, curvature_through_point, CellLayout, Figure, PortFigure,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;

fn bench_curvature_solver(c: &mut Criterion) {
    let head = DVec2::new(0.0, 0.0);
    let tail = DVec2::new(10.0, 0.0);
    let cursors: Vec<DVec2> = (0..1024)
        .map(|i| {
            let x = (i % 32) as f64 * 0.4 - 3.0;
            let y = (i / 32) as f64 * 0.3 + 0.1;
            DVec2::new(x, y)
        })
        .collect();

    c.bench_function("curvature_through_point_batch", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for cursor in &cursors {
                acc += curvature_through_point(head, tail, black_box(*cursor)).radius;
            }
            black_box(acc)
        })
    });

    c.bench_function("curvature_about_point_batch", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for cursor in &cursors {
                acc += curvature_about_point(head, tail, black_box(*cursor)).radius;
            }
            black_box(acc)
        })
    });
}

fn build_synthetic_cell(port_count: usize) -> CellLayout {
    CellLayout::from_figures((0..port_count).map(|index| {
        let column = (index % 1000) as f64;
        let row = (index / 1000) as f64;
        let x = column + row * 0.001;
        let y = row + column * 0.001;
        Figure::Port(PortFigure::new(DVec2::new(x, y)))
    }))
}

fn build_query_points(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = (i % 1000) as f64 + 0.37;
            let y = ((i * 7) % 1000) as f64 + 0.63;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_snap_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap_queries");

    for &port_count in &[10_000usize, 100_000usize] {
        let cell = build_synthetic_cell(port_count);
        let query_points = build_query_points(1024);

        group.bench_with_input(
            BenchmarkId::new("nearest_batch", port_count),
            &cell,
            |b, cell| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if cell.nearest_figure(black_box(*point)).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("collect_and_snap", port_count),
            &cell,
            |b, cell| {
                b.iter(|| {
                    let mut matches = 0usize;
                    for point in &query_points {
                        let candidates = cell.collect_candidates(black_box(*point), 2.0);
                        if candidates.snap(*point, 2.0).is_match() {
                            matches += 1;
                        }
                    }
                    black_box(matches)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_curvature_solver, bench_snap_queries);
criterion_main!(benches);
