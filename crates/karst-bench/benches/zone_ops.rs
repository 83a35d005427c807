//! Criterion micro-benchmarks for zone operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use karst_bench::{carve, reference_zone, stress_zone};
use karst_geom::Offset2;
use karst_zone::consts::{FILL_PERCENT, SMOOTHING_THRESHOLD, VIEW_DISTANCE};
use karst_zone::{AutotileSolver, BinaryApplicator, Region, Zone};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark: full stock generation of the 80x45 reference zone.
fn bench_generate_reference(c: &mut Criterion) {
    c.bench_function("generate_reference_80x45", |b| {
        let mut zone = reference_zone();
        b.iter(|| {
            carve(&mut zone, 42);
            black_box(&zone);
        });
    });
}

/// Benchmark: one smoothing pass over the ~57K-cell stress zone.
fn bench_smooth_stress(c: &mut Criterion) {
    let walls = BinaryApplicator::new(true, false);
    let mut zone = stress_zone();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    zone.randomize_with(Region::All, &mut rng, FILL_PERCENT, &walls)
        .unwrap();
    let mut buffer = zone.cells().clone();

    c.bench_function("smooth_stress_320x180", |b| {
        b.iter(|| {
            zone.smooth(&mut buffer, Region::All, 1, SMOOTHING_THRESHOLD, &walls)
                .unwrap();
            black_box(&zone);
        });
    });
}

/// Benchmark: boundary-aware neighbour counting over every cell.
fn bench_neighbour_count_sweep(c: &mut Criterion) {
    let mut zone = reference_zone();
    carve(&mut zone, 13);
    let size = zone.extent();

    c.bench_function("neighbour_count_sweep_80x45", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for y in 0..size.h as i32 {
                for x in 0..size.w as i32 {
                    total += zone.neighbour_count(Offset2::new(x, y), &true);
                }
            }
            black_box(total);
        });
    });
}

/// Benchmark: melded autotile indices over every cell.
fn bench_autotile_sweep(c: &mut Criterion) {
    let mut zone = reference_zone();
    carve(&mut zone, 13);
    let size = zone.extent();

    c.bench_function("autotile_melded_sweep_80x45", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for y in 0..size.h as i32 {
                for x in 0..size.w as i32 {
                    acc += u32::from(AutotileSolver::Melded.index(
                        &zone,
                        Offset2::new(x, y),
                        &true,
                    ));
                }
            }
            black_box(acc);
        });
    });
}

/// Benchmark: bounded sight lines fanned out from the zone centre.
fn bench_line_of_sight_fan(c: &mut Criterion) {
    let mut zone = reference_zone();
    carve(&mut zone, 29);
    let size = zone.extent();
    let centre = Offset2::new(size.w as i32 / 2, size.h as i32 / 2);

    let targets: Vec<Offset2> = (0..size.w as i32)
        .map(|x| Offset2::new(x, 0))
        .chain((0..size.w as i32).map(|x| Offset2::new(x, size.h as i32 - 1)))
        .chain((0..size.h as i32).map(|y| Offset2::new(0, y)))
        .chain((0..size.h as i32).map(|y| Offset2::new(size.w as i32 - 1, y)))
        .collect();

    c.bench_function("line_of_sight_fan_80x45", |b| {
        b.iter(|| {
            let mut blocked = 0usize;
            for &target in &targets {
                if zone.line_blocked_within(centre, target, &true, VIEW_DISTANCE) {
                    blocked += 1;
                }
            }
            black_box(blocked);
        });
    });
}

/// Benchmark: uniform rejection sampling for an open border-adjacent cell.
fn bench_find_random(c: &mut Criterion) {
    let mut zone: Zone<bool> = reference_zone();
    carve(&mut zone, 3);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    c.bench_function("find_random_interior_80x45", |b| {
        b.iter(|| {
            let hit = zone.find_random(Region::Interior, &mut rng, &false);
            black_box(hit);
        });
    });
}

criterion_group!(
    benches,
    bench_generate_reference,
    bench_smooth_stress,
    bench_neighbour_count_sweep,
    bench_autotile_sweep,
    bench_line_of_sight_fan,
    bench_find_random
);
criterion_main!(benches);
