//! End-to-end generation pipeline checks at stock tuning values.

use karst_geom::{Extent2, Offset2};
use karst_zone::consts::{
    BORDER_SIZE, FILL_PERCENT, SMOOTHING_ITERATIONS, SMOOTHING_THRESHOLD, VIEW_DISTANCE,
    ZONE_SIZE,
};
use karst_zone::{AutotileSolver, BinaryApplicator, Region, Zone, ZoneError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn generated(seed: u64) -> Zone<bool> {
    let mut zone: Zone<bool> = Zone::new(ZONE_SIZE, BORDER_SIZE).unwrap();
    let applicator = BinaryApplicator::new(true, false);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    zone.generate(
        &mut rng,
        Region::Interior,
        FILL_PERCENT,
        SMOOTHING_ITERATIONS,
        SMOOTHING_THRESHOLD,
        &applicator,
    )
    .unwrap();
    zone.set(Region::Border, &true);
    zone
}

#[test]
fn stock_generation_is_reproducible() {
    let a = generated(0xC0FFEE);
    let b = generated(0xC0FFEE);
    assert_eq!(a, b);
    assert_ne!(a, generated(0xBEEF));
}

#[test]
fn generated_zone_keeps_its_border_solid() {
    let zone = generated(17);
    assert_eq!(zone.count(Region::Border, &true), zone.border_area());
    // The interior came out mixed rather than all one state.
    let solid = zone.count(Region::Interior, &true);
    assert!(solid > 0);
    assert!(solid < zone.interior_area());
}

#[test]
fn autotile_indices_cover_the_generated_field() {
    let zone = generated(23);
    for solver in [AutotileSolver::MarchingSquares, AutotileSolver::Melded] {
        let mut histogram = [0usize; 16];
        for y in 0..ZONE_SIZE.h as i32 {
            for x in 0..ZONE_SIZE.w as i32 {
                let index = solver.index(&zone, Offset2::new(x, y), &true);
                histogram[index as usize] += 1;
            }
        }
        // A mixed field produces both extremes of the sheet.
        assert!(histogram[0] > 0);
        assert!(histogram[15] > 0);
    }
}

#[test]
fn sight_lines_respect_the_border() {
    let zone = generated(31);
    let origin = zone
        .find_random(Region::Interior, &mut ChaCha8Rng::seed_from_u64(1), &false)
        .unwrap();

    // The solid border always blocks a line headed off-zone.
    assert!(zone.line_blocked(origin, Offset2::new(-5, origin.y), &true));

    // A bounded query never reports a block the unbounded one misses.
    for target in [Offset2::new(10, 10), Offset2::new(70, 40), origin] {
        let bounded = zone.line_blocked_within(origin, target, &true, VIEW_DISTANCE);
        if bounded {
            assert!(zone.line_blocked(origin, target, &true));
        }
    }
}

#[test]
fn dumps_survive_a_disk_round_trip() {
    let dir = std::env::temp_dir().join("karst-zone-pipeline-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("generated.dump");

    let zone = generated(47);
    zone.save(&path).unwrap();
    let loaded = Zone::<bool>::load(ZONE_SIZE, BORDER_SIZE, &path).unwrap();
    assert_eq!(loaded, zone);

    // Reloading under a different geometry is rejected outright.
    let err = Zone::<bool>::load(Extent2::new(40, 45), BORDER_SIZE, &path).unwrap_err();
    assert!(matches!(err, ZoneError::Codec(_)));

    std::fs::remove_file(&path).ok();
}
