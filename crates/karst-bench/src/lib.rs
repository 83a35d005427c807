//! Benchmark profiles and utilities for the karst grid engine.
//!
//! Provides pre-built zones for benchmarking:
//!
//! - [`reference_zone`]: the stock 80x45 zone with a 4x4 border
//! - [`stress_zone`]: a 320x180 zone (~57K cells) for stress runs
//! - [`carve`]: deterministic cave generation into either profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

use karst_geom::Extent2;
use karst_zone::consts::{
    BORDER_SIZE, FILL_PERCENT, SMOOTHING_ITERATIONS, SMOOTHING_THRESHOLD, ZONE_SIZE,
};
use karst_zone::{BinaryApplicator, Region, Zone};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build the stock 80x45 zone with a 4x4 border, all cells open.
pub fn reference_zone() -> Zone<bool> {
    Zone::new(ZONE_SIZE, BORDER_SIZE).unwrap()
}

/// Build a 320x180 zone (~57K cells) with the stock border.
pub fn stress_zone() -> Zone<bool> {
    Zone::new(Extent2::new(320, 180), BORDER_SIZE).unwrap()
}

/// Carve a cave into `zone` at the stock tuning values, seeded.
pub fn carve(zone: &mut Zone<bool>, seed: u64) {
    let walls = BinaryApplicator::new(true, false);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    zone.generate(
        &mut rng,
        Region::All,
        FILL_PERCENT,
        SMOOTHING_ITERATIONS,
        SMOOTHING_THRESHOLD,
        &walls,
    )
    .unwrap();
    zone.set(Region::Border, &true);
}
