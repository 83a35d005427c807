//! Default tuning values for zone generation.

use karst_geom::Extent2;

/// Default fill probability handed to randomization.
pub const FILL_PERCENT: f64 = 0.5;

/// Default number of smoothing passes.
pub const SMOOTHING_ITERATIONS: u32 = 10;

/// Default neighbour-count threshold for a smoothing pass.
pub const SMOOTHING_THRESHOLD: usize = 4;

/// Default border thickness on each axis.
pub const BORDER_SIZE: Extent2 = Extent2::new(4, 4);

/// Default maximum sight distance in cells.
pub const VIEW_DISTANCE: u32 = 8;

/// Default zone extent.
pub const ZONE_SIZE: Extent2 = Extent2::new(80, 45);
