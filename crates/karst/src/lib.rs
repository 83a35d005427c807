//! Karst: a bounded 2D grid engine for procedural cave worlds.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all karst sub-crates. For most users, adding `karst` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use karst::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Carve a cave into a bordered zone, walls solid.
//! let mut zone: Zone<bool> = Zone::new(Extent2::new(40, 30), Extent2::new(2, 2)).unwrap();
//! let walls = BinaryApplicator::new(true, false);
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! zone.generate(&mut rng, Region::Interior, 0.45, 5, 4, &walls).unwrap();
//! zone.set(Region::Border, &true);
//!
//! // Stand somewhere open and look around.
//! let eye = zone.find_random(Region::Interior, &mut rng, &false).unwrap();
//! assert!(zone.line_blocked(eye, Offset2::new(-1, eye.y), &true));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`geom`] | `karst-geom` | Extents, offsets, compass flags, Bresenham walks |
//! | [`grid`] | `karst-grid` | The `Grid` container and binary cell codec |
//! | [`zone`] | `karst-zone` | Bordered zones, generation, autotiling, sight |
//! | [`tile`] | `karst-tile` | Tile state flags and the glyph rendering seam |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry primitives (`karst-geom`).
///
/// Extents with the [`geom::Shape`] mapping between coordinates and
/// row-major indices, signed offsets with distance metrics,
/// [`geom::Compass`] direction flags, and the [`geom::Bresenham`]
/// line iterator.
pub use karst_geom as geom;

/// Grid storage and persistence (`karst-grid`).
///
/// The fixed-shape [`grid::Grid`] container with its [`grid::Layer`]
/// and [`grid::Volume`] aliases, and the [`grid::CellCodec`] binary
/// dump format.
pub use karst_grid as grid;

/// Zones and the operations that shape them (`karst-zone`).
///
/// [`zone::Zone`] with its [`zone::Region`] split, cellular-automaton
/// generation, [`zone::AutotileSolver`], line-of-sight queries, and
/// the stock tuning values in [`zone::consts`].
pub use karst_zone as zone;

/// Tile cells and rendering (`karst-tile`).
///
/// [`tile::TileState`] flags driven by [`tile::TileTrait`] polarities,
/// and the [`tile::render`] seam over [`tile::TileAtlas`].
pub use karst_tile as tile;

/// Common imports for typical karst usage.
///
/// ```rust
/// use karst::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use karst_geom::{Bresenham, Compass, Extent2, Offset2, Shape};

    // Grid storage
    pub use karst_grid::{CellCodec, Grid, Layer};

    // Errors
    pub use karst_grid::{CodecError, GridError};
    pub use karst_zone::ZoneError;

    // Zones
    pub use karst_zone::{
        AutotileSolver, BinaryApplicator, Region, TernaryApplicator, UniformApplicator, Zone,
    };

    // Tiles
    pub use karst_tile::{render, Glyph, Sprite, TileAtlas, TileState, TileTrait};
}
