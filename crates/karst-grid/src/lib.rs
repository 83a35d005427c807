//! Fixed-shape contiguous grid storage for the karst grid engine.
//!
//! [`Grid`] owns a row-major cell buffer whose length is fixed at
//! construction from a [`karst_geom::Shape`]. Access is checked
//! ([`Grid::at`]) or panicking-on-contract-violation (`Index`), never
//! undefined. The [`codec`] module adds the headerless binary dump
//! format used for on-disk zone persistence.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod codec;
mod error;
mod grid;

pub use codec::{CellCodec, CodecError};
pub use error::GridError;
pub use grid::{Grid, Layer, Row, Volume, MAX_GRID_BYTES};
