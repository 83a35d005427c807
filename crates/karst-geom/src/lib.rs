//! Geometry primitives for the karst grid engine.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! fixed extent and signed offset value types in one, two, and three
//! dimensions, the row-major flatten/unflatten mapping behind every grid,
//! the compass flag set used for edge classification, and an integer
//! Bresenham line iterator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod compass;
mod extent;
mod line;
mod offset;

pub use compass::Compass;
pub use extent::{Extent1, Extent2, Extent3, Shape};
pub use line::Bresenham;
pub use offset::{Offset1, Offset2, Offset3};
