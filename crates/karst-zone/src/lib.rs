//! Bordered zones and the operations that shape them.
//!
//! A [`Zone`] is a 2D cell layer split by a rectangular border frame
//! into [`Region::Border`] and [`Region::Interior`]. On top of that
//! split sit the generation tools: Bernoulli randomization, cellular
//! automaton smoothing ([`Zone::smooth`], [`Zone::generate`]),
//! autotile index calculation ([`AutotileSolver`]), and Bresenham
//! line-of-sight ([`Zone::line_blocked`]). The [`consts`] module holds
//! the stock tuning values.
//!
//! All randomized operations consume RNG draws in a documented, stable
//! order, so seeding the generator reproduces a zone exactly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod applicator;
mod automaton;
mod autotile;
pub mod consts;
mod error;
mod sight;
mod zone;

pub use applicator::{BinaryApplicator, TernaryApplicator, UniformApplicator};
pub use autotile::AutotileSolver;
pub use error::ZoneError;
pub use zone::{Region, Zone};
