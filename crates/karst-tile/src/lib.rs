//! Tile cells for zones: packed state flags and a glyph rendering seam.
//!
//! [`TileState`] packs eight terrain and visibility flags into one
//! byte, with [`TileTrait`] polarities driving them through the zone
//! bulk-write operators. The [`render`] function walks a zone and
//! hands each drawable cell's [`Glyph`] to a [`TileAtlas`], keeping
//! the engine free of any concrete graphics backend.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod render;
mod state;

pub use render::{render, Glyph, Rgba, Sprite, TileAtlas};
pub use state::{TileState, TileTrait};
