//! Glyph mapping and the atlas rendering seam.

use crate::state::TileState;
use karst_geom::Offset2;
use karst_zone::Zone;

/// An 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Construct a colour from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A grey at `level` with the given alpha.
    pub const fn grey(level: u8, a: u8) -> Self {
        Self { r: level, g: level, b: level, a }
    }
}

/// One drawable cell: a sheet index and a colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    /// Index into the glyph sheet.
    pub index: u8,
    /// Tint applied to the glyph.
    pub color: Rgba,
}

/// Cell types that know how to draw themselves.
pub trait Sprite {
    /// The glyph for this cell, or `None` to draw nothing.
    fn glyph(&self) -> Option<Glyph>;
}

// Sheet indices for the two terrain fills.
const SOLID_GLYPH: u8 = 0xB2;
const OPEN_GLYPH: u8 = 0xB0;

// Grey levels and visibility alphas.
const SOLID_LEVEL: u8 = 0xC0;
const OPEN_LEVEL: u8 = 0x40;
const SEEN_ALPHA: u8 = 0xFF;
const REMEMBERED_ALPHA: u8 = 0x80;

impl Sprite for TileState {
    /// Unexplored tiles draw nothing. Explored tiles draw their
    /// terrain fill, full-bright while seen and dimmed from memory
    /// otherwise.
    fn glyph(&self) -> Option<Glyph> {
        if !self.explored() {
            return None;
        }

        let (index, level) = if self.solid() {
            (SOLID_GLYPH, SOLID_LEVEL)
        } else {
            (OPEN_GLYPH, OPEN_LEVEL)
        };
        let alpha = if self.seen() { SEEN_ALPHA } else { REMEMBERED_ALPHA };

        Some(Glyph { index, color: Rgba::grey(level, alpha) })
    }
}

/// A destination that accepts positioned glyphs.
pub trait TileAtlas {
    /// Draw `glyph` at the given screen cell.
    fn blit(&mut self, glyph: Glyph, position: Offset2);
}

/// Draw every drawable cell of `zone` onto `atlas`, shifted by
/// `screen_offset`.
pub fn render<T: Sprite, A: TileAtlas>(zone: &Zone<T>, atlas: &mut A, screen_offset: Offset2) {
    for (position, cell) in zone.cells().enumerate() {
        if let Some(glyph) = cell.glyph() {
            atlas.blit(glyph, position + screen_offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TileTrait;
    use karst_geom::Extent2;
    use karst_zone::Region;

    #[derive(Default)]
    struct Recorder {
        blits: Vec<(Glyph, Offset2)>,
    }

    impl TileAtlas for Recorder {
        fn blit(&mut self, glyph: Glyph, position: Offset2) {
            self.blits.push((glyph, position));
        }
    }

    #[test]
    fn unexplored_tiles_draw_nothing() {
        assert!(TileState::default().glyph().is_none());
        assert!(TileState::of([TileTrait::Solid, TileTrait::Seen]).glyph().is_none());
    }

    #[test]
    fn seen_terrain_draws_full_bright() {
        let solid = TileState::of([TileTrait::Solid, TileTrait::Explored, TileTrait::Seen]);
        assert_eq!(
            solid.glyph(),
            Some(Glyph { index: 0xB2, color: Rgba::grey(0xC0, 0xFF) })
        );

        let open = TileState::of([TileTrait::Explored, TileTrait::Seen]);
        assert_eq!(
            open.glyph(),
            Some(Glyph { index: 0xB0, color: Rgba::grey(0x40, 0xFF) })
        );
    }

    #[test]
    fn remembered_terrain_is_dimmed() {
        let remembered = TileState::of([TileTrait::Solid, TileTrait::Explored]);
        let glyph = remembered.glyph().unwrap();
        assert_eq!(glyph.index, 0xB2);
        assert_eq!(glyph.color.a, 0x80);
    }

    #[test]
    fn render_skips_undrawable_cells_and_applies_the_offset() {
        let mut zone: Zone<TileState> =
            Zone::new(Extent2::new(4, 3), Extent2::new(1, 1)).unwrap();
        zone.apply(Region::Border, TileTrait::Explored);
        zone.apply(Region::Border, TileTrait::Solid);

        let mut atlas = Recorder::default();
        render(&zone, &mut atlas, Offset2::new(10, 20));

        assert_eq!(atlas.blits.len(), zone.border_area());
        assert!(atlas
            .blits
            .iter()
            .all(|(glyph, _)| glyph.index == 0xB2 && glyph.color.a == 0x80));
        // (0, 0) lands at the screen offset.
        assert!(atlas.blits.iter().any(|&(_, p)| p == Offset2::new(10, 20)));
        // Interior cells are unexplored and never drawn.
        assert!(!atlas.blits.iter().any(|&(_, p)| p == Offset2::new(11, 21)));
    }
}
