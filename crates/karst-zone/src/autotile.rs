//! Autotile index calculation.
//!
//! An autotile index is a 4-bit selector into a 16-entry tile sheet,
//! derived from which neighbours of a cell hold a given value. Two
//! solvers are provided: classic marching squares over the cell's own
//! 2x2 block, and a melded variant that conditions each bit on a full
//! trio of surrounding neighbours for smoother transitions.

use crate::zone::Zone;
use karst_geom::{Compass, Offset2};

/// Index value of a position outside the zone: fully surrounded.
const SOLID_INDEX: u8 = 15;

/// Strategy for deriving a 4-bit autotile index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AutotileSolver {
    /// The cell's own 2x2 block: northwest, north, self, west.
    MarchingSquares,
    /// Each bit requires the full trio of neighbours on its side, so
    /// single protruding cells do not break a run of tiles.
    Melded,
}

impl AutotileSolver {
    /// The autotile index of `position` for cells holding `value`.
    ///
    /// Out-of-zone positions yield 15, and every neighbour sampled
    /// past the zone boundary reads as a match, so geometry continues
    /// seamlessly off the edge of the zone.
    pub fn index<T: PartialEq>(self, zone: &Zone<T>, position: Offset2, value: &T) -> u8 {
        if !zone.within(position) {
            return SOLID_INDEX;
        }

        let hit = |direction: Compass| sample(zone, position, direction, value);

        match self {
            Self::MarchingSquares => {
                let mut index = 0;
                if hit(Compass::NORTHWEST) {
                    index += 8;
                }
                if hit(Compass::NORTH) {
                    index += 4;
                }
                if zone[position] == *value {
                    index += 2;
                }
                if hit(Compass::WEST) {
                    index += 1;
                }
                index
            }
            Self::Melded => {
                let mut index = 0;
                if hit(Compass::NORTHWEST) && hit(Compass::NORTH) && hit(Compass::WEST) {
                    index += 8;
                }
                if hit(Compass::NORTH) && hit(Compass::NORTHEAST) && hit(Compass::EAST) {
                    index += 4;
                }
                if hit(Compass::EAST) && hit(Compass::SOUTHEAST) && hit(Compass::SOUTH) {
                    index += 2;
                }
                if hit(Compass::WEST) && hit(Compass::SOUTHWEST) && hit(Compass::SOUTH) {
                    index += 1;
                }
                index
            }
        }
    }

    /// [`AutotileSolver::index`] without boundary handling.
    ///
    /// Contract: all eight neighbours of `position` are in-grid, i.e.
    /// the cell is not on a grid edge. Violations panic.
    pub fn index_interior<T: PartialEq>(
        self,
        zone: &Zone<T>,
        position: Offset2,
        value: &T,
    ) -> u8 {
        let hit = |direction: Compass| zone[position + direction.unit_offset()] == *value;

        match self {
            Self::MarchingSquares => {
                let mut index = 0;
                if hit(Compass::NORTHWEST) {
                    index += 8;
                }
                if hit(Compass::NORTH) {
                    index += 4;
                }
                if zone[position] == *value {
                    index += 2;
                }
                if hit(Compass::WEST) {
                    index += 1;
                }
                index
            }
            Self::Melded => {
                let mut index = 0;
                if hit(Compass::NORTHWEST) && hit(Compass::NORTH) && hit(Compass::WEST) {
                    index += 8;
                }
                if hit(Compass::NORTH) && hit(Compass::NORTHEAST) && hit(Compass::EAST) {
                    index += 4;
                }
                if hit(Compass::EAST) && hit(Compass::SOUTHEAST) && hit(Compass::SOUTH) {
                    index += 2;
                }
                if hit(Compass::WEST) && hit(Compass::SOUTHWEST) && hit(Compass::SOUTH) {
                    index += 1;
                }
                index
            }
        }
    }
}

/// One boundary-aware neighbour sample: an off-zone neighbour counts
/// as a match, an in-zone neighbour is read and compared.
fn sample<T: PartialEq>(
    zone: &Zone<T>,
    position: Offset2,
    direction: Compass,
    value: &T,
) -> bool {
    let neighbour = position + direction.unit_offset();
    !zone.within(neighbour) || zone[neighbour] == *value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::Region;
    use karst_geom::Extent2;

    fn p(x: i32, y: i32) -> Offset2 {
        Offset2::new(x, y)
    }

    fn zone(w: u32, h: u32) -> Zone<bool> {
        Zone::new(Extent2::new(w, h), Extent2::new(1, 1)).unwrap()
    }

    // ── Marching squares ────────────────────────────────────────

    #[test]
    fn out_of_zone_is_fully_solid() {
        let z = zone(5, 5);
        assert_eq!(AutotileSolver::MarchingSquares.index(&z, p(-1, 2), &true), 15);
        assert_eq!(AutotileSolver::Melded.index(&z, p(5, 0), &true), 15);
    }

    #[test]
    fn marching_squares_reads_the_own_block() {
        let mut z = zone(6, 6);
        z[p(2, 2)] = true; // NW of (3, 3)
        z[p(3, 2)] = true; // N
        z[p(3, 3)] = true; // self
        z[p(2, 3)] = true; // W
        assert_eq!(AutotileSolver::MarchingSquares.index(&z, p(3, 3), &true), 15);

        z[p(3, 2)] = false;
        assert_eq!(AutotileSolver::MarchingSquares.index(&z, p(3, 3), &true), 11);
        z[p(2, 2)] = false;
        assert_eq!(AutotileSolver::MarchingSquares.index(&z, p(3, 3), &true), 3);
    }

    #[test]
    fn marching_squares_matches_interior_variant_off_edge() {
        let mut z = zone(7, 7);
        z.set(Region::Border, &true);
        z[p(3, 3)] = true;
        z[p(2, 2)] = true;
        for (x, y) in [(3, 3), (2, 2), (4, 4), (3, 2)] {
            let pos = p(x, y);
            assert_eq!(
                AutotileSolver::MarchingSquares.index(&z, pos, &true),
                AutotileSolver::MarchingSquares.index_interior(&z, pos, &true),
            );
        }
    }

    #[test]
    fn solid_zone_corner_continues_past_the_boundary() {
        let mut z = zone(5, 5);
        z.set(Region::All, &true);
        // Every off-zone neighbour of the corner reads as a match,
        // including the diagonals the Melded trios reach.
        assert_eq!(AutotileSolver::MarchingSquares.index(&z, p(0, 0), &true), 15);
        assert_eq!(AutotileSolver::Melded.index(&z, p(0, 0), &true), 15);
    }

    #[test]
    fn empty_zone_corner_still_matches_off_zone() {
        let z = zone(5, 5);
        // NW, N, and W of the corner lie off the zone and match; only
        // the self bit misses.
        assert_eq!(AutotileSolver::MarchingSquares.index(&z, p(0, 0), &true), 13);
    }

    // ── Melded ──────────────────────────────────────────────────

    #[test]
    fn melded_requires_the_full_trio() {
        let mut z = zone(7, 7);
        // Only the northern trio of (3, 3) is solid.
        for (x, y) in [(2, 2), (3, 2), (4, 2), (2, 3), (4, 3)] {
            z[p(x, y)] = true;
        }
        // Bit 8 needs NW+N+W: W=(2,3) is solid, so it holds. Bit 4
        // needs N+NE+E: E=(4,3) is solid, so it holds too. The
        // southern bits miss on S.
        assert_eq!(AutotileSolver::Melded.index(&z, p(3, 3), &true), 12);

        z[p(4, 3)] = false;
        assert_eq!(AutotileSolver::Melded.index(&z, p(3, 3), &true), 8);
    }

    #[test]
    fn melded_ignores_a_single_protrusion() {
        let mut z = zone(7, 7);
        z[p(3, 2)] = true; // lone northern neighbour
        assert_eq!(AutotileSolver::Melded.index(&z, p(3, 3), &true), 0);
    }

    #[test]
    fn melded_fully_surrounded_is_fifteen() {
        let mut z = zone(7, 7);
        z.set(Region::All, &true);
        z[p(3, 3)] = false;
        assert_eq!(AutotileSolver::Melded.index(&z, p(3, 3), &true), 15);
        assert_eq!(AutotileSolver::Melded.index_interior(&z, p(3, 3), &true), 15);
    }
}
