//! Compass direction flags.

use crate::offset::Offset2;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of compass direction flags packed into one byte.
///
/// The four cardinal directions are the primitive bits; the diagonals
/// are their unions, so `NORTHWEST.contains(NORTH)` holds. The empty
/// set is [`Compass::CENTRAL`], the edge state of a cell touching no
/// grid boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Compass(u8);

impl Compass {
    /// The empty flag set: no boundary in any direction.
    pub const CENTRAL: Self = Self(0);
    /// North flag.
    pub const NORTH: Self = Self(1 << 0);
    /// South flag.
    pub const SOUTH: Self = Self(1 << 1);
    /// East flag.
    pub const EAST: Self = Self(1 << 2);
    /// West flag.
    pub const WEST: Self = Self(1 << 3);
    /// Northwest: the union of north and west.
    pub const NORTHWEST: Self = Self(Self::NORTH.0 | Self::WEST.0);
    /// Northeast: the union of north and east.
    pub const NORTHEAST: Self = Self(Self::NORTH.0 | Self::EAST.0);
    /// Southwest: the union of south and west.
    pub const SOUTHWEST: Self = Self(Self::SOUTH.0 | Self::WEST.0);
    /// Southeast: the union of south and east.
    pub const SOUTHEAST: Self = Self(Self::SOUTH.0 | Self::EAST.0);

    /// The eight named directions in scan order: NW, N, NE, W, E, SW, S, SE.
    pub const DIRECTIONS: [Self; 8] = [
        Self::NORTHWEST,
        Self::NORTH,
        Self::NORTHEAST,
        Self::WEST,
        Self::EAST,
        Self::SOUTHWEST,
        Self::SOUTH,
        Self::SOUTHEAST,
    ];

    /// Whether every flag of `flags` is set in `self`.
    pub const fn contains(self, flags: Self) -> bool {
        self.0 & flags.0 == flags.0
    }

    /// Whether no flag is set.
    pub const fn is_central(self) -> bool {
        self.0 == 0
    }

    /// The unit offset of one of the eight named directions.
    ///
    /// [`Compass::CENTRAL`] (and any unnamed combination) maps to the
    /// zero offset.
    pub fn unit_offset(self) -> Offset2 {
        match self {
            Self::NORTH => Offset2::NORTH,
            Self::SOUTH => Offset2::SOUTH,
            Self::EAST => Offset2::EAST,
            Self::WEST => Offset2::WEST,
            Self::NORTHWEST => Offset2::NORTHWEST,
            Self::NORTHEAST => Offset2::NORTHEAST,
            Self::SOUTHWEST => Offset2::SOUTHWEST,
            Self::SOUTHEAST => Offset2::SOUTHEAST,
            _ => Offset2::ZERO,
        }
    }

    /// Decompose into the cardinal flags present, in N, S, E, W order.
    pub fn components(self) -> SmallVec<[Self; 2]> {
        let mut out = SmallVec::new();
        for cardinal in [Self::NORTH, Self::SOUTH, Self::EAST, Self::WEST] {
            if self.contains(cardinal) {
                out.push(cardinal);
            }
        }
        out
    }
}

impl BitOr for Compass {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Compass {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::CENTRAL => "Central",
            Self::NORTH => "North",
            Self::SOUTH => "South",
            Self::EAST => "East",
            Self::WEST => "West",
            Self::NORTHWEST => "Northwest",
            Self::NORTHEAST => "Northeast",
            Self::SOUTHWEST => "Southwest",
            Self::SOUTHEAST => "Southeast",
            _ => return write!(f, "Compass({:#06b})", self.0),
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonals_contain_their_cardinals() {
        assert!(Compass::NORTHWEST.contains(Compass::NORTH));
        assert!(Compass::NORTHWEST.contains(Compass::WEST));
        assert!(!Compass::NORTHWEST.contains(Compass::EAST));
        assert!(!Compass::NORTHWEST.contains(Compass::NORTHEAST));
    }

    #[test]
    fn central_contains_nothing() {
        for dir in Compass::DIRECTIONS {
            assert!(!Compass::CENTRAL.contains(dir));
        }
        assert!(Compass::CENTRAL.is_central());
    }

    #[test]
    fn union_builds_diagonals() {
        assert_eq!(Compass::NORTH | Compass::WEST, Compass::NORTHWEST);
        let mut state = Compass::CENTRAL;
        state |= Compass::SOUTH;
        state |= Compass::EAST;
        assert_eq!(state, Compass::SOUTHEAST);
    }

    #[test]
    fn unit_offsets_match_directions() {
        assert_eq!(Compass::NORTH.unit_offset(), Offset2::new(0, -1));
        assert_eq!(Compass::SOUTHEAST.unit_offset(), Offset2::new(1, 1));
        assert_eq!(Compass::CENTRAL.unit_offset(), Offset2::ZERO);
    }

    #[test]
    fn components_split_diagonals() {
        let parts = Compass::SOUTHWEST.components();
        assert_eq!(parts.as_slice(), &[Compass::SOUTH, Compass::WEST]);
        assert!(Compass::CENTRAL.components().is_empty());
    }

    #[test]
    fn display_names() {
        assert_eq!(Compass::CENTRAL.to_string(), "Central");
        assert_eq!(Compass::NORTHWEST.to_string(), "Northwest");
    }
}
