//! Signed integer coordinates into grids.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A one-dimensional coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset1 {
    /// Horizontal component.
    pub x: i32,
}

/// A two-dimensional coordinate.
///
/// The y axis grows southward: `NORTH` is `(0, -1)`, matching row-major
/// grids whose first row is the top of the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset2 {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

/// A three-dimensional coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset3 {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
    /// Depth component.
    pub z: i32,
}

impl Offset1 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0 };

    /// Construct an offset.
    pub const fn new(x: i32) -> Self {
        Self { x }
    }
}

impl Offset2 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Unit offset one cell north.
    pub const NORTH: Self = Self { x: 0, y: -1 };
    /// Unit offset one cell south.
    pub const SOUTH: Self = Self { x: 0, y: 1 };
    /// Unit offset one cell east.
    pub const EAST: Self = Self { x: 1, y: 0 };
    /// Unit offset one cell west.
    pub const WEST: Self = Self { x: -1, y: 0 };
    /// Unit offset one cell northwest.
    pub const NORTHWEST: Self = Self { x: -1, y: -1 };
    /// Unit offset one cell northeast.
    pub const NORTHEAST: Self = Self { x: 1, y: -1 };
    /// Unit offset one cell southwest.
    pub const SOUTHWEST: Self = Self { x: -1, y: 1 };
    /// Unit offset one cell southeast.
    pub const SOUTHEAST: Self = Self { x: 1, y: 1 };

    /// Construct an offset.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dx = (self.x as i64 - other.x as i64) as f64;
        let dy = (self.y as i64 - other.y as i64) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Chebyshev (king-move) distance to `other`: diagonal steps cost one.
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();
        dx.max(dy) as u32
    }

    /// Manhattan (taxicab) distance to `other`.
    pub fn manhattan_distance(self, other: Self) -> u64 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();
        dx + dy
    }
}

impl Offset3 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Construct an offset.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dx = (self.x as i64 - other.x as i64) as f64;
        let dy = (self.y as i64 - other.y as i64) as f64;
        let dz = (self.z as i64 - other.z as i64) as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Chebyshev distance to `other`.
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();
        let dz = (self.z as i64 - other.z as i64).unsigned_abs();
        dx.max(dy).max(dz) as u32
    }

    /// Manhattan distance to `other`.
    pub fn manhattan_distance(self, other: Self) -> u64 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();
        let dz = (self.z as i64 - other.z as i64).unsigned_abs();
        dx + dy + dz
    }
}

macro_rules! offset_arith {
    ($ty:ident, $($field:ident),+) => {
        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl Neg for $ty {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }
    };
}

offset_arith!(Offset1, x);
offset_arith!(Offset2, x, y);
offset_arith!(Offset3, x, y, z);

impl fmt::Display for Offset1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.x)
    }
}

impl fmt::Display for Offset2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Offset3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
