//! Fixed non-negative extents and the [`Shape`] trait.

use crate::offset::{Offset1, Offset2, Offset3};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Unifies extents as grid-length providers.
///
/// A shape knows how many cells it spans and how to map between its
/// offset type and a row-major linear index.
///
/// `flatten` and `unflatten` are a bijection over the shape's cells:
/// for every offset `p` with `contains(p)`, `unflatten(flatten(p)) == p`.
/// Calling `flatten` with an offset outside the shape, or `unflatten`
/// with an index `>= len()`, is a contract violation with an
/// unspecified (but memory-safe) result.
pub trait Shape: Copy + Eq + fmt::Debug + fmt::Display {
    /// Offset type addressing cells of this shape.
    type Index: Copy + Eq + fmt::Debug + fmt::Display;

    /// Total number of cells.
    fn len(&self) -> usize;

    /// Whether the shape spans zero cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major linear index of `offset`.
    fn flatten(&self, offset: Self::Index) -> usize;

    /// Offset addressed by the row-major linear `index`.
    fn unflatten(&self, index: usize) -> Self::Index;

    /// Whether `offset` addresses a cell of this shape.
    fn contains(&self, offset: Self::Index) -> bool;
}

/// A one-dimensional extent: a run of `w` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent1 {
    /// Width in cells.
    pub w: u32,
}

/// A two-dimensional extent: `w * h` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent2 {
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

/// A three-dimensional extent: `w * h * d` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent3 {
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
    /// Depth in cells.
    pub d: u32,
}

impl Extent1 {
    /// The zero extent.
    pub const ZERO: Self = Self { w: 0 };

    /// Construct an extent of `w` cells.
    pub const fn new(w: u32) -> Self {
        Self { w }
    }

    /// Number of cells spanned.
    pub const fn area(self) -> usize {
        self.w as usize
    }

    /// Componentwise `self >= other`.
    pub const fn covers(self, other: Self) -> bool {
        self.w >= other.w
    }

    /// Convert to an offset, or `None` if the component exceeds `i32::MAX`.
    pub fn to_offset(self) -> Option<Offset1> {
        Some(Offset1::new(i32::try_from(self.w).ok()?))
    }
}

impl Extent2 {
    /// The zero extent, also the "no border" sentinel.
    pub const ZERO: Self = Self { w: 0, h: 0 };

    /// Construct a `w * h` extent.
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Number of cells spanned, widened before multiplying.
    pub const fn area(self) -> usize {
        self.w as usize * self.h as usize
    }

    /// Componentwise `self >= other`.
    pub const fn covers(self, other: Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }

    /// Convert to an offset, or `None` if a component exceeds `i32::MAX`.
    pub fn to_offset(self) -> Option<Offset2> {
        Some(Offset2::new(
            i32::try_from(self.w).ok()?,
            i32::try_from(self.h).ok()?,
        ))
    }
}

impl Extent3 {
    /// The zero extent.
    pub const ZERO: Self = Self { w: 0, h: 0, d: 0 };

    /// Construct a `w * h * d` extent.
    pub const fn new(w: u32, h: u32, d: u32) -> Self {
        Self { w, h, d }
    }

    /// Number of cells spanned, widened before multiplying.
    pub const fn area(self) -> usize {
        self.w as usize * self.h as usize * self.d as usize
    }

    /// Componentwise `self >= other`.
    pub const fn covers(self, other: Self) -> bool {
        self.w >= other.w && self.h >= other.h && self.d >= other.d
    }

    /// Convert to an offset, or `None` if a component exceeds `i32::MAX`.
    pub fn to_offset(self) -> Option<Offset3> {
        Some(Offset3::new(
            i32::try_from(self.w).ok()?,
            i32::try_from(self.h).ok()?,
            i32::try_from(self.d).ok()?,
        ))
    }
}

// ── Arithmetic (saturating) ─────────────────────────────────────

impl Add for Extent1 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.w.saturating_add(rhs.w))
    }
}

impl Sub for Extent1 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w.saturating_sub(rhs.w))
    }
}

impl Mul<u32> for Extent1 {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self::new(self.w.saturating_mul(rhs))
    }
}

impl Add for Extent2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.w.saturating_add(rhs.w), self.h.saturating_add(rhs.h))
    }
}

impl Sub for Extent2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w.saturating_sub(rhs.w), self.h.saturating_sub(rhs.h))
    }
}

impl Mul<u32> for Extent2 {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self::new(self.w.saturating_mul(rhs), self.h.saturating_mul(rhs))
    }
}

impl Add for Extent3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.w.saturating_add(rhs.w),
            self.h.saturating_add(rhs.h),
            self.d.saturating_add(rhs.d),
        )
    }
}

impl Sub for Extent3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.w.saturating_sub(rhs.w),
            self.h.saturating_sub(rhs.h),
            self.d.saturating_sub(rhs.d),
        )
    }
}

impl Mul<u32> for Extent3 {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self::new(
            self.w.saturating_mul(rhs),
            self.h.saturating_mul(rhs),
            self.d.saturating_mul(rhs),
        )
    }
}

// ── Shape implementations ───────────────────────────────────────

impl Shape for Extent1 {
    type Index = Offset1;

    fn len(&self) -> usize {
        self.area()
    }

    fn flatten(&self, offset: Offset1) -> usize {
        offset.x as usize
    }

    fn unflatten(&self, index: usize) -> Offset1 {
        Offset1::new(index as i32)
    }

    fn contains(&self, offset: Offset1) -> bool {
        offset.x >= 0 && (offset.x as u32) < self.w
    }
}

impl Shape for Extent2 {
    type Index = Offset2;

    fn len(&self) -> usize {
        self.area()
    }

    fn flatten(&self, offset: Offset2) -> usize {
        offset.y as usize * self.w as usize + offset.x as usize
    }

    fn unflatten(&self, index: usize) -> Offset2 {
        let w = self.w as usize;
        Offset2::new((index % w) as i32, (index / w) as i32)
    }

    fn contains(&self, offset: Offset2) -> bool {
        offset.x >= 0
            && offset.y >= 0
            && (offset.x as u32) < self.w
            && (offset.y as u32) < self.h
    }
}

impl Shape for Extent3 {
    type Index = Offset3;

    fn len(&self) -> usize {
        self.area()
    }

    fn flatten(&self, offset: Offset3) -> usize {
        (offset.z as usize * self.h as usize + offset.y as usize) * self.w as usize
            + offset.x as usize
    }

    fn unflatten(&self, index: usize) -> Offset3 {
        let w = self.w as usize;
        let h = self.h as usize;
        Offset3::new(
            (index % w) as i32,
            ((index / w) % h) as i32,
            (index / (w * h)) as i32,
        )
    }

    fn contains(&self, offset: Offset3) -> bool {
        offset.x >= 0
            && offset.y >= 0
            && offset.z >= 0
            && (offset.x as u32) < self.w
            && (offset.y as u32) < self.h
            && (offset.z as u32) < self.d
    }
}

impl fmt::Display for Extent1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.w)
    }
}

impl fmt::Display for Extent2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

impl fmt::Display for Extent3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.w, self.h, self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Area and arithmetic ─────────────────────────────────────

    #[test]
    fn area_is_component_product() {
        assert_eq!(Extent1::new(7).area(), 7);
        assert_eq!(Extent2::new(80, 45).area(), 3600);
        assert_eq!(Extent3::new(4, 5, 6).area(), 120);
    }

    #[test]
    fn zero_extent_is_empty() {
        assert!(Extent2::ZERO.is_empty());
        assert_eq!(Extent2::ZERO.area(), 0);
    }

    #[test]
    fn area_widens_before_multiplying() {
        let big = Extent2::new(u32::MAX, 2);
        assert_eq!(big.area(), u32::MAX as usize * 2);
    }

    #[test]
    fn subtraction_saturates() {
        let a = Extent2::new(3, 10);
        let b = Extent2::new(5, 4);
        assert_eq!(a - b, Extent2::new(0, 6));
    }

    #[test]
    fn scaling_saturates() {
        assert_eq!(Extent2::new(u32::MAX, 1) * 2, Extent2::new(u32::MAX, 2));
    }

    #[test]
    fn covers_is_componentwise() {
        let zone = Extent2::new(80, 45);
        assert!(zone.covers(Extent2::new(4, 4)));
        assert!(zone.covers(zone));
        assert!(!zone.covers(Extent2::new(81, 4)));
        assert!(!zone.covers(Extent2::new(4, 46)));
    }

    // ── Flatten / unflatten ─────────────────────────────────────

    #[test]
    fn flatten_is_row_major() {
        let e = Extent2::new(5, 3);
        assert_eq!(e.flatten(Offset2::new(0, 0)), 0);
        assert_eq!(e.flatten(Offset2::new(4, 0)), 4);
        assert_eq!(e.flatten(Offset2::new(0, 1)), 5);
        assert_eq!(e.flatten(Offset2::new(4, 2)), 14);
    }

    #[test]
    fn flatten_3d_is_depth_major() {
        let e = Extent3::new(4, 3, 2);
        assert_eq!(e.flatten(Offset3::new(0, 0, 0)), 0);
        assert_eq!(e.flatten(Offset3::new(3, 2, 0)), 11);
        assert_eq!(e.flatten(Offset3::new(0, 0, 1)), 12);
        assert_eq!(e.flatten(Offset3::new(3, 2, 1)), 23);
    }

    #[test]
    fn contains_rejects_out_of_range() {
        let e = Extent2::new(5, 3);
        assert!(e.contains(Offset2::new(0, 0)));
        assert!(e.contains(Offset2::new(4, 2)));
        assert!(!e.contains(Offset2::new(5, 0)));
        assert!(!e.contains(Offset2::new(0, 3)));
        assert!(!e.contains(Offset2::new(-1, 0)));
        assert!(!e.contains(Offset2::new(0, -1)));
    }

    #[test]
    fn to_offset_caps_at_i32_max() {
        assert_eq!(
            Extent2::new(80, 45).to_offset(),
            Some(Offset2::new(80, 45))
        );
        assert_eq!(Extent2::new(u32::MAX, 1).to_offset(), None);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn flatten_unflatten_round_trip_2d(
            w in 1u32..64,
            h in 1u32..64,
            x in 0i32..64,
            y in 0i32..64,
        ) {
            let e = Extent2::new(w, h);
            let p = Offset2::new(x % w as i32, y % h as i32);
            prop_assert!(e.contains(p));
            prop_assert_eq!(e.unflatten(e.flatten(p)), p);
            prop_assert!(e.flatten(p) < e.len());
        }

        #[test]
        fn flatten_is_injective_2d(
            w in 1u32..32,
            h in 1u32..32,
            ax in 0i32..32, ay in 0i32..32,
            bx in 0i32..32, by in 0i32..32,
        ) {
            let e = Extent2::new(w, h);
            let a = Offset2::new(ax % w as i32, ay % h as i32);
            let b = Offset2::new(bx % w as i32, by % h as i32);
            if a != b {
                prop_assert_ne!(e.flatten(a), e.flatten(b));
            }
        }

        #[test]
        fn flatten_unflatten_round_trip_3d(
            w in 1u32..16,
            h in 1u32..16,
            d in 1u32..16,
            x in 0i32..16, y in 0i32..16, z in 0i32..16,
        ) {
            let e = Extent3::new(w, h, d);
            let p = Offset3::new(x % w as i32, y % h as i32, z % d as i32);
            prop_assert!(e.contains(p));
            prop_assert_eq!(e.unflatten(e.flatten(p)), p);
            prop_assert!(e.flatten(p) < e.len());
        }
    }
}
