//! Integer Bresenham line walks.

use crate::offset::Offset2;
use std::iter::FusedIterator;

/// An iterator over the cells of a Bresenham line, origin through target
/// inclusive.
///
/// The walk uses the classic decision variables: `err` starts at
/// `delta.x - delta.y` and each step compares `2 * err` against
/// `-delta.y` and `delta.x`, advancing x and/or y accordingly. A
/// diagonal move advances both axes in a single step, so the visited
/// cells of a 45-degree line are exactly the diagonal.
///
/// # Examples
///
/// ```
/// use karst_geom::{Bresenham, Offset2};
///
/// let cells: Vec<_> = Bresenham::new(Offset2::new(0, 0), Offset2::new(2, 2)).collect();
/// assert_eq!(cells, vec![
///     Offset2::new(0, 0),
///     Offset2::new(1, 1),
///     Offset2::new(2, 2),
/// ]);
/// ```
#[derive(Clone, Debug)]
pub struct Bresenham {
    current: Offset2,
    target: Offset2,
    delta: Offset2,
    step: Offset2,
    err: i32,
    done: bool,
}

impl Bresenham {
    /// Begin a walk from `origin` to `target`.
    pub fn new(origin: Offset2, target: Offset2) -> Self {
        let delta = Offset2::new(
            (target.x - origin.x).abs(),
            (target.y - origin.y).abs(),
        );
        let step = Offset2::new(
            if origin.x < target.x { 1 } else { -1 },
            if origin.y < target.y { 1 } else { -1 },
        );

        Self {
            current: origin,
            target,
            delta,
            step,
            err: delta.x - delta.y,
            done: false,
        }
    }
}

impl Iterator for Bresenham {
    type Item = Offset2;

    fn next(&mut self) -> Option<Offset2> {
        if self.done {
            return None;
        }

        let position = self.current;

        if position == self.target {
            self.done = true;
            return Some(position);
        }

        let e2 = 2 * self.err;

        if e2 > -self.delta.y {
            self.err -= self.delta.y;
            self.current.x += self.step.x;
        }

        if e2 < self.delta.x {
            self.err += self.delta.x;
            self.current.y += self.step.y;
        }

        Some(position)
    }
}

impl FusedIterator for Bresenham {}
