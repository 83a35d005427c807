//! Line-of-sight queries over zone cells.

use crate::zone::Zone;
use karst_geom::{Bresenham, Offset2};

impl<T: PartialEq> Zone<T> {
    /// Whether a cell blocks sight: off-zone positions block, in-zone
    /// positions block when they hold `value`.
    fn blocks(&self, position: Offset2, value: &T) -> bool {
        !self.within(position) || self[position] == *value
    }

    /// Whether the straight line from `origin` to `target` is blocked
    /// by a cell holding `value`.
    ///
    /// Either endpoint blocking settles the query as blocked before
    /// any stepping. Otherwise the Bresenham trace is walked from
    /// `origin`, checking each cell before stepping; reaching `target`
    /// without a hit is a clear line. Off-zone cells block, endpoints
    /// included.
    pub fn line_blocked(&self, origin: Offset2, target: Offset2, value: &T) -> bool {
        if self.blocks(origin, value) || self.blocks(target, value) {
            return true;
        }
        for position in Bresenham::new(origin, target) {
            if position == target {
                return false;
            }
            if self.blocks(position, value) {
                return true;
            }
        }
        false
    }

    /// [`Zone::line_blocked`] capped at `max_steps` cells of travel.
    ///
    /// Endpoint checks stay immediate. Along the walk, the cell
    /// exactly `max_steps` from the origin is still checked; past that
    /// the walk gives up and reports the line unblocked, so a bounded
    /// query never sees a block the unbounded one misses.
    pub fn line_blocked_within(
        &self,
        origin: Offset2,
        target: Offset2,
        value: &T,
        max_steps: u32,
    ) -> bool {
        if self.blocks(origin, value) || self.blocks(target, value) {
            return true;
        }
        for (steps, position) in Bresenham::new(origin, target).enumerate() {
            if steps > max_steps as usize {
                return false;
            }
            if position == target {
                return false;
            }
            if self.blocks(position, value) {
                return true;
            }
        }
        false
    }
}
