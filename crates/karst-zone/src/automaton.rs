//! Cellular-automaton smoothing and cave generation.
//!
//! Generation ping-pongs between the zone's cells and a caller-supplied
//! scratch buffer: each pass reads the current cells, writes the
//! buffer, then the two are swapped in O(1). A pass writes every
//! visited cell except exact threshold ties, which leave the buffer
//! cell untouched.

use crate::applicator::BinaryApplicator;
use crate::error::ZoneError;
use crate::zone::{walk_region, Region, Zone};
use karst_geom::{Compass, Offset2};
use karst_grid::{GridError, Layer};
use rand::Rng;
use std::cmp::Ordering;

impl<T: PartialEq> Zone<T> {
    /// Count the Moore neighbours of `position` equal to `value`,
    /// boundary-aware.
    ///
    /// A direction whose boundary flags are all present in the cell's
    /// edge state counts as a match, so the world outside the zone
    /// reads as solid. A diagonal only partially covered by the edge
    /// state is read normally and misses when off-grid.
    pub fn neighbour_count(&self, position: Offset2, value: &T) -> usize {
        let edge = self.edge_state(position);
        let mut count = 0;

        for direction in Compass::DIRECTIONS {
            if edge.contains(direction) {
                count += 1;
                continue;
            }
            let neighbour = position + direction.unit_offset();
            if self.within(neighbour) && self[neighbour] == *value {
                count += 1;
            }
        }
        count
    }

    /// [`Zone::neighbour_count`] without boundary handling.
    ///
    /// Contract: all eight neighbours of `position` are in-grid, i.e.
    /// the cell is not on a grid edge. Violations panic.
    pub fn neighbour_count_interior(&self, position: Offset2, value: &T) -> usize {
        Compass::DIRECTIONS
            .iter()
            .filter(|direction| self[position + direction.unit_offset()] == *value)
            .count()
    }
}

impl<T: Clone + PartialEq> Zone<T> {
    /// Run one cell of a smoothing pass, writing the outcome into
    /// `buffer`.
    ///
    /// More neighbours than `threshold` writes the applicator's true
    /// value, fewer writes the false value, and an exact tie writes
    /// nothing, leaving whatever the buffer already held there.
    pub fn modulate_into(
        &self,
        buffer: &mut Layer<T>,
        position: Offset2,
        threshold: usize,
        applicator: &BinaryApplicator<T>,
    ) {
        let count = if self.on_edge(position) {
            self.neighbour_count(position, applicator.true_value())
        } else {
            self.neighbour_count_interior(position, applicator.true_value())
        };

        match count.cmp(&threshold) {
            Ordering::Greater => buffer[position] = applicator.true_value().clone(),
            Ordering::Less => buffer[position] = applicator.false_value().clone(),
            Ordering::Equal => {}
        }
    }

    /// [`Zone::modulate_into`] without boundary handling.
    ///
    /// Contract: all eight neighbours of `position` are in-grid.
    /// Violations panic.
    pub fn modulate_into_interior(
        &self,
        buffer: &mut Layer<T>,
        position: Offset2,
        threshold: usize,
        applicator: &BinaryApplicator<T>,
    ) {
        let count = self.neighbour_count_interior(position, applicator.true_value());
        match count.cmp(&threshold) {
            Ordering::Greater => buffer[position] = applicator.true_value().clone(),
            Ordering::Less => buffer[position] = applicator.false_value().clone(),
            Ordering::Equal => {}
        }
    }

    /// Run one full smoothing pass over `region` into `buffer`,
    /// without swapping. The buffer must match the zone's extent.
    pub fn smooth_into(
        &self,
        buffer: &mut Layer<T>,
        region: Region,
        threshold: usize,
        applicator: &BinaryApplicator<T>,
    ) -> Result<(), ZoneError> {
        if buffer.shape() != self.extent() {
            return Err(GridError::ShapeMismatch {
                expected: self.extent().to_string(),
                actual: buffer.shape().to_string(),
            }
            .into());
        }

        walk_region(self.extent(), self.border(), region, &mut |position| {
            self.modulate_into(buffer, position, threshold, applicator);
        });
        Ok(())
    }

    /// Run `iterations` smoothing passes over `region`.
    ///
    /// Each pass writes into `buffer` and swaps it with the cells, so
    /// on return `buffer` holds the previous pass. The buffer must
    /// match the zone's extent.
    pub fn smooth(
        &mut self,
        buffer: &mut Layer<T>,
        region: Region,
        iterations: u32,
        threshold: usize,
        applicator: &BinaryApplicator<T>,
    ) -> Result<(), ZoneError> {
        for _ in 0..iterations {
            self.smooth_into(buffer, region, threshold, applicator)?;
            self.swap(buffer)?;
        }
        Ok(())
    }

    /// Generate a zone: randomize `region`, smooth it, and settle the
    /// buffers with a closing swap.
    pub fn generate<R: Rng>(
        &mut self,
        rng: &mut R,
        region: Region,
        fill: f64,
        iterations: u32,
        threshold: usize,
        applicator: &BinaryApplicator<T>,
    ) -> Result<(), ZoneError> {
        let mut buffer = self.cells().clone();
        self.generate_into(&mut buffer, rng, region, fill, iterations, threshold, applicator)
    }

    /// [`Zone::generate`] reusing a caller-owned scratch buffer.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_into<R: Rng>(
        &mut self,
        buffer: &mut Layer<T>,
        rng: &mut R,
        region: Region,
        fill: f64,
        iterations: u32,
        threshold: usize,
        applicator: &BinaryApplicator<T>,
    ) -> Result<(), ZoneError> {
        self.randomize_with(region, rng, fill, applicator)?;
        buffer.sync(self.cells())?;
        self.smooth(buffer, region, iterations, threshold, applicator)?;
        self.swap(buffer)?;
        Ok(())
    }
}
