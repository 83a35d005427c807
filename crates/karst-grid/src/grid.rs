//! The fixed-shape grid container.

use crate::error::GridError;
use karst_geom::{Extent1, Extent2, Extent3, Offset1, Offset2, Offset3, Shape};
use std::mem;
use std::ops::{Index, IndexMut};

/// Maximum cell buffer size in bytes (1 GiB).
pub const MAX_GRID_BYTES: usize = 1 << 30;

/// A fixed-capacity, contiguous, row-major store of cell values.
///
/// The shape is fixed at construction and never changes; there is no
/// resize. Checked access goes through [`Grid::at`] / [`Grid::at_mut`]
/// (and the linear-index equivalents); the `Index` operators are the
/// caller-guaranteed variant and panic on an out-of-range index or
/// coordinate.
///
/// # Examples
///
/// ```
/// use karst_geom::{Extent2, Offset2};
/// use karst_grid::Layer;
///
/// let mut grid: Layer<u8> = Layer::new(Extent2::new(4, 3)).unwrap();
/// grid[Offset2::new(2, 1)] = 7;
/// assert_eq!(*grid.at(Offset2::new(2, 1)).unwrap(), 7);
/// assert!(grid.at(Offset2::new(4, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T, S: Shape> {
    shape: S,
    cells: Box<[T]>,
}

/// A one-dimensional grid.
pub type Row<T> = Grid<T, Extent1>;
/// A two-dimensional grid.
pub type Layer<T> = Grid<T, Extent2>;
/// A three-dimensional grid.
pub type Volume<T> = Grid<T, Extent3>;

impl<T, S: Shape> Grid<T, S> {
    fn validate(shape: S) -> Result<usize, GridError> {
        let len = shape.len();
        if len == 0 {
            return Err(GridError::Empty);
        }
        let bytes = len
            .checked_mul(mem::size_of::<T>())
            .ok_or(GridError::TooLarge { bytes: usize::MAX, max: MAX_GRID_BYTES })?;
        if bytes > MAX_GRID_BYTES {
            return Err(GridError::TooLarge { bytes, max: MAX_GRID_BYTES });
        }
        Ok(len)
    }

    /// Create a grid of default-initialised cells.
    ///
    /// Returns `Err(GridError::Empty)` for a zero-cell shape and
    /// `Err(GridError::TooLarge)` when the buffer would exceed
    /// [`MAX_GRID_BYTES`].
    pub fn new(shape: S) -> Result<Self, GridError>
    where
        T: Default + Clone,
    {
        let len = Self::validate(shape)?;
        Ok(Self { shape, cells: vec![T::default(); len].into_boxed_slice() })
    }

    /// Create a grid with every cell set to `value`.
    pub fn filled(shape: S, value: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let len = Self::validate(shape)?;
        Ok(Self { shape, cells: vec![value; len].into_boxed_slice() })
    }

    /// Create a grid from an existing cell buffer in row-major order.
    ///
    /// Returns `Err(GridError::LengthMismatch)` if `cells.len()` does
    /// not equal the shape's cell count.
    pub fn from_vec(shape: S, cells: Vec<T>) -> Result<Self, GridError> {
        let len = Self::validate(shape)?;
        if cells.len() != len {
            return Err(GridError::LengthMismatch { expected: len, actual: cells.len() });
        }
        Ok(Self { shape, cells: cells.into_boxed_slice() })
    }

    /// The grid's shape.
    pub fn shape(&self) -> S {
        self.shape
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `offset` addresses a cell of this grid.
    pub fn contains(&self, offset: S::Index) -> bool {
        self.shape.contains(offset)
    }

    /// Checked read by coordinate.
    pub fn at(&self, offset: S::Index) -> Result<&T, GridError> {
        if !self.shape.contains(offset) {
            return Err(GridError::CoordOutOfBounds {
                coord: offset.to_string(),
                bounds: self.shape.to_string(),
            });
        }
        Ok(&self.cells[self.shape.flatten(offset)])
    }

    /// Checked write access by coordinate.
    pub fn at_mut(&mut self, offset: S::Index) -> Result<&mut T, GridError> {
        if !self.shape.contains(offset) {
            return Err(GridError::CoordOutOfBounds {
                coord: offset.to_string(),
                bounds: self.shape.to_string(),
            });
        }
        Ok(&mut self.cells[self.shape.flatten(offset)])
    }

    /// Checked read by linear index.
    pub fn at_index(&self, index: usize) -> Result<&T, GridError> {
        self.cells
            .get(index)
            .ok_or(GridError::IndexOutOfBounds { index, len: self.cells.len() })
    }

    /// Checked write access by linear index.
    pub fn at_index_mut(&mut self, index: usize) -> Result<&mut T, GridError> {
        let len = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or(GridError::IndexOutOfBounds { index, len })
    }

    /// Iterate cells in linear (row-major) order.
    ///
    /// The iterator is double-ended; `iter().rev()` is the matching
    /// reverse sequence.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterate cells mutably in linear order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// Iterate `(coordinate, cell)` pairs in linear order.
    pub fn enumerate(&self) -> impl Iterator<Item = (S::Index, &T)> {
        let shape = self.shape;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (shape.unflatten(i), cell))
    }

    /// The raw cell buffer in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// The raw cell buffer, mutably.
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Exchange cell buffers with `other` in O(1).
    ///
    /// Returns `Err(GridError::ShapeMismatch)` if the shapes disagree;
    /// no cells move in that case.
    pub fn swap(&mut self, other: &mut Self) -> Result<(), GridError> {
        if self.shape != other.shape {
            return Err(GridError::ShapeMismatch {
                expected: self.shape.to_string(),
                actual: other.shape.to_string(),
            });
        }
        mem::swap(&mut self.cells, &mut other.cells);
        Ok(())
    }

    /// Copy every cell from `other` into this grid.
    ///
    /// Element-wise alternative to [`Grid::swap`] for callers that need
    /// `other` left intact.
    pub fn sync(&mut self, other: &Self) -> Result<(), GridError>
    where
        T: Clone,
    {
        if self.shape != other.shape {
            return Err(GridError::ShapeMismatch {
                expected: self.shape.to_string(),
                actual: other.shape.to_string(),
            });
        }
        self.cells.clone_from_slice(&other.cells);
        Ok(())
    }
}

impl<T, S: Shape> Index<usize> for Grid<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.cells[index]
    }
}

impl<T, S: Shape> IndexMut<usize> for Grid<T, S> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.cells[index]
    }
}

// Coordinate indexing is implemented per concrete shape rather than
// over `S::Index`: coherence treats the unresolved projection as
// possibly overlapping the `usize` impls above.
macro_rules! coord_index {
    ($shape:ty, $offset:ty) => {
        impl<T> Index<$offset> for Grid<T, $shape> {
            type Output = T;

            /// Caller-guaranteed access: panics if `offset` is out of bounds.
            fn index(&self, offset: $offset) -> &T {
                match self.at(offset) {
                    Ok(cell) => cell,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl<T> IndexMut<$offset> for Grid<T, $shape> {
            fn index_mut(&mut self, offset: $offset) -> &mut T {
                if !self.shape.contains(offset) {
                    panic!(
                        "coordinate {} out of bounds for grid {}",
                        offset, self.shape
                    );
                }
                let index = self.shape.flatten(offset);
                &mut self.cells[index]
            }
        }
    };
}

coord_index!(Extent1, Offset1);
coord_index!(Extent2, Offset2);
coord_index!(Extent3, Offset3);

impl<'a, T, S: Shape> IntoIterator for &'a Grid<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S: Shape> IntoIterator for &'a mut Grid<T, S> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
