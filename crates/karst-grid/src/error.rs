//! Error types for grid construction and access.

use std::fmt;

/// Errors arising from grid construction or checked access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    Empty,
    /// The cell buffer would exceed the maximum allocation.
    TooLarge {
        /// Requested buffer size in bytes.
        bytes: usize,
        /// The allocation ceiling.
        max: usize,
    },
    /// A linear index is outside the cell buffer.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of cells in the grid.
        len: usize,
    },
    /// A coordinate is outside the grid's shape.
    CoordOutOfBounds {
        /// The offending coordinate, formatted.
        coord: String,
        /// The grid's shape, formatted.
        bounds: String,
    },
    /// Two grids expected to share a shape do not.
    ShapeMismatch {
        /// Shape of the receiving grid, formatted.
        expected: String,
        /// Shape of the other grid, formatted.
        actual: String,
    },
    /// A provided cell buffer does not match the shape's cell count.
    LengthMismatch {
        /// Cell count the shape requires.
        expected: usize,
        /// Cell count provided.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one cell"),
            Self::TooLarge { bytes, max } => {
                write!(f, "grid buffer of {bytes} bytes exceeds the {max} byte maximum")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for grid of {len} cells")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds for grid {bounds}")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "grid shape mismatch: expected {expected}, got {actual}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "cell buffer length mismatch: expected {expected} cells, got {actual}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let err = GridError::CoordOutOfBounds {
            coord: "(5, -1)".into(),
            bounds: "4x4".into(),
        };
        assert_eq!(
            err.to_string(),
            "coordinate (5, -1) out of bounds for grid 4x4"
        );

        let err = GridError::LengthMismatch { expected: 16, actual: 9 };
        assert_eq!(
            err.to_string(),
            "cell buffer length mismatch: expected 16 cells, got 9"
        );
    }
}
