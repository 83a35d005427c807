//! Error types for zone construction and operations.

use karst_grid::{CodecError, GridError};
use std::fmt;

/// Errors arising from zone construction or zone operations.
#[derive(Debug)]
pub enum ZoneError {
    /// The border does not fit inside the zone twice over.
    BorderTooLarge {
        /// The zone's extent, formatted.
        size: String,
        /// The requested border, formatted.
        border: String,
    },
    /// A probability argument is outside `0.0..=1.0`.
    Probability {
        /// The offending value.
        value: f64,
    },
    /// A sampling range is inverted or otherwise unusable.
    InvalidRange {
        /// What was wrong with the range.
        reason: String,
    },
    /// An underlying grid operation failed.
    Grid(GridError),
    /// Reading or writing a zone dump failed.
    Codec(CodecError),
}

impl From<GridError> for ZoneError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl From<CodecError> for ZoneError {
    fn from(err: CodecError) -> Self {
        Self::Codec(err)
    }
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BorderTooLarge { size, border } => {
                write!(f, "border {border} does not fit twice inside zone {size}")
            }
            Self::Probability { value } => {
                write!(f, "probability {value} is outside 0.0..=1.0")
            }
            Self::InvalidRange { reason } => write!(f, "invalid sampling range: {reason}"),
            Self::Grid(err) => write!(f, "grid operation failed: {err}"),
            Self::Codec(err) => write!(f, "zone dump failed: {err}"),
        }
    }
}

impl std::error::Error for ZoneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::Codec(err) => Some(err),
            _ => None,
        }
    }
}
