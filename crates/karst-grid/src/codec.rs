//! Headerless binary dump of grid cell buffers.
//!
//! A dump is the concatenation of every cell's fixed-width encoding in
//! row-major order, nothing else: no magic, no shape, no checksum. The
//! reader must already know the grid's shape and cell type; a dump
//! whose byte count disagrees with them is rejected whole.

use crate::error::GridError;
use crate::grid::Grid;
use karst_geom::Shape;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Fixed-width binary encoding for a cell type.
///
/// Multi-byte values are little-endian. `encode` writes exactly
/// [`CellCodec::BYTE_LEN`] bytes and `decode` reads exactly that many;
/// both are handed a slice of exactly that length.
pub trait CellCodec: Sized {
    /// Encoded width in bytes.
    const BYTE_LEN: usize;

    /// Write this cell's encoding into `buf` (`BYTE_LEN` bytes).
    fn encode(&self, buf: &mut [u8]);

    /// Reconstruct a cell from `buf` (`BYTE_LEN` bytes).
    fn decode(buf: &[u8]) -> Self;
}

impl CellCodec for u8 {
    const BYTE_LEN: usize = 1;

    fn encode(&self, buf: &mut [u8]) {
        buf[0] = *self;
    }

    fn decode(buf: &[u8]) -> Self {
        buf[0]
    }
}

impl CellCodec for bool {
    const BYTE_LEN: usize = 1;

    fn encode(&self, buf: &mut [u8]) {
        buf[0] = u8::from(*self);
    }

    fn decode(buf: &[u8]) -> Self {
        buf[0] != 0
    }
}

macro_rules! le_codec {
    ($($ty:ty),+) => {$(
        impl CellCodec for $ty {
            const BYTE_LEN: usize = std::mem::size_of::<$ty>();

            fn encode(&self, buf: &mut [u8]) {
                buf.copy_from_slice(&self.to_le_bytes());
            }

            fn decode(buf: &[u8]) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                bytes.copy_from_slice(buf);
                <$ty>::from_le_bytes(bytes)
            }
        }
    )+};
}

le_codec!(u16, u32, i32, f32);

/// Errors arising from reading or writing a binary dump.
#[derive(Debug)]
pub enum CodecError {
    /// An underlying I/O operation failed.
    Io(io::Error),
    /// The dump's byte count does not match the grid's shape.
    ByteCount {
        /// Bytes the grid's shape and cell type require.
        expected: usize,
        /// Bytes the dump actually held.
        actual: usize,
    },
}

impl From<io::Error> for CodecError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "dump i/o failed: {err}"),
            Self::ByteCount { expected, actual } => {
                write!(f, "dump byte count mismatch: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::ByteCount { .. } => None,
        }
    }
}

impl<T: CellCodec, S: Shape> Grid<T, S> {
    /// Number of bytes this grid's dump occupies.
    pub fn dump_len(&self) -> usize {
        self.len() * T::BYTE_LEN
    }

    /// Write every cell's encoding to `writer` in row-major order.
    pub fn write_into<W: Write>(&self, writer: &mut W) -> Result<(), CodecError> {
        let mut buf = vec![0u8; T::BYTE_LEN];
        for cell in self.iter() {
            cell.encode(&mut buf);
            writer.write_all(&buf)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Replace this grid's cells with a dump read from `reader`.
    ///
    /// The reader is drained; a byte count other than exactly
    /// [`Grid::dump_len`] is a [`CodecError::ByteCount`] and leaves the
    /// grid untouched.
    pub fn read_from<R: Read>(&mut self, reader: &mut R) -> Result<(), CodecError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let expected = self.dump_len();
        if bytes.len() != expected {
            return Err(CodecError::ByteCount { expected, actual: bytes.len() });
        }

        for (cell, chunk) in self.iter_mut().zip(bytes.chunks_exact(T::BYTE_LEN)) {
            *cell = T::decode(chunk);
        }
        Ok(())
    }

    /// Dump this grid to a file, creating or truncating it.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CodecError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_into(&mut writer)
    }

    /// Load a dump from a file into a freshly constructed grid.
    pub fn load<P: AsRef<Path>>(shape: S, path: P) -> Result<Self, CodecError>
    where
        T: Default + Clone,
    {
        let mut grid = Self::new(shape).map_err(grid_error_to_io)?;
        let mut reader = BufReader::new(File::open(path)?);
        grid.read_from(&mut reader)?;
        Ok(grid)
    }
}

fn grid_error_to_io(err: GridError) -> CodecError {
    CodecError::Io(io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))
}
