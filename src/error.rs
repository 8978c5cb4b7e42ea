//! Error type for board access.

use thiserror::Error;

/// Errors produced by [`Board`][crate::board::Board] and
/// [`Row`][crate::row::Row] operations.
///
/// There is exactly one failure mode: addressing a row or column outside
/// `[0, N)`. This is a caller-contract violation, so operations fail fast
/// and leave all state untouched rather than clamping the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A row or column index was outside the board.
    #[error("index {index} is out of range for board of size {size}")]
    OutOfRange { index: usize, size: usize },
}

impl Error {
    /// Checks `index < size`, returning `OutOfRange` otherwise.
    pub(crate) fn check_index(index: usize, size: usize) -> Result<(), Error> {
        if index < size {
            Ok(())
        } else {
            Err(Error::OutOfRange { index, size })
        }
    }
}
