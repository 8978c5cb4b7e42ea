//! A single board row and its threat projection.
//!
//! A [`Row`] knows only two things: how wide the board is and which column
//! (if any) holds its queen. Everything a queen attacks on another row can
//! be computed from its own column and the distance between the rows, so
//! rows never need to reference each other.

use std::collections::BTreeSet;

use crate::error::Error;

/// One horizontal line of the board.
///
/// # Invariants
///
/// - A row holds at most one queen at a time; placing a queen forgets the
///   previous position.
/// - The queen column, when set, is always in `[0, size)`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    size: usize,
    queen: Option<usize>,
}

impl Row {
    /// Creates an empty row for a board of width `size`.
    pub fn new(size: usize) -> Self {
        Self { size, queen: None }
    }

    /// Returns the board width this row belongs to.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the column currently holding this row's queen, if any.
    pub fn queen(&self) -> Option<usize> {
        self.queen
    }

    /// Places this row's queen at `column`.
    ///
    /// Any previously placed queen on this row is removed. Fails with
    /// [`Error::OutOfRange`] (without mutating the row) if `column` is not
    /// in `[0, size)`.
    pub fn place(&mut self, column: usize) -> Result<(), Error> {
        Error::check_index(column, self.size)?;
        self.queen = Some(column);
        Ok(())
    }

    /// Places a column already known to be in range.
    ///
    /// Used by the search, whose candidates are drawn from `[0, size)`.
    pub(crate) fn place_unchecked(&mut self, column: usize) {
        debug_assert!(column < self.size);
        self.queen = Some(column);
    }

    /// Removes this row's queen, if any.
    pub fn clear(&mut self) {
        self.queen = None;
    }

    /// Returns true if this row's queen sits at `column`.
    pub fn has_queen_at(&self, column: usize) -> bool {
        self.queen == Some(column)
    }

    /// Projects this row's queen onto another row at the given distance.
    ///
    /// Two rows separated by `distance >= 1` are attacked on the queen's
    /// own column (the file) and on the columns offset by `±distance` (the
    /// two diagonals), so the result is exactly
    /// `{c - d, c, c + d} ∩ [0, size)` for occupied column `c`.
    ///
    /// Returns the empty set if no queen has been placed yet.
    pub fn threatened(&self, distance: usize) -> BTreeSet<usize> {
        let mut columns = BTreeSet::new();
        let Some(c) = self.queen else {
            return columns;
        };
        if let Some(left) = c.checked_sub(distance) {
            columns.insert(left);
        }
        columns.insert(c);
        if let Some(right) = c.checked_add(distance) {
            if right < self.size {
                columns.insert(right);
            }
        }
        columns
    }
}
