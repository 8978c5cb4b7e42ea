//! The board and the backtracking search.
//!
//! A [`Board`] owns an ordered sequence of N [`Row`]s and drives a
//! depth-first backtracking search over them. The search processes rows
//! top to bottom: for each row it computes the set of columns not attacked
//! by any queen committed above (see [`Board::legal_columns`]), commits
//! the lowest one, and recurses; when a row runs out of candidates the
//! search backtracks to the previous row's remaining candidates.
//!
//! The search stops at the first full placement. Enumerating or counting
//! all solutions is out of scope.

use std::collections::BTreeSet;

use log::debug;

use crate::error::Error;
use crate::row::Row;

/// An N×N chessboard for the N-Queens problem.
///
/// # Invariants
///
/// During [`solve`][Board::solve], rows `0..k` (for the current search
/// frontier `k`) always hold mutually non-attacking queens; rows at and
/// below the frontier are unset or stale and never consulted.
///
/// # Example
///
/// ```rust
/// use queens_rs::board::Board;
///
/// let mut board = Board::new(8);
/// assert!(board.solve());
/// assert_eq!(board.solution(), Some(vec![0, 4, 7, 5, 2, 6, 1, 3]));
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    rows: Vec<Row>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    pub fn new(size: usize) -> Self {
        Self {
            rows: (0..size).map(|_| Row::new(size)).collect(),
        }
    }

    /// Returns the board size N.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row at `row_index`.
    pub fn row(&self, row_index: usize) -> Result<&Row, Error> {
        Error::check_index(row_index, self.size())?;
        Ok(&self.rows[row_index])
    }

    /// Returns true if a queen occupies the given cell.
    pub fn has_queen(&self, row_index: usize, column_index: usize) -> Result<bool, Error> {
        Error::check_index(column_index, self.size())?;
        Ok(self.row(row_index)?.has_queen_at(column_index))
    }

    /// Places a queen at the given cell.
    ///
    /// Fails with [`Error::OutOfRange`] on either index without mutating
    /// any state. Any queen previously on the row is removed.
    pub fn place(&mut self, row_index: usize, column_index: usize) -> Result<(), Error> {
        Error::check_index(row_index, self.size())?;
        self.rows[row_index].place(column_index)
    }

    /// Computes the columns of `row_index` not attacked by any queen above.
    ///
    /// Starts from the full `{0, .., N-1}` set and removes, for every row
    /// `p < row_index`, the columns that row's queen threatens at distance
    /// `row_index - p`. Rows at and below `row_index` are ignored. The
    /// result iterates in ascending column order.
    pub fn legal_columns(&self, row_index: usize) -> Result<BTreeSet<usize>, Error> {
        Error::check_index(row_index, self.size())?;
        Ok(self.candidates(row_index))
    }

    /// `legal_columns` without the range check, for search-internal rows.
    fn candidates(&self, row_index: usize) -> BTreeSet<usize> {
        let mut candidates: BTreeSet<usize> = (0..self.size()).collect();
        for (p, row) in self.rows[..row_index].iter().enumerate() {
            for threat in row.threatened(row_index - p) {
                candidates.remove(&threat);
            }
        }
        candidates
    }

    /// Searches for a placement of N mutually non-attacking queens.
    ///
    /// Depth-first backtracking: candidates are tried in ascending column
    /// order, so repeated runs always produce the same (lexicographically
    /// smallest) solution. Returns `true` on the first full placement,
    /// which can then be read back via [`solution`][Board::solution] or
    /// [`has_queen`][Board::has_queen].
    ///
    /// Returns `false` when the search space is exhausted (e.g. N = 2 or
    /// N = 3); the board is left without a complete placement. An empty
    /// board (N = 0) is trivially solved.
    pub fn solve(&mut self) -> bool {
        debug!("solve(): searching a {n}x{n} board", n = self.size());
        self.solve_from(0)
    }

    fn solve_from(&mut self, row_index: usize) -> bool {
        if row_index == self.size() {
            return true;
        }
        let candidates = self.candidates(row_index);
        debug!("row {}: candidates {:?}", row_index, candidates);
        for column in candidates {
            self.rows[row_index].place_unchecked(column);
            if self.solve_from(row_index + 1) {
                return true;
            }
        }
        debug!("row {}: exhausted, backtracking", row_index);
        self.rows[row_index].clear();
        false
    }

    /// Returns the per-row column assignment, one column per row.
    ///
    /// `None` unless every row holds a queen.
    pub fn solution(&self) -> Option<Vec<usize>> {
        self.rows.iter().map(Row::queen).collect()
    }
}

impl Default for Board {
    /// The classic 8×8 board.
    fn default() -> Self {
        Self::new(8)
    }
}
