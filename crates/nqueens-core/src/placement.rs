//! Queen placement, one row per column.
//!
//! A [`Placement`] is the only representation of where the queens are.
//! Index `column` holds the row of that column's queen, so every column holds
//! exactly one queen and rows are always in `0..size`.
//!
//! # Text formats
//!
//! - [`Display`] / [`Placement::render`] draws the board: one line per row,
//!   `*` for the queen and `_` for an empty cell, cells separated by a space.
//! - [`FromStr`] reads a row list such as `"1,3,0,2"`, `"1 3 0 2"` or
//!   `"[1, 3, 0, 2]"`.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use rand::{Rng, seq::SliceRandom as _};

use crate::ConflictTables;

/// Cell marker for a queen.
pub const QUEEN: char = '*';

/// Cell marker for an empty cell.
pub const EMPTY: char = '_';

/// Errors that can occur when building a [`Placement`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// The placement has no columns.
    #[display("placement must have at least one column")]
    Empty,
    /// A row value does not fit on the board.
    #[display("row {row} of column {column} is out of range for a {size}x{size} board")]
    RowOutOfRange {
        /// Column holding the bad row.
        column: usize,
        /// The offending row.
        row: usize,
        /// Board size.
        size: usize,
    },
    /// A token of a textual row list is not a row number.
    #[display("invalid row token: {token:?}")]
    InvalidToken {
        /// The token that failed to parse.
        token: String,
    },
}

/// The column-to-row assignment of all N queens.
///
/// # Examples
///
/// ```
/// use nqueens_core::Placement;
///
/// let placement = Placement::try_from_rows(vec![1, 3, 0, 2])?;
/// assert_eq!(placement.size(), 4);
/// assert_eq!(placement.row_of(1), 3);
/// assert!(placement.is_solution());
///
/// let parsed: Placement = "1, 3, 0, 2".parse()?;
/// assert_eq!(parsed, placement);
/// # Ok::<(), nqueens_core::PlacementError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    rows: Vec<usize>,
}

impl Placement {
    /// Creates the placement with queen `i` on row `i`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Empty`] if `size` is zero.
    pub fn identity(size: usize) -> Result<Self, PlacementError> {
        if size == 0 {
            return Err(PlacementError::Empty);
        }
        Ok(Self {
            rows: (0..size).collect(),
        })
    }

    /// Creates a placement from a row per column.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Empty`] if `rows` is empty, or
    /// [`PlacementError::RowOutOfRange`] if any row is not below `rows.len()`.
    pub fn try_from_rows(rows: Vec<usize>) -> Result<Self, PlacementError> {
        let size = rows.len();
        if size == 0 {
            return Err(PlacementError::Empty);
        }
        if let Some((column, &row)) = rows.iter().enumerate().find(|&(_, &row)| row >= size) {
            return Err(PlacementError::RowOutOfRange { column, row, size });
        }
        Ok(Self { rows })
    }

    /// Returns the board size N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row of the queen in `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    #[must_use]
    pub fn row_of(&self, column: usize) -> usize {
        self.rows[column]
    }

    /// Returns the rows indexed by column.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Consumes the placement, returning the rows indexed by column.
    #[must_use]
    pub fn into_rows(self) -> Vec<usize> {
        self.rows
    }

    /// Iterates over `(column, row)` pairs in column order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, usize)> + '_ {
        self.rows.iter().copied().enumerate()
    }

    /// Returns the number of queen pairs sharing a row or a diagonal.
    #[must_use]
    pub fn attacking_pairs(&self) -> usize {
        ConflictTables::from_placement(self).attacking_pairs()
    }

    /// Returns `true` if no two queens share a row or a diagonal.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        self.attacking_pairs() == 0
    }

    /// Draws the board as text.
    ///
    /// The result has N lines (no trailing newline). Line `r` has N cells
    /// separated by single spaces, [`QUEEN`] where `row_of(column) == r` and
    /// [`EMPTY`] elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_core::Placement;
    ///
    /// let placement = Placement::try_from_rows(vec![1, 3, 0, 2])?;
    /// let text = placement.render();
    /// let lines: Vec<_> = text.lines().collect();
    /// assert_eq!(lines, ["_ _ * _", "* _ _ _", "_ _ _ *", "_ * _ _"]);
    /// # Ok::<(), nqueens_core::PlacementError>(())
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub(crate) fn set_row(&mut self, column: usize, row: usize) {
        debug_assert!(row < self.size());
        self.rows[column] = row;
    }

    /// Refills with a uniformly random permutation of `0..size`.
    pub(crate) fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for (column, row) in self.rows.iter_mut().enumerate() {
            *row = column;
        }
        self.rows.shuffle(rng);
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            if row > 0 {
                f.write_char('\n')?;
            }
            for (column, queen_row) in self.iter() {
                if column > 0 {
                    f.write_char(' ')?;
                }
                f.write_char(if queen_row == row { QUEEN } else { EMPTY })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(s);
        let rows = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<usize>().map_err(|_| PlacementError::InvalidToken {
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from_rows(rows)
    }
}

impl TryFrom<Vec<usize>> for Placement {
    type Error = PlacementError;

    fn try_from(rows: Vec<usize>) -> Result<Self, Self::Error> {
        Self::try_from_rows(rows)
    }
}

impl From<Placement> for Vec<usize> {
    fn from(placement: Placement) -> Self {
        placement.rows
    }
}
