//! Board state for min-conflicts search.
//!
//! [`Board`] owns a [`Placement`] and the [`ConflictTables`] counting it, and
//! keeps the two consistent under every mutation:
//!
//! - [`Board::reset`] draws a fresh random permutation and rebuilds the
//!   tables in O(N).
//! - [`Board::move_queen`] moves one queen within its column in O(1),
//!   decrementing the old cells and incrementing the new ones.
//!
//! # Conflict counts
//!
//! Every queen contributes +1 to its row cell and to both diagonal cells.
//! [`Board::conflicts_of`] therefore subtracts 1 per table to count only the
//! *other* queens attacking it. [`Board::conflicts_if_placed`] applies no such
//! correction: it is meant for candidate rows other than the queen's current
//! row, and the search always excludes the current row. Evaluated on the
//! current row it overcounts by 3.

use rand::Rng;

use crate::{ConflictTables, Placement, PlacementError};

/// A placement together with its incrementally maintained conflict tables.
///
/// # Examples
///
/// ```
/// use nqueens_core::Board;
///
/// // Queen i on row i: all four share the main diagonal
/// let mut board = Board::new(4)?;
/// assert_eq!(board.conflicts_of(0), 3);
/// assert_eq!(board.total_conflicts(), 6);
///
/// // Candidate row 1 for column 0 is attacked by one queen (on row 1)
/// assert_eq!(board.conflicts_if_placed(0, 1), 1);
///
/// board.move_queen(0, 0, 1);
/// assert_eq!(board.row_of(0), 1);
/// assert!(board.is_consistent());
/// # Ok::<(), nqueens_core::PlacementError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    placement: Placement,
    tables: ConflictTables,
}

impl Board {
    /// Creates an N×N board with queen `i` on row `i`.
    ///
    /// Call [`reset`](Self::reset) to start from a random placement.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Empty`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, PlacementError> {
        Ok(Self::from_placement(Placement::identity(size)?))
    }

    /// Creates a board from an existing placement, counting every queen.
    #[must_use]
    pub fn from_placement(placement: Placement) -> Self {
        let tables = ConflictTables::from_placement(&placement);
        Self { placement, tables }
    }

    /// Returns the board size N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.placement.size()
    }

    /// Returns the current placement.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Consumes the board, returning its placement.
    #[must_use]
    pub fn into_placement(self) -> Placement {
        self.placement
    }

    /// Returns the conflict tables.
    #[must_use]
    pub fn tables(&self) -> &ConflictTables {
        &self.tables
    }

    /// Returns the row of the queen in `column`.
    #[must_use]
    pub fn row_of(&self, column: usize) -> usize {
        self.placement.row_of(column)
    }

    /// Replaces the placement with a uniformly random permutation and
    /// rebuilds the tables from scratch.
    ///
    /// A permutation never puts two queens on the same row, so after a reset
    /// only diagonal conflicts remain.
    pub fn reset<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.placement.shuffle(rng);
        self.tables.rebuild(&self.placement);
    }

    /// Returns how many other queens attack the queen in `column`.
    #[must_use]
    pub fn conflicts_of(&self, column: usize) -> usize {
        let row = self.placement.row_of(column);
        // The queen itself is counted once in each of the three tables.
        self.tables.occupancy(column, row) - 3
    }

    /// Returns how many queens would attack a queen placed at (`row`, `column`).
    ///
    /// The queen of `column` is still counted at its current row, so the
    /// value is only meaningful for `row != self.row_of(column)`.
    #[must_use]
    pub fn conflicts_if_placed(&self, column: usize, row: usize) -> usize {
        self.tables.occupancy(column, row)
    }

    /// Moves the queen of `column` from `old_row` to `new_row`.
    ///
    /// # Panics
    ///
    /// Panics if `new_row` is out of range. In debug builds, also panics if
    /// `old_row` is not the queen's current row.
    pub fn move_queen(&mut self, column: usize, old_row: usize, new_row: usize) {
        debug_assert_eq!(
            self.placement.row_of(column),
            old_row,
            "queen of column {column} is not on row {old_row}"
        );
        assert!(new_row < self.size(), "row {new_row} is out of range");
        self.tables.remove(column, old_row);
        self.tables.add(column, new_row);
        self.placement.set_row(column, new_row);
    }

    /// Returns the number of queen pairs sharing a row or a diagonal.
    ///
    /// Zero means the placement is a solution.
    #[must_use]
    pub fn total_conflicts(&self) -> usize {
        self.tables.attacking_pairs()
    }

    /// Returns `true` if the tables match a from-scratch recount of the
    /// placement.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.tables == ConflictTables::from_placement(&self.placement)
    }
}

impl From<Placement> for Board {
    fn from(placement: Placement) -> Self {
        Self::from_placement(placement)
    }
}
