//! Per-line queen counts.
//!
//! [`ConflictTables`] stores, for one board size N, how many queens currently
//! sit on each row and on each diagonal of both families:
//!
//! - rows: N cells, indexed by `row`
//! - "\" diagonals (constant `row - column`): 2N-1 cells, indexed by
//!   `row - column + (N - 1)`
//! - "/" diagonals (constant `row + column`): 2N-1 cells, indexed by
//!   `row + column`
//!
//! The tables do not know where the queens are; [`Board`](crate::Board) keeps
//! them in step with a [`Placement`].

use crate::Placement;

/// Queen counts per row and per diagonal for a fixed board size.
///
/// # Examples
///
/// ```
/// use nqueens_core::{ConflictTables, Placement};
///
/// let placement = Placement::try_from_rows(vec![0, 1, 2, 3])?;
/// let tables = ConflictTables::from_placement(&placement);
///
/// // All four queens share the main "\" diagonal
/// assert_eq!(tables.diag_up_count(0, 0), 4);
/// assert_eq!(tables.row_count(2), 1);
/// assert_eq!(tables.attacking_pairs(), 6);
/// # Ok::<(), nqueens_core::PlacementError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictTables {
    size: usize,
    rows: Vec<usize>,
    diag_up: Vec<usize>,
    diag_down: Vec<usize>,
}

impl ConflictTables {
    /// Creates zeroed tables for an N×N board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let diagonals = (2 * size).saturating_sub(1);
        Self {
            size,
            rows: vec![0; size],
            diag_up: vec![0; diagonals],
            diag_down: vec![0; diagonals],
        }
    }

    /// Builds tables from scratch by scanning every queen of `placement` once.
    #[must_use]
    pub fn from_placement(placement: &Placement) -> Self {
        let mut tables = Self::new(placement.size());
        tables.rebuild(placement);
        tables
    }

    /// Returns the board size the tables were built for.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Zeroes every cell, then counts each queen of `placement` once.
    ///
    /// # Panics
    ///
    /// Panics if `placement` has a different size than the tables.
    pub fn rebuild(&mut self, placement: &Placement) {
        assert_eq!(
            placement.size(),
            self.size,
            "placement size does not match conflict tables"
        );
        self.rows.fill(0);
        self.diag_up.fill(0);
        self.diag_down.fill(0);
        for (column, row) in placement.iter() {
            self.add(column, row);
        }
    }

    /// Counts a queen at (`row`, `column`) in all three tables.
    pub fn add(&mut self, column: usize, row: usize) {
        let up = self.diag_up_index(column, row);
        let down = Self::diag_down_index(column, row);
        self.rows[row] += 1;
        self.diag_up[up] += 1;
        self.diag_down[down] += 1;
    }

    /// Uncounts a queen at (`row`, `column`) from all three tables.
    ///
    /// The queen must have been counted before.
    pub fn remove(&mut self, column: usize, row: usize) {
        let up = self.diag_up_index(column, row);
        let down = Self::diag_down_index(column, row);
        debug_assert!(
            self.rows[row] > 0 && self.diag_up[up] > 0 && self.diag_down[down] > 0,
            "removing a queen that is not counted at ({row}, {column})"
        );
        self.rows[row] -= 1;
        self.diag_up[up] -= 1;
        self.diag_down[down] -= 1;
    }

    /// Returns the number of queens on `row`.
    #[must_use]
    pub fn row_count(&self, row: usize) -> usize {
        self.rows[row]
    }

    /// Returns the number of queens on the "\" diagonal through (`row`, `column`).
    #[must_use]
    pub fn diag_up_count(&self, column: usize, row: usize) -> usize {
        self.diag_up[self.diag_up_index(column, row)]
    }

    /// Returns the number of queens on the "/" diagonal through (`row`, `column`).
    #[must_use]
    pub fn diag_down_count(&self, column: usize, row: usize) -> usize {
        self.diag_down[Self::diag_down_index(column, row)]
    }

    /// Returns the sum of the three lines through (`row`, `column`).
    ///
    /// No self-correction is applied: if a queen already sits on that cell,
    /// it is counted three times.
    #[must_use]
    pub fn occupancy(&self, column: usize, row: usize) -> usize {
        self.row_count(row) + self.diag_up_count(column, row) + self.diag_down_count(column, row)
    }

    /// Returns the number of queen pairs sharing a row or a diagonal.
    ///
    /// A line holding `k` queens contributes `k * (k - 1) / 2` pairs.
    #[must_use]
    pub fn attacking_pairs(&self) -> usize {
        self.rows
            .iter()
            .chain(&self.diag_up)
            .chain(&self.diag_down)
            .map(|&k| k * k.saturating_sub(1) / 2)
            .sum()
    }

    /// Returns the raw row table.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Returns the raw "\" diagonal table, indexed by `row - column + (N - 1)`.
    #[must_use]
    pub fn diag_up(&self) -> &[usize] {
        &self.diag_up
    }

    /// Returns the raw "/" diagonal table, indexed by `row + column`.
    #[must_use]
    pub fn diag_down(&self) -> &[usize] {
        &self.diag_down
    }

    fn diag_up_index(&self, column: usize, row: usize) -> usize {
        row + (self.size - 1) - column
    }

    fn diag_down_index(column: usize, row: usize) -> usize {
        row + column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let tables = ConflictTables::new(5);
        assert_eq!(tables.size(), 5);
        assert_eq!(tables.rows(), &[0; 5]);
        assert_eq!(tables.diag_up(), &[0; 9]);
        assert_eq!(tables.diag_down(), &[0; 9]);
        assert_eq!(tables.attacking_pairs(), 0);
    }

    #[test]
    fn test_single_cell_board() {
        let mut tables = ConflictTables::new(1);
        tables.add(0, 0);
        assert_eq!(tables.occupancy(0, 0), 3);
        assert_eq!(tables.attacking_pairs(), 0);
    }

    #[test]
    fn test_diagonal_indices_cover_corners() {
        let mut tables = ConflictTables::new(4);

        // Bottom-left and top-right are the extreme "\" diagonals
        tables.add(0, 3);
        tables.add(3, 0);
        assert_eq!(tables.diag_up(), &[1, 0, 0, 0, 0, 0, 1]);
        // Both sit on the same "/" anti-diagonal
        assert_eq!(tables.diag_down()[3], 2);
        assert_eq!(tables.attacking_pairs(), 1);
    }

    #[test]
    fn test_add_then_remove_restores_tables() {
        let mut tables = ConflictTables::new(6);
        tables.add(2, 4);
        tables.add(5, 1);
        tables.remove(2, 4);
        tables.remove(5, 1);
        assert_eq!(tables, ConflictTables::new(6));
    }

    #[test]
    fn test_occupancy_sums_three_lines() {
        let placement = Placement::try_from_rows(vec![0, 1, 2, 3]).unwrap();
        let tables = ConflictTables::from_placement(&placement);

        // (row 1, column 0): one queen on row 1, none on either diagonal
        assert_eq!(tables.occupancy(0, 1), 1);
        // (row 0, column 0) is occupied: row 1 + "\" 4 + "/" 1
        assert_eq!(tables.occupancy(0, 0), 6);
    }

    #[test]
    fn test_rebuild_discards_previous_counts() {
        let identity = Placement::try_from_rows(vec![0, 1, 2, 3]).unwrap();
        let solution = Placement::try_from_rows(vec![1, 3, 0, 2]).unwrap();

        let mut tables = ConflictTables::from_placement(&identity);
        tables.rebuild(&solution);

        assert_eq!(tables, ConflictTables::from_placement(&solution));
        assert_eq!(tables.attacking_pairs(), 0);
    }

    #[test]
    #[should_panic(expected = "placement size does not match")]
    fn test_rebuild_rejects_size_mismatch() {
        let placement = Placement::try_from_rows(vec![0, 1, 2]).unwrap();
        let mut tables = ConflictTables::new(4);
        tables.rebuild(&placement);
    }
}
