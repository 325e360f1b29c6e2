//! Core data structures for the N-Queens min-conflicts solver.
//!
//! This crate provides the board representation that the search layer in
//! `nqueens-solver` repairs one queen at a time.
//!
//! # Overview
//!
//! The crate is organized around three types:
//!
//! 1. **Placement** - Where the queens are
//!    - [`placement`]: [`Placement`], one row per column. Columns are implicit,
//!      so there is exactly one queen per column by construction.
//!
//! 2. **Conflict tables** - How many queens share each line
//!    - [`conflict_table`]: [`ConflictTables`], per-row and per-diagonal queen
//!      counts for both diagonal families.
//!
//! 3. **Board** - Placement and tables kept consistent together
//!    - [`board`]: [`Board`], with O(1) single-queen moves and O(N) random
//!      resets.
//!
//! # Examples
//!
//! ```
//! use nqueens_core::{Board, Placement};
//!
//! let placement = Placement::try_from_rows(vec![1, 3, 0, 2])?;
//! let board = Board::from_placement(placement);
//!
//! // Every queen of the 4-Queens solution is conflict-free
//! assert!((0..4).all(|column| board.conflicts_of(column) == 0));
//! assert_eq!(board.placement().render(), "_ _ * _\n* _ _ _\n_ _ _ *\n_ * _ _");
//! # Ok::<(), nqueens_core::PlacementError>(())
//! ```

pub mod board;
pub mod conflict_table;
pub mod placement;

// Re-export commonly used types
pub use self::{
    board::Board,
    conflict_table::ConflictTables,
    placement::{Placement, PlacementError},
};
