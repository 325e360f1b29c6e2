//! Queen and row selection.
//!
//! Both selections scan once and break ties uniformly at random with
//! reservoir sampling: the `k`-th candidate tying the current best replaces
//! the chosen one with probability `1 / k`. First-found tie-breaking would
//! bias the search towards low columns and rows and make it cycle.

use nqueens_core::Board;
use rand::Rng;

/// The most attacked queen found by [`pick_worst_queen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorstQueen {
    /// Column of the queen.
    pub column: usize,
    /// Number of other queens attacking it.
    pub conflicts: usize,
}

/// The least attacked candidate row found by [`pick_best_row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestRow {
    /// Candidate row.
    pub row: usize,
    /// Number of queens that would attack the moved queen there.
    pub conflicts: usize,
}

/// Returns a queen with the maximum conflict count, chosen uniformly among
/// all queens sharing that maximum.
///
/// # Examples
///
/// ```
/// use nqueens_core::{Board, Placement};
/// use nqueens_solver::selection::pick_worst_queen;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// // Columns 0 and 1 share row 2, columns 0 and 2 share a diagonal
/// let board = Board::from_placement(Placement::try_from_rows(vec![2, 2, 0])?);
/// let worst = pick_worst_queen(&board, &mut Pcg64::seed_from_u64(0));
///
/// assert_eq!(worst.column, 0);
/// assert_eq!(worst.conflicts, 2);
/// # Ok::<(), nqueens_core::PlacementError>(())
/// ```
pub fn pick_worst_queen<R>(board: &Board, rng: &mut R) -> WorstQueen
where
    R: Rng,
{
    let candidates = (0..board.size()).map(|column| (column, board.conflicts_of(column)));
    let (column, conflicts) = sample_extreme(candidates, |value, best| value > best, rng)
        .unwrap_or((0, board.conflicts_of(0)));
    WorstQueen { column, conflicts }
}

/// Returns the row of `column` with the fewest conflicts, excluding
/// `exclude_row`, chosen uniformly among all rows sharing that minimum.
///
/// `exclude_row` must be the queen's current row: the conflict tables still
/// count the queen there, which only the exclusion keeps out of the
/// comparison.
///
/// Returns `None` when no other row exists (a 1×1 board).
pub fn pick_best_row<R>(
    board: &Board,
    column: usize,
    exclude_row: usize,
    rng: &mut R,
) -> Option<BestRow>
where
    R: Rng,
{
    debug_assert_eq!(board.row_of(column), exclude_row);
    let candidates = (0..board.size())
        .filter(|&row| row != exclude_row)
        .map(|row| (row, board.conflicts_if_placed(column, row)));
    sample_extreme(candidates, |value, best| value < best, rng)
        .map(|(row, conflicts)| BestRow { row, conflicts })
}

/// Picks uniformly among the candidates whose value is extreme under
/// `is_better`, in a single pass.
fn sample_extreme<I, F, R>(candidates: I, is_better: F, rng: &mut R) -> Option<(usize, usize)>
where
    I: IntoIterator<Item = (usize, usize)>,
    F: Fn(usize, usize) -> bool,
    R: Rng,
{
    let mut chosen: Option<(usize, usize)> = None;
    let mut ties = 0_usize;
    for (index, value) in candidates {
        match chosen {
            Some((_, best)) if value == best => {
                ties += 1;
                if rng.random_range(0..ties) == 0 {
                    chosen = Some((index, value));
                }
            }
            Some((_, best)) if !is_better(value, best) => {}
            _ => {
                chosen = Some((index, value));
                ties = 1;
            }
        }
    }
    chosen
}

#[cfg(test)]
mod tests {
    use nqueens_core::Placement;
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn board(rows: &[usize]) -> Board {
        Board::from_placement(Placement::try_from_rows(rows.to_vec()).unwrap())
    }

    fn arb_rows() -> impl Strategy<Value = Vec<usize>> {
        (1usize..32).prop_flat_map(|size| prop::collection::vec(0..size, size))
    }

    #[test]
    fn test_worst_queen_on_solution_has_no_conflicts() {
        let mut rng = Pcg64::seed_from_u64(3);
        let worst = pick_worst_queen(&board(&[1, 3, 0, 2]), &mut rng);
        assert_eq!(worst.conflicts, 0);
    }

    #[test]
    fn test_worst_queen_ties_are_uniform() {
        // Identity: every queen has 3 conflicts
        let board = Board::new(4).unwrap();
        let mut rng = Pcg64::seed_from_u64(11);
        let mut hits = [0_usize; 4];
        for _ in 0..400 {
            let worst = pick_worst_queen(&board, &mut rng);
            assert_eq!(worst.conflicts, 3);
            hits[worst.column] += 1;
        }
        assert!(hits.iter().all(|&n| n > 50), "skewed tie-breaking: {hits:?}");
    }

    #[test]
    fn test_best_row_single_cell_board() {
        let board = Board::new(1).unwrap();
        let mut rng = Pcg64::seed_from_u64(0);
        assert_eq!(pick_best_row(&board, 0, 0, &mut rng), None);
    }

    #[test]
    fn test_best_row_prefers_fewest_conflicts() {
        // Queens at (2, 0), (2, 1), (0, 2) as (row, column)
        let board = board(&[2, 2, 0]);
        let mut rng = Pcg64::seed_from_u64(5);
        for _ in 0..20 {
            // Row 0 only meets column 2 on its row; row 1 lies on the "/"
            // diagonal shared by columns 0 and 2
            let best = pick_best_row(&board, 1, 2, &mut rng).unwrap();
            assert_eq!(best, BestRow { row: 0, conflicts: 1 });
        }
    }

    #[test]
    fn test_best_row_only_candidate() {
        let board = board(&[0, 0]);
        let mut rng = Pcg64::seed_from_u64(9);
        let best = pick_best_row(&board, 1, 0, &mut rng).unwrap();
        assert_eq!(best.row, 1);
    }

    #[test]
    fn test_best_row_ties_are_uniform() {
        // Column 2 of the 5x5 identity: rows 1 and 3 score 1, rows 0 and 4 score 2
        let board = Board::new(5).unwrap();
        let mut rng = Pcg64::seed_from_u64(9);
        let mut hits = [0_usize; 5];
        for _ in 0..500 {
            let best = pick_best_row(&board, 2, 2, &mut rng).unwrap();
            assert_eq!(best.conflicts, 1);
            hits[best.row] += 1;
        }
        assert_eq!(hits[0] + hits[2] + hits[4], 0);
        assert!(hits[1] > 150 && hits[3] > 150, "skewed tie-breaking: {hits:?}");
    }

    proptest! {
        #[test]
        fn prop_worst_queen_is_maximal(rows in arb_rows(), seed in any::<u64>()) {
            let board = board(&rows);
            let mut rng = Pcg64::seed_from_u64(seed);
            let worst = pick_worst_queen(&board, &mut rng);

            prop_assert_eq!(worst.conflicts, board.conflicts_of(worst.column));
            for column in 0..rows.len() {
                prop_assert!(worst.conflicts >= board.conflicts_of(column));
            }
        }

        #[test]
        fn prop_best_row_is_minimal_and_never_excluded(
            rows in arb_rows(),
            seed in any::<u64>(),
            column in any::<prop::sample::Index>(),
        ) {
            let board = board(&rows);
            let column = column.index(rows.len());
            let exclude = board.row_of(column);
            let mut rng = Pcg64::seed_from_u64(seed);

            match pick_best_row(&board, column, exclude, &mut rng) {
                None => prop_assert_eq!(rows.len(), 1),
                Some(best) => {
                    prop_assert_ne!(best.row, exclude);
                    prop_assert_eq!(best.conflicts, board.conflicts_if_placed(column, best.row));
                    let minimum = (0..rows.len())
                        .filter(|&row| row != exclude)
                        .map(|row| board.conflicts_if_placed(column, row))
                        .min()
                        .unwrap();
                    prop_assert_eq!(best.conflicts, minimum);
                }
            }
        }
    }
}
