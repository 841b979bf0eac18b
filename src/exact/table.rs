//! Full dynamic-programming table with backtracking.

use super::config::ExactConfig;
use crate::catalog::Catalog;
use crate::error::{check_budget, Result, SelectError};

/// The `(n + 1) x (budget + 1)` table of best achievable values.
///
/// `get(i, j)` is the maximum value reachable using only the first `i`
/// catalog items (in insertion order) with a spending limit of `j`.
/// Row 0 and column 0 are all zero.
///
/// Every row is non-decreasing in `j`, and every cell is at least the
/// cell directly above it.
#[derive(Debug, Clone)]
pub struct DpTable {
    cells: Vec<f64>,
    costs: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl DpTable {
    /// Builds the table for `catalog` and `budget`.
    ///
    /// # Errors
    ///
    /// - [`SelectError::InvalidBudget`] if `budget < 0`.
    /// - [`SelectError::InvalidConfig`] if `config` fails validation.
    /// - [`SelectError::TableTooLarge`] if the table would exceed
    ///   `config.max_table_cells`.
    pub fn build(catalog: &Catalog, budget: i64, config: &ExactConfig) -> Result<Self> {
        config.validate().map_err(SelectError::InvalidConfig)?;
        let width = check_budget(budget)?;

        let rows = catalog.len() + 1;
        let cols = check_width(width, rows, config)?;

        let costs: Vec<usize> = catalog
            .iter()
            .map(|item| usize::try_from(item.cost()).unwrap_or(usize::MAX))
            .collect();

        let mut cells = vec![0.0f64; rows * cols];
        for (i, item) in catalog.iter().enumerate() {
            let (filled, rest) = cells.split_at_mut((i + 1) * cols);
            let prev = &filled[i * cols..];
            let cur = &mut rest[..cols];
            fill_row(prev, cur, costs[i], item.value(), config.parallel);
        }

        Ok(Self {
            cells,
            costs,
            rows,
            cols,
        })
    }

    /// Number of rows (`n + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`budget + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell `(i, j)`, or `None` if out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice, or `None` if out of range.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.rows {
            Some(&self.cells[i * self.cols..(i + 1) * self.cols])
        } else {
            None
        }
    }

    /// The optimal value, `dp[n][budget]`.
    pub fn optimal_value(&self) -> f64 {
        self.cells[self.rows * self.cols - 1]
    }

    /// Recovers the items of an optimal solution.
    ///
    /// Walks from `(n, budget)` up to row 1. Whenever a cell differs from
    /// the one above it, that row's item was included and the column moves
    /// left by its cost. Returns the included item indices (highest index
    /// first) and the budget left unspent.
    pub fn backtrack(&self) -> (Vec<usize>, usize) {
        let mut j = self.cols - 1;
        let mut chosen = Vec::new();

        for i in (1..self.rows).rev() {
            let here = self.cells[i * self.cols + j];
            let above = self.cells[(i - 1) * self.cols + j];
            if here != above {
                chosen.push(i - 1);
                j -= self.costs[i - 1];
            }
        }

        (chosen, j)
    }
}

/// Checks the table size against the configured limit and returns the
/// column count.
pub(crate) fn check_width(width: usize, rows: usize, config: &ExactConfig) -> Result<usize> {
    let too_large = |cols: usize| SelectError::TableTooLarge {
        rows,
        cols,
        limit: config.max_table_cells,
    };

    let cols = width.checked_add(1).ok_or_else(|| too_large(usize::MAX))?;
    match rows.checked_mul(cols) {
        Some(cells) if cells <= config.max_table_cells => Ok(cols),
        _ => Err(too_large(cols)),
    }
}

/// Value of `dp[i][j]` given row `i - 1`.
#[inline]
fn transition(prev: &[f64], j: usize, cost: usize, value: f64) -> f64 {
    if cost > j {
        prev[j]
    } else {
        prev[j].max(value + prev[j - cost])
    }
}

fn fill_row(prev: &[f64], cur: &mut [f64], cost: usize, value: f64, parallel: bool) {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        cur.par_iter_mut()
            .enumerate()
            .for_each(|(j, cell)| *cell = transition(prev, j, cost, value));
        return;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for (j, cell) in cur.iter_mut().enumerate() {
        *cell = transition(prev, j, cost, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::menu;

    fn menu_table(budget: i64) -> DpTable {
        DpTable::build(&menu(), budget, &ExactConfig::default()).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let table = menu_table(100);
        assert_eq!(table.rows(), 7);
        assert_eq!(table.cols(), 101);
        assert!(table.get(7, 0).is_none());
        assert!(table.get(0, 101).is_none());
        assert_eq!(table.row(3).map(<[f64]>::len), Some(101));
    }

    #[test]
    fn test_base_cases() {
        let table = menu_table(100);
        assert!(table.row(0).unwrap().iter().all(|&v| v == 0.0));
        for i in 0..table.rows() {
            assert_eq!(table.get(i, 0), Some(0.0));
        }
    }

    #[test]
    fn test_optimal_value_menu() {
        assert!((menu_table(100).optimal_value() - 970.0).abs() < 1e-9);
    }

    #[test]
    fn test_rows_non_decreasing_in_budget() {
        let table = menu_table(120);
        for i in 0..table.rows() {
            let row = table.row(i).unwrap();
            for w in row.windows(2) {
                assert!(w[1] >= w[0], "row {i} decreases: {} -> {}", w[0], w[1]);
            }
        }
    }

    #[test]
    fn test_more_items_never_hurt() {
        let table = menu_table(120);
        for i in 1..table.rows() {
            for j in 0..table.cols() {
                assert!(table.get(i, j).unwrap() >= table.get(i - 1, j).unwrap());
            }
        }
    }

    #[test]
    fn test_backtrack_menu() {
        let table = menu_table(100);
        let (chosen, remaining) = table.backtrack();
        // potato(5), cola(4), pepsi(3), pizza(0): reverse insertion order
        assert_eq!(chosen, vec![5, 4, 3, 0]);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_empty_catalog_table() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let table = DpTable::build(&catalog, 10, &ExactConfig::default()).unwrap();
        assert_eq!(table.rows(), 1);
        assert_eq!(table.optimal_value(), 0.0);
        assert_eq!(table.backtrack(), (vec![], 10));
    }

    #[test]
    fn test_table_too_large() {
        let config = ExactConfig::default().with_max_table_cells(100);
        let result = DpTable::build(&menu(), 100, &config);
        assert_eq!(
            result.unwrap_err(),
            SelectError::TableTooLarge {
                rows: 7,
                cols: 101,
                limit: 100,
            }
        );
    }

    #[test]
    fn test_huge_budget_rejected_without_allocation() {
        let result = DpTable::build(&menu(), i64::MAX, &ExactConfig::default());
        assert!(matches!(result, Err(SelectError::TableTooLarge { .. })));
    }

    #[test]
    fn test_negative_budget() {
        let result = DpTable::build(&menu(), -5, &ExactConfig::default());
        assert_eq!(result.unwrap_err(), SelectError::InvalidBudget(-5));
    }

    #[test]
    fn test_invalid_config() {
        let config = ExactConfig::default().with_max_table_cells(0);
        let result = DpTable::build(&menu(), 10, &config);
        assert!(matches!(result, Err(SelectError::InvalidConfig(_))));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = menu_table(170);
        let parallel =
            DpTable::build(&menu(), 170, &ExactConfig::default().with_parallel(true)).unwrap();
        assert_eq!(sequential.cells, parallel.cells);
    }
}
