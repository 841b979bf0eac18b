//! Value-only solve with a single rolling row.

use crate::catalog::Catalog;

/// Computes `dp[n][width]` keeping only one row of `width + 1` cells.
///
/// Each item is merged into the row from the back so that it is counted
/// at most once. The cells evolve exactly as the rows of the full table,
/// so the result is bit-identical to [`DpTable::optimal_value`]. No
/// reconstruction is possible from the final row alone.
///
/// [`DpTable::optimal_value`]: super::DpTable::optimal_value
pub(crate) fn rolling_optimum(catalog: &Catalog, width: usize) -> f64 {
    let mut best = vec![0.0f64; width + 1];

    for item in catalog {
        let cost = usize::try_from(item.cost()).unwrap_or(usize::MAX);
        if cost > width {
            continue;
        }
        for j in (cost..=width).rev() {
            best[j] = best[j].max(item.value() + best[j - cost]);
        }
    }

    best[width]
}
