//! Exact selector driving table construction and reconstruction.

use super::config::ExactConfig;
use super::rolling::rolling_optimum;
use super::table::{check_width, DpTable};
use crate::catalog::Catalog;
use crate::error::{check_budget, Result, SelectError};
use crate::selector::Selector;
use crate::solution::Solution;
use tracing::debug;

/// Optimal selector based on the 0/1 knapsack recurrence.
///
/// Builds the full [`DpTable`] and backtracks through it, in
/// O(n * budget) time and space. `chosen` is reported in reverse
/// insertion order.
///
/// # Precision
///
/// Values are summed in `f64`. An item whose value is absorbed by
/// rounding (for example `1.0` next to `1e17`) leaves its table cell
/// unchanged, so backtracking reports it as excluded even when the budget
/// covers every item. Exact membership holds while the optimal total
/// stays below 2^53 times the smallest positive value.
///
/// # Examples
///
/// ```
/// use u_knapsack::catalog::Catalog;
/// use u_knapsack::{ExactSelector, Selector};
///
/// let catalog = Catalog::builder()
///     .with_item("pizza", 50, 300.0)
///     .with_item("hamburger", 40, 250.0)
///     .with_item("cola", 15, 220.0)
///     .build()
///     .unwrap();
///
/// let solution = ExactSelector::default().select(&catalog, 90).unwrap();
/// assert_eq!(solution.chosen, vec!["hamburger", "pizza"]);
/// assert_eq!(solution.spent, 90);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExactSelector {
    config: ExactConfig,
}

impl ExactSelector {
    /// Creates a selector with the given configuration.
    pub fn new(config: ExactConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExactConfig {
        &self.config
    }

    /// Builds the full table without reconstructing a solution.
    pub fn table(&self, catalog: &Catalog, budget: i64) -> Result<DpTable> {
        DpTable::build(catalog, budget, &self.config)
    }

    /// Computes only the optimal value, using O(budget) memory.
    ///
    /// The single-row limit still applies: `budget + 1` must not exceed
    /// `max_table_cells`.
    pub fn optimal_value(&self, catalog: &Catalog, budget: i64) -> Result<f64> {
        self.config.validate().map_err(SelectError::InvalidConfig)?;
        let width = check_budget(budget)?;
        check_width(width, 1, &self.config)?;
        Ok(rolling_optimum(catalog, width))
    }
}

impl Selector for ExactSelector {
    fn name(&self) -> &str {
        "exact"
    }

    fn select(&self, catalog: &Catalog, budget: i64) -> Result<Solution> {
        debug!(
            event = "select_start",
            selector = self.name(),
            items = catalog.len(),
            budget,
            parallel = self.config.parallel
        );

        let table = self.table(catalog, budget)?;
        let (indices, unspent) = table.backtrack();

        let items = catalog.items();
        let solution = Solution {
            total_value: table.optimal_value(),
            spent: indices.iter().map(|&i| items[i].cost()).sum(),
            chosen: indices
                .iter()
                .map(|&i| items[i].name().to_string())
                .collect(),
        };
        debug_assert_eq!(solution.spent, budget - unspent as i64);

        debug!(
            event = "select_end",
            selector = self.name(),
            cells = table.rows() * table.cols(),
            total_value = solution.total_value,
            spent = solution.spent,
            chosen = solution.len()
        );
        Ok(solution)
    }
}
