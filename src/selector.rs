//! Core trait shared by all selectors.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::solution::Solution;

/// Chooses a subset of catalog items whose total cost fits a budget.
///
/// Implementations are pure: the result depends only on the catalog and
/// the budget, and repeated calls return identical solutions.
///
/// # Errors
///
/// Returns [`SelectError::InvalidBudget`](crate::SelectError::InvalidBudget)
/// when `budget < 0`. A budget of zero is valid and yields the empty
/// solution.
///
/// # Examples
///
/// ```
/// use u_knapsack::catalog::Catalog;
/// use u_knapsack::{ExactSelector, GreedySelector, Selector};
///
/// let catalog = Catalog::builder()
///     .with_item("a", 3, 4.0)
///     .with_item("b", 2, 3.0)
///     .with_item("c", 2, 3.0)
///     .build()
///     .unwrap();
///
/// let selectors: Vec<Box<dyn Selector>> =
///     vec![Box::new(GreedySelector), Box::new(ExactSelector::default())];
/// for s in &selectors {
///     let solution = s.select(&catalog, 4).unwrap();
///     assert!(solution.spent <= 4);
/// }
/// ```
pub trait Selector: Send + Sync {
    /// Short name used in logs and reports.
    fn name(&self) -> &str;

    /// Selects items from `catalog` within `budget`.
    fn select(&self, catalog: &Catalog, budget: i64) -> Result<Solution>;
}
