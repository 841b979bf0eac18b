//! Ratio ranking and single-pass acceptance.

use crate::catalog::Catalog;
use crate::error::{check_budget, Result};
use crate::selector::Selector;
use crate::solution::Solution;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Greedy selector ranking items by value per unit cost.
///
/// Runs in O(n log n) time and O(n) space.
///
/// # Examples
///
/// ```
/// use u_knapsack::catalog::Catalog;
/// use u_knapsack::{GreedySelector, Selector};
///
/// let catalog = Catalog::builder()
///     .with_item("pizza", 50, 300.0)
///     .with_item("cola", 15, 220.0)
///     .build()
///     .unwrap();
///
/// let solution = GreedySelector.select(&catalog, 60).unwrap();
/// assert_eq!(solution.chosen, vec!["cola"]);
/// assert_eq!(solution.spent, 15);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector;

impl GreedySelector {
    /// Returns item indices sorted by ratio, highest first.
    ///
    /// Ties keep insertion order (lower index first).
    pub fn ranking(catalog: &Catalog) -> Vec<usize> {
        let ratios: Vec<f64> = catalog.iter().map(|item| item.ratio()).collect();
        let mut indices: Vec<usize> = (0..ratios.len()).collect();

        indices.sort_by(|&a, &b| {
            ratios[b]
                .partial_cmp(&ratios[a])
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });

        indices
    }
}

impl Selector for GreedySelector {
    fn name(&self) -> &str {
        "greedy"
    }

    fn select(&self, catalog: &Catalog, budget: i64) -> Result<Solution> {
        check_budget(budget)?;
        debug!(
            event = "select_start",
            selector = self.name(),
            items = catalog.len(),
            budget
        );

        let items = catalog.items();
        let mut remaining = budget;
        let mut solution = Solution::empty();

        for idx in Self::ranking(catalog) {
            let item = &items[idx];
            if item.cost() <= remaining {
                remaining -= item.cost();
                solution.total_value += item.value();
                solution.chosen.push(item.name().to_string());
                trace!(item = item.name(), ratio = item.ratio(), remaining, "accepted");
            } else {
                trace!(item = item.name(), cost = item.cost(), remaining, "skipped");
            }
        }
        solution.spent = budget - remaining;

        debug!(
            event = "select_end",
            selector = self.name(),
            total_value = solution.total_value,
            spent = solution.spent,
            chosen = solution.len()
        );
        Ok(solution)
    }
}
