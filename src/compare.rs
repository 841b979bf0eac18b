//! Side-by-side comparison of the greedy and exact selectors.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::exact::ExactSelector;
use crate::greedy::GreedySelector;
use crate::selector::Selector;
use crate::solution::Solution;
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Greedy and exact solutions for the same catalog and budget.
///
/// # Examples
///
/// ```
/// use u_knapsack::catalog::Catalog;
/// use u_knapsack::{Comparison, ExactSelector};
///
/// let catalog = Catalog::builder()
///     .with_item("a", 6, 7.0)
///     .with_item("b", 5, 5.0)
///     .with_item("c", 5, 5.0)
///     .build()
///     .unwrap();
///
/// let cmp = Comparison::run(&catalog, 10, &ExactSelector::default()).unwrap();
/// assert_eq!(cmp.greedy.total_value, 7.0);
/// assert_eq!(cmp.exact.total_value, 10.0);
/// assert!(!cmp.greedy_is_optimal());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comparison {
    /// Budget both selectors were run with.
    pub budget: i64,

    /// Result of the greedy selector.
    pub greedy: Solution,

    /// Result of the exact selector.
    pub exact: Solution,
}

impl Comparison {
    /// Runs both selectors on the same input.
    pub fn run(catalog: &Catalog, budget: i64, exact: &ExactSelector) -> Result<Self> {
        let greedy = GreedySelector.select(catalog, budget)?;
        let exact = exact.select(catalog, budget)?;

        let cmp = Self {
            budget,
            greedy,
            exact,
        };
        info!(
            event = "compare",
            budget,
            greedy_value = cmp.greedy.total_value,
            exact_value = cmp.exact.total_value,
            gap = cmp.value_gap()
        );
        Ok(cmp)
    }

    /// Value lost by the greedy selector (`exact - greedy`, never negative
    /// beyond rounding).
    pub fn value_gap(&self) -> f64 {
        self.exact.total_value - self.greedy.total_value
    }

    /// Greedy value as a fraction of the optimum. `1.0` when the optimum
    /// is zero.
    pub fn quality(&self) -> f64 {
        if self.exact.total_value > 0.0 {
            self.greedy.total_value / self.exact.total_value
        } else {
            1.0
        }
    }

    /// Returns `true` if the greedy selector reached the optimal value.
    pub fn greedy_is_optimal(&self) -> bool {
        self.value_gap() <= 1e-9 * self.exact.total_value.abs().max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GeneratorConfig, Item};
    use crate::fixtures::menu;
    use proptest::prelude::*;

    #[test]
    fn test_menu_comparison() {
        let cmp = Comparison::run(&menu(), 100, &ExactSelector::default()).unwrap();

        assert!((cmp.greedy.total_value - 870.0).abs() < 1e-9);
        assert_eq!(cmp.greedy.spent, 80);
        assert!((cmp.exact.total_value - 970.0).abs() < 1e-9);
        assert_eq!(cmp.exact.spent, 100);
        assert!((cmp.value_gap() - 100.0).abs() < 1e-9);
        assert!((cmp.quality() - 870.0 / 970.0).abs() < 1e-12);
        assert!(!cmp.greedy_is_optimal());
    }

    #[test]
    fn test_zero_budget_comparison() {
        let cmp = Comparison::run(&menu(), 0, &ExactSelector::default()).unwrap();
        assert_eq!(cmp.greedy, Solution::empty());
        assert_eq!(cmp.exact, Solution::empty());
        assert!((cmp.quality() - 1.0).abs() < 1e-12);
        assert!(cmp.greedy_is_optimal());
    }

    #[test]
    fn test_full_budget_comparison() {
        let cmp = Comparison::run(&menu(), 170, &ExactSelector::default()).unwrap();
        assert_eq!(cmp.greedy.chosen_set(), cmp.exact.chosen_set());
        assert!(cmp.greedy_is_optimal());
    }

    // ---- Properties over random catalogs ----

    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        prop::collection::vec((1i64..=30, 1u32..=100), 0..12).prop_map(|specs| {
            let items = specs
                .into_iter()
                .enumerate()
                .map(|(i, (cost, value))| Item::new(format!("item-{i}"), cost, value as f64));
            Catalog::new(items.collect::<Vec<_>>()).expect("generated items are valid")
        })
    }

    proptest! {
        #[test]
        fn prop_exact_dominates_greedy(catalog in arb_catalog(), budget in 0i64..=120) {
            let cmp = Comparison::run(&catalog, budget, &ExactSelector::default()).unwrap();
            prop_assert!(cmp.exact.total_value >= cmp.greedy.total_value);
        }

        #[test]
        fn prop_both_feasible(catalog in arb_catalog(), budget in 0i64..=120) {
            let cmp = Comparison::run(&catalog, budget, &ExactSelector::default()).unwrap();
            prop_assert!(cmp.greedy.verify(&catalog, budget).is_ok());
            prop_assert!(cmp.exact.verify(&catalog, budget).is_ok());
        }

        #[test]
        fn prop_exact_monotone_in_budget(catalog in arb_catalog(), budget in 0i64..=120) {
            let exact = ExactSelector::default();
            let lower = exact.select(&catalog, budget).unwrap();
            let higher = exact.select(&catalog, budget + 1).unwrap();
            prop_assert!(higher.total_value >= lower.total_value);
        }

        #[test]
        fn prop_deterministic(catalog in arb_catalog(), budget in 0i64..=120) {
            let a = Comparison::run(&catalog, budget, &ExactSelector::default()).unwrap();
            let b = Comparison::run(&catalog, budget, &ExactSelector::default()).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_full_affordability(catalog in arb_catalog(), extra in 0i64..10) {
            let budget = catalog.total_cost() + extra;
            let cmp = Comparison::run(&catalog, budget, &ExactSelector::default()).unwrap();
            prop_assert_eq!(cmp.greedy.len(), catalog.len());
            prop_assert_eq!(cmp.exact.len(), catalog.len());
            prop_assert_eq!(cmp.greedy.total_value, catalog.total_value());
            prop_assert_eq!(cmp.exact.total_value, catalog.total_value());
        }

        #[test]
        fn prop_rolling_matches_table(catalog in arb_catalog(), budget in 0i64..=120) {
            let exact = ExactSelector::default();
            let full = exact.select(&catalog, budget).unwrap();
            prop_assert_eq!(exact.optimal_value(&catalog, budget).unwrap(), full.total_value);
        }
    }

    #[test]
    fn test_generated_catalogs_quality_bounded() {
        for seed in 0..10 {
            let catalog = GeneratorConfig::new(40).with_seed(seed).generate().unwrap();
            let budget = catalog.total_cost() / 3;
            let cmp = Comparison::run(&catalog, budget, &ExactSelector::default()).unwrap();
            assert!(cmp.quality() <= 1.0 + 1e-12);
            assert!(cmp.quality() > 0.0);
        }
    }
}
