//! Selection results.

use crate::catalog::Catalog;
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A set of chosen items with its total value and spend.
///
/// Invariants (upheld by every selector in this crate):
/// `spent <= budget` and `spent == sum(cost of chosen)`.
///
/// The order of `chosen` depends on the selector. The greedy selector
/// reports items in acceptance order, the exact selector in reverse
/// insertion order. Compare solutions with [`Solution::chosen_set`] when
/// order is irrelevant.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Sum of the values of the chosen items.
    pub total_value: f64,

    /// Sum of the costs of the chosen items.
    pub spent: i64,

    /// Names of the chosen items.
    pub chosen: Vec<String>,
}

impl Solution {
    /// The empty selection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of chosen items.
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Returns `true` if nothing was chosen.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Returns `true` if the named item was chosen.
    pub fn contains(&self, name: &str) -> bool {
        self.chosen.iter().any(|c| c == name)
    }

    /// Chosen names as an ordered set.
    pub fn chosen_set(&self) -> BTreeSet<&str> {
        self.chosen.iter().map(String::as_str).collect()
    }

    /// Budget left over after this selection.
    pub fn remaining(&self, budget: i64) -> i64 {
        budget - self.spent
    }

    /// Checks this solution against a catalog and budget.
    ///
    /// Verifies that every chosen name exists exactly once, that `spent`
    /// equals the summed cost, that `spent` fits the budget, and that
    /// `total_value` matches the summed value (within `1e-9` relative).
    pub fn verify(&self, catalog: &Catalog, budget: i64) -> Result<(), String> {
        let mut seen = BTreeSet::new();
        let mut cost = 0i64;
        let mut value = 0.0f64;

        for name in &self.chosen {
            let item = catalog
                .get(name)
                .ok_or_else(|| format!("unknown item: {name}"))?;
            if !seen.insert(name.as_str()) {
                return Err(format!("item chosen twice: {name}"));
            }
            cost = cost
                .checked_add(item.cost())
                .ok_or_else(|| format!("chosen cost overflows at {name}"))?;
            value += item.value();
        }

        if cost != self.spent {
            return Err(format!(
                "spent {} does not match chosen cost {cost}",
                self.spent
            ));
        }
        if self.spent > budget {
            return Err(format!("spent {} exceeds budget {budget}", self.spent));
        }
        let tolerance = 1e-9 * value.abs().max(1.0);
        if (value - self.total_value).abs() > tolerance {
            return Err(format!(
                "total value {} does not match chosen value {value}",
                self.total_value
            ));
        }
        Ok(())
    }
}
