//! Exact selection by dynamic programming.
//!
//! Solves the 0/1 knapsack problem over the catalog with the classic
//! `(n + 1) x (budget + 1)` table:
//!
//! ```text
//! dp[0][j] = 0
//! dp[i][j] = dp[i-1][j]                                   if cost_i > j
//!          = max(dp[i-1][j], value_i + dp[i-1][j - cost_i]) otherwise
//! ```
//!
//! The chosen items are recovered by backtracking from `dp[n][budget]`.
//! Time and space are O(n * budget), which makes very large budgets
//! impractical; [`ExactConfig::max_table_cells`] bounds the allocation.
//! [`ExactSelector::optimal_value`] trades reconstruction for O(budget)
//! space.
//!
//! With the `parallel` feature, each row can be filled in parallel since
//! its cells depend only on the previous row.
//!
//! # References
//!
//! - Bellman (1957), "Dynamic Programming"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", ch. 2

mod config;
mod rolling;
mod selector;
mod table;

pub use config::{ExactConfig, DEFAULT_MAX_TABLE_CELLS};
pub use selector::ExactSelector;
pub use table::DpTable;
