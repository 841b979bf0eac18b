//! Budget-constrained item selection.
//!
//! Given a [`Catalog`](catalog::Catalog) of items, each with a cost and a
//! value, and a spending limit, this crate provides two selectors:
//!
//! - **Greedy** ([`GreedySelector`]): ranks items by value per unit cost
//!   and accepts them in one pass while they fit. Fast (O(n log n)) and
//!   always feasible, but not necessarily optimal.
//! - **Exact** ([`ExactSelector`]): solves the 0/1 knapsack problem with a
//!   dynamic-programming table and recovers the chosen items by
//!   backtracking. Optimal, in O(n * budget) time and space.
//!
//! [`Comparison`] runs both on the same input and reports the gap.
//!
//! # Example
//!
//! ```
//! use u_knapsack::catalog::Catalog;
//! use u_knapsack::{Comparison, ExactSelector};
//!
//! let catalog = Catalog::builder()
//!     .with_item("pizza", 50, 300.0)
//!     .with_item("hamburger", 40, 250.0)
//!     .with_item("hot-dog", 30, 200.0)
//!     .with_item("pepsi", 10, 100.0)
//!     .with_item("cola", 15, 220.0)
//!     .with_item("potato", 25, 350.0)
//!     .build()
//!     .unwrap();
//!
//! let cmp = Comparison::run(&catalog, 100, &ExactSelector::default()).unwrap();
//! assert_eq!(cmp.greedy.total_value, 870.0);
//! assert_eq!(cmp.exact.total_value, 970.0);
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialization of items, catalogs and solutions.
//! - `parallel`: row-parallel table filling with rayon.
//! - `wasm`: `wasm-bindgen` exports.

pub mod catalog;
pub mod compare;
pub mod error;
pub mod exact;
pub mod greedy;
pub mod selector;
pub mod solution;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use compare::Comparison;
pub use error::{Result, SelectError};
pub use exact::{ExactConfig, ExactSelector};
pub use greedy::GreedySelector;
pub use selector::Selector;
pub use solution::Solution;
