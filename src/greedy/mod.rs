//! Greedy selection by value/cost ratio.
//!
//! Items are ranked by `value / cost` (highest first) and accepted in a
//! single pass whenever they still fit the remaining budget. Items with
//! equal ratios keep their catalog insertion order, so the result is
//! deterministic.
//!
//! The greedy answer is always feasible but may be far from optimal:
//! a skipped item is never reconsidered.
//!
//! # References
//!
//! Dantzig (1957), "Discrete-Variable Extremum Problems"

mod selector;

pub use selector::GreedySelector;
