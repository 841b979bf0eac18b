//! Item catalog.
//!
//! A [`Catalog`] is an ordered, validated, read-only collection of
//! [`Item`]s. Insertion order is significant: it is the tie-break order
//! for the greedy selector and the traversal order of the exact solver.
//!
//! The module also provides a seeded random instance generator used by
//! benchmarks and property tests.

mod generator;
mod item;
mod model;

pub use generator::GeneratorConfig;
pub use item::Item;
pub use model::{Catalog, CatalogBuilder};
