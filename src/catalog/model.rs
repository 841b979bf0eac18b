//! Validated, insertion-ordered item collection.

use super::item::Item;
use crate::error::{Result, SelectError};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable, ordered mapping from item name to [`Item`].
///
/// Construction rejects duplicate names, empty names, non-positive costs
/// and negative or non-finite values. The summed cost must fit in `i64`
/// and the summed value must be finite, so totals never overflow.
/// Once built, a catalog is never mutated and can be shared freely
/// between concurrent solves.
///
/// # Examples
///
/// ```
/// use u_knapsack::catalog::Catalog;
///
/// let catalog = Catalog::builder()
///     .with_item("pepsi", 10, 100.0)
///     .with_item("cola", 15, 220.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get("cola").map(|i| i.cost()), Some(15));
/// assert_eq!(catalog.index_of("pepsi"), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Item>", into = "Vec<Item>")
)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from items in the given order.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let items: Vec<Item> = items.into_iter().collect();
        let mut index = HashMap::with_capacity(items.len());
        let mut total_cost = 0i64;
        let mut total_value = 0.0f64;

        for (i, item) in items.iter().enumerate() {
            if let Some(reason) = item.violation() {
                return Err(SelectError::invalid_item(item.name(), reason));
            }
            if index.insert(item.name().to_string(), i).is_some() {
                return Err(SelectError::invalid_item(item.name(), "duplicate name"));
            }
            total_cost = total_cost.checked_add(item.cost()).ok_or_else(|| {
                SelectError::invalid_item(item.name(), "total catalog cost overflows i64")
            })?;
            total_value += item.value();
            if !total_value.is_finite() {
                return Err(SelectError::invalid_item(
                    item.name(),
                    "total catalog value is not finite",
                ));
            }
        }

        Ok(Self { items, index })
    }

    /// Starts a builder for incremental construction.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Number of items (`n`).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Items as a slice, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    /// Insertion index of the named item.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns `true` if an item with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Sum of all item costs.
    pub fn total_cost(&self) -> i64 {
        self.items.iter().map(Item::cost).sum()
    }

    /// Sum of all item values.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(Item::value).sum()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl TryFrom<Vec<Item>> for Catalog {
    type Error = SelectError;

    fn try_from(items: Vec<Item>) -> Result<Self> {
        Catalog::new(items)
    }
}

impl From<Catalog> for Vec<Item> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}

/// Incremental builder for [`Catalog`].
///
/// Validation is deferred to [`CatalogBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    items: Vec<Item>,
}

impl CatalogBuilder {
    /// Appends an item.
    pub fn with_item(mut self, name: impl Into<String>, cost: i64, value: f64) -> Self {
        self.items.push(Item::new(name, cost, value));
        self
    }

    /// Appends an already constructed item.
    pub fn with(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Validates and builds the catalog.
    pub fn build(self) -> Result<Catalog> {
        Catalog::new(self.items)
    }
}
