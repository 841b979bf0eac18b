//! A single selectable item.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An item with a purchase cost and the value it contributes when chosen.
///
/// Items are plain data; validation happens when they are placed in a
/// [`Catalog`](super::Catalog).
///
/// # Examples
///
/// ```
/// use u_knapsack::catalog::Item;
///
/// let cola = Item::new("cola", 15, 220.0);
/// assert_eq!(cola.cost(), 15);
/// assert!((cola.ratio() - 220.0 / 15.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    name: String,
    cost: i64,
    value: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, cost: i64, value: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            value,
        }
    }

    /// Unique name of the item.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cost of selecting the item.
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Value gained by selecting the item.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value per unit of cost. Only meaningful for validated items.
    pub fn ratio(&self) -> f64 {
        self.value / self.cost as f64
    }

    /// Returns the reason this item is invalid, if any.
    pub(crate) fn violation(&self) -> Option<String> {
        if self.name.is_empty() {
            return Some("name must not be empty".into());
        }
        if self.cost <= 0 {
            return Some(format!("cost must be positive, got {}", self.cost));
        }
        if !self.value.is_finite() {
            return Some(format!("value must be finite, got {}", self.value));
        }
        if self.value < 0.0 {
            return Some(format!("value must be non-negative, got {}", self.value));
        }
        None
    }
}
