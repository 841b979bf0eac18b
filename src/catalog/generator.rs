//! Seeded random catalog generation.

use super::item::Item;
use super::model::Catalog;
use crate::error::{Result, SelectError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for generating random catalogs.
///
/// Costs are drawn uniformly from `min_cost..=max_cost` and values from
/// `min_value..=max_value`. Items are named `item-0`, `item-1`, ...
///
/// # Examples
///
/// ```
/// use u_knapsack::catalog::GeneratorConfig;
///
/// let catalog = GeneratorConfig::new(20)
///     .with_cost_range(1, 50)
///     .with_value_range(0.0, 500.0)
///     .with_seed(7)
///     .generate()
///     .unwrap();
///
/// assert_eq!(catalog.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of items to generate.
    pub num_items: usize,

    /// Smallest cost (inclusive). Must be positive.
    pub min_cost: i64,

    /// Largest cost (inclusive).
    pub max_cost: i64,

    /// Smallest value (inclusive). Must be non-negative.
    pub min_value: f64,

    /// Largest value (inclusive).
    pub max_value: f64,

    /// Draw whole-number values only.
    pub integral_values: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_items: 10,
            min_cost: 1,
            max_cost: 100,
            min_value: 1.0,
            max_value: 100.0,
            integral_values: true,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration for `num_items` items.
    pub fn new(num_items: usize) -> Self {
        Self {
            num_items,
            ..Self::default()
        }
    }

    pub fn with_cost_range(mut self, min: i64, max: i64) -> Self {
        self.min_cost = min;
        self.max_cost = max;
        self
    }

    pub fn with_value_range(mut self, min: f64, max: f64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn with_integral_values(mut self, integral: bool) -> Self {
        self.integral_values = integral;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.min_cost <= 0 {
            return Err(format!("min_cost must be positive, got {}", self.min_cost));
        }
        if self.max_cost < self.min_cost {
            return Err("max_cost must be >= min_cost".into());
        }
        if !self.min_value.is_finite() || !self.max_value.is_finite() {
            return Err("value range must be finite".into());
        }
        if self.min_value < 0.0 {
            return Err(format!(
                "min_value must be non-negative, got {}",
                self.min_value
            ));
        }
        if self.max_value < self.min_value {
            return Err("max_value must be >= min_value".into());
        }
        if self.integral_values && self.min_value.ceil() > self.max_value.floor() {
            return Err("value range contains no whole number".into());
        }
        Ok(())
    }

    /// Generates a catalog.
    pub fn generate(&self) -> Result<Catalog> {
        self.validate().map_err(SelectError::InvalidConfig)?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let items = (0..self.num_items).map(|i| {
            let cost = rng.random_range(self.min_cost..=self.max_cost);
            let value = if self.integral_values {
                let lo = self.min_value.ceil() as i64;
                let hi = self.max_value.floor() as i64;
                rng.random_range(lo..=hi) as f64
            } else {
                rng.random_range(self.min_value..=self.max_value)
            };
            Item::new(format!("item-{i}"), cost, value)
        });

        Catalog::new(items.collect::<Vec<_>>())
    }
}
