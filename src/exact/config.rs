//! Exact solver configuration.

/// Default upper bound on the number of DP cells (`(n + 1) * (budget + 1)`).
///
/// At 8 bytes per cell this is 512 MiB.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 64 * 1024 * 1024;

/// Configuration for the [`ExactSelector`](super::ExactSelector).
///
/// # Examples
///
/// ```
/// use u_knapsack::exact::ExactConfig;
///
/// let config = ExactConfig::default()
///     .with_max_table_cells(1_000_000)
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ExactConfig {
    /// Largest table the solver may allocate, in cells.
    ///
    /// Solving fails with
    /// [`SelectError::TableTooLarge`](crate::SelectError::TableTooLarge)
    /// before allocating when the table would be larger.
    pub max_table_cells: usize,

    /// Whether to fill each table row in parallel using rayon.
    ///
    /// Only has an effect when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            parallel: false,
        }
    }
}

impl ExactConfig {
    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = cells;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_table_cells == 0 {
            return Err("max_table_cells must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExactConfig::default();
        assert_eq!(config.max_table_cells, DEFAULT_MAX_TABLE_CELLS);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_cells() {
        let config = ExactConfig::default().with_max_table_cells(0);
        assert!(config.validate().is_err());
    }
}
