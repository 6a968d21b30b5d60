// Grid construction parameters and derived 2-D coordinate math

use crate::grid::traits::{GridError, GridResult};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

/// How model changes are translated into renderer instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReconcileMode {
    /// Rebuild a full snapshot and hand the renderer a structural diff
    FullRebuild,
    /// Keep the applied snapshot and reload only the changed cells
    IncrementalReload,
}

impl ReconcileMode {
    pub fn toggled(self) -> Self {
        match self {
            ReconcileMode::FullRebuild => ReconcileMode::IncrementalReload,
            ReconcileMode::IncrementalReload => ReconcileMode::FullRebuild,
        }
    }
}

/// Grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Width of the implicit 2-D grid each section is laid out on
    pub grid_columns: usize,
    /// Number of sections created at startup
    pub section_count: usize,
    /// Minimum cells per section (inclusive random bound)
    pub min_cells: usize,
    /// Maximum cells per section (inclusive random bound)
    pub max_cells: usize,
    /// Active reconciliation policy
    pub reconcile_mode: ReconcileMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_columns: 3,
            section_count: 5,
            min_cells: 7,
            max_cells: 12,
            reconcile_mode: ReconcileMode::FullRebuild,
        }
    }
}

impl GridConfig {
    pub fn new(grid_columns: usize, section_count: usize) -> Self {
        Self {
            grid_columns,
            section_count,
            ..Self::default()
        }
    }

    /// Check that the configuration describes a usable grid
    pub fn validate(&self) -> GridResult<()> {
        if self.grid_columns == 0 {
            return Err(GridError::ConfigError(
                "grid_columns must be at least 1".to_string(),
            ));
        }
        if self.section_count == 0 {
            return Err(GridError::ConfigError(
                "section_count must be at least 1".to_string(),
            ));
        }
        if self.min_cells == 0 {
            return Err(GridError::ConfigError(
                "min_cells must be at least 1".to_string(),
            ));
        }
        if self.min_cells > self.max_cells {
            return Err(GridError::ConfigError(format!(
                "min_cells {} exceeds max_cells {}",
                self.min_cells, self.max_cells
            )));
        }
        Ok(())
    }

    /// Grid row of the cell at sequence position `position`
    pub fn grid_row(&self, position: usize) -> usize {
        position / self.grid_columns
    }

    /// Grid column of the cell at sequence position `position`
    pub fn grid_column(&self, position: usize) -> usize {
        position % self.grid_columns
    }

    /// Inclusive range of positions sharing `position`'s grid row,
    /// clamped to the last valid position of a section with
    /// `cell_count` cells (the final row may be partial)
    pub fn row_span(&self, position: usize, cell_count: usize) -> RangeInclusive<usize> {
        let row = self.grid_row(position);
        let start = row * self.grid_columns;
        let end = ((row + 1) * self.grid_columns - 1).min(cell_count - 1);
        start..=end
    }

    /// Number of grid rows a section with `cell_count` cells occupies
    pub fn grid_rows(&self, cell_count: usize) -> usize {
        cell_count.div_ceil(self.grid_columns)
    }

    /// Load a configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GridResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: GridConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GridResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.grid_columns, 3);
        assert_eq!(config.section_count, 5);
        assert_eq!(config.min_cells, 7);
        assert_eq!(config.max_cells, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_configs() {
        let mut config = GridConfig::default();
        config.grid_columns = 0;
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.min_cells = 13;
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.section_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_grid_coordinates() {
        let config = GridConfig::default();
        assert_eq!(config.grid_row(0), 0);
        assert_eq!(config.grid_column(0), 0);
        assert_eq!(config.grid_row(7), 2);
        assert_eq!(config.grid_column(7), 1);
        assert_eq!(config.grid_rows(8), 3);
        assert_eq!(config.grid_rows(9), 3);
    }

    #[test]
    fn test_row_span_clamps_partial_final_row() {
        let config = GridConfig::default();
        // 8 cells in a 3-wide grid: rows are [0,1,2], [3,4,5], [6,7]
        assert_eq!(config.row_span(7, 8), 6..=7);
        assert_eq!(config.row_span(4, 8), 3..=5);
        assert_eq!(config.row_span(0, 8), 0..=2);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GridConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let decoded: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.grid_columns, config.grid_columns);
        assert_eq!(decoded.reconcile_mode, config.reconcile_mode);
    }
}
