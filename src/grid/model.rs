// Grid model - owns the section/cell state and the select mutation

use crate::config::GridConfig;
use crate::grid::cell::{CellData, CellId, Section};
use crate::grid::traits::{GridError, GridResult};
use log::debug;
use rand::Rng;
use std::collections::HashSet;

/// Ordered sections of cells plus the one mutation that touches them.
///
/// The model is single-writer: `select_cell` is the only mutating
/// method, and a call either fails validation with no effect or runs
/// all three passes to completion before returning.
pub struct GridModel {
    config: GridConfig,
    sections: Vec<Section>,
}

impl GridModel {
    /// Build a model whose per-section cell counts are drawn uniformly
    /// from the configured inclusive bounds
    pub fn new<R: Rng>(config: GridConfig, rng: &mut R) -> GridResult<Self> {
        config.validate()?;
        let counts: Vec<usize> = (0..config.section_count)
            .map(|_| rng.gen_range(config.min_cells..=config.max_cells))
            .collect();
        Self::from_counts(config, &counts)
    }

    /// Build a model with pinned per-section cell counts
    pub fn with_section_counts(config: GridConfig, counts: &[usize]) -> GridResult<Self> {
        config.validate()?;
        if counts.len() != config.section_count {
            return Err(GridError::ConfigError(format!(
                "expected {} section counts, got {}",
                config.section_count,
                counts.len()
            )));
        }
        Self::from_counts(config, counts)
    }

    fn from_counts(config: GridConfig, counts: &[usize]) -> GridResult<Self> {
        for (index, &count) in counts.iter().enumerate() {
            if count == 0 {
                return Err(GridError::ConfigError(format!(
                    "section {} would have no cells",
                    index
                )));
            }
        }
        let sections = counts
            .iter()
            .enumerate()
            .map(|(index, &count)| Section::new(index, count))
            .collect();
        Ok(Self { config, sections })
    }

    /// Apply one select to the addressed cell.
    ///
    /// Increments the cell's value, then the row totals of its grid
    /// row (clamped to the section's last position when the final row
    /// is partial), then the column totals of its grid column.
    /// Returns the de-duplicated set of changed cell identities.
    /// Fails with no mutation when either index is out of range.
    pub fn select_cell(
        &mut self,
        section: usize,
        position: usize,
    ) -> GridResult<HashSet<CellId>> {
        self.validate_address(section, position)?;

        let cell_count = self.sections[section].items.len();
        let row_span = self.config.row_span(position, cell_count);
        let column = self.config.grid_column(position);
        let columns = self.config.grid_columns;

        let items = &mut self.sections[section].items;
        let mut changed = HashSet::new();

        items[position].value += 1;

        for i in row_span {
            items[i].row_total += 1;
            changed.insert(items[i].id());
        }

        let mut i = column;
        while i < cell_count {
            items[i].column_total += 1;
            changed.insert(items[i].id());
            i += columns;
        }

        debug!(
            "select section={} position={} changed {} cells",
            section,
            position,
            changed.len()
        );
        Ok(changed)
    }

    fn validate_address(&self, section: usize, position: usize) -> GridResult<()> {
        let section_count = self.sections.len();
        if section >= section_count {
            return Err(GridError::InvalidSection {
                section,
                section_count,
            });
        }
        let cell_count = self.sections[section].items.len();
        if position >= cell_count {
            return Err(GridError::InvalidCell {
                section,
                position,
                cell_count,
            });
        }
        Ok(())
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// All sections in layout order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> GridResult<&Section> {
        self.sections.get(index).ok_or(GridError::InvalidSection {
            section: index,
            section_count: self.sections.len(),
        })
    }

    /// Current attribute values of one cell
    pub fn cell(&self, id: CellId) -> Option<&CellData> {
        self.sections.get(id.section)?.items.get(id.index)
    }

    pub fn header_title(&self, section: usize) -> GridResult<&str> {
        Ok(&self.section(section)?.title)
    }

    pub fn cell_count(&self, section: usize) -> GridResult<usize> {
        Ok(self.section(section)?.items.len())
    }

    pub fn total_cells(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
