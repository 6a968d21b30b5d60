// Cell and section data types
//
// Equality and hashing of CellData and Section are keyed on identity
// fields ONLY (section index, cell index), never on the mutable
// counters. Renderers and snapshot diffing match cells by identity, so
// two CellData values with different counters are still the same cell.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Stable identity of one cell: its section and its sequence position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    pub section: usize,
    pub index: usize,
}

impl CellId {
    pub fn new(section: usize, index: usize) -> Self {
        Self { section, index }
    }
}

/// One grid entry: an identity plus three mutable counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellData {
    pub section: usize,
    pub index: usize,
    pub title: String,
    pub value: u32,
    pub row_total: u32,
    pub column_total: u32,
}

impl CellData {
    /// Create a fresh cell with all counters at zero
    pub fn new(section: usize, index: usize) -> Self {
        Self {
            section,
            index,
            title: format!("Cell {}", index + 1),
            value: 0,
            row_total: 0,
            column_total: 0,
        }
    }

    pub fn id(&self) -> CellId {
        CellId::new(self.section, self.index)
    }
}

impl PartialEq for CellData {
    fn eq(&self, other: &Self) -> bool {
        self.section == other.section && self.index == other.index
    }
}

impl Eq for CellData {}

impl Hash for CellData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.section.hash(state);
        self.index.hash(state);
    }
}

/// A named, ordered group of cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub index: usize,
    pub title: String,
    pub items: Vec<CellData>,
}

impl Section {
    /// Create a section populated with `cell_count` zeroed cells
    pub fn new(index: usize, cell_count: usize) -> Self {
        let items = (0..cell_count).map(|i| CellData::new(index, i)).collect();
        Self {
            index,
            title: format!("Section {}", index + 1),
            items,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.items.len()
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Section {}

impl Hash for Section {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}
