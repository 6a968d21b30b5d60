// Render surface - the rendered-cell state a view layer holds,
// updated only through change descriptors

use crate::grid::{CellData, CellId, GridModel};
use crate::snapshot::ChangeDescriptor;
use std::collections::{HashMap, HashSet};

/// One rendered section: its header and the identities it shows, in order
#[derive(Debug, Clone)]
pub struct SurfaceSection {
    pub index: usize,
    pub title: String,
    pub ids: Vec<CellId>,
}

/// In-memory stand-in for a rendered view layer.
///
/// Holds the last-applied topology plus the attribute values each cell
/// was last drawn with. Cells are matched by identity; a cell's
/// displayed values change only when a descriptor names it, so values
/// for untouched cells may lag the model exactly as a real view's do.
#[derive(Debug, Default)]
pub struct RenderSurface {
    sections: Vec<SurfaceSection>,
    cells: HashMap<CellId, CellData>,
}

impl RenderSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial population: adopt the model's topology and draw every cell
    pub fn populate(&mut self, model: &GridModel) {
        self.sections = model
            .sections()
            .iter()
            .map(|section| SurfaceSection {
                index: section.index,
                title: section.title.clone(),
                ids: section.items.iter().map(CellData::id).collect(),
            })
            .collect();
        self.cells = model
            .sections()
            .iter()
            .flat_map(|s| s.items.iter())
            .map(|cell| (cell.id(), cell.clone()))
            .collect();
    }

    /// Apply one change descriptor, re-reading the model only for the
    /// cells the descriptor names
    pub fn apply(&mut self, descriptor: &ChangeDescriptor, model: &GridModel) {
        match descriptor {
            ChangeDescriptor::Rebuild { snapshot, diff } => {
                self.sections = snapshot
                    .sections
                    .iter()
                    .map(|section| SurfaceSection {
                        index: section.index,
                        title: section.title.clone(),
                        ids: section.items.iter().map(CellData::id).collect(),
                    })
                    .collect();

                let surviving: HashSet<CellId> = snapshot.ids().collect();
                self.cells.retain(|id, _| surviving.contains(id));

                for id in diff.inserted.iter().chain(diff.reloaded.iter()) {
                    if let Some(cell) = model.cell(*id) {
                        self.cells.insert(*id, cell.clone());
                    } else if let Some(cell) = snapshot
                        .sections
                        .iter()
                        .flat_map(|s| s.items.iter())
                        .find(|c| c.id() == *id)
                    {
                        // Identity no longer in the model: fall back to
                        // the payload baked into the snapshot
                        self.cells.insert(*id, cell.clone());
                    }
                }
            }
            ChangeDescriptor::Reload { cells } => {
                for id in cells {
                    if let Some(cell) = model.cell(*id) {
                        self.cells.insert(*id, cell.clone());
                    }
                }
            }
        }
    }

    /// The values a cell is currently drawn with
    pub fn displayed(&self, id: CellId) -> Option<&CellData> {
        self.cells.get(&id)
    }

    pub fn sections(&self) -> &[SurfaceSection] {
        &self.sections
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
