// Snapshot module - point-in-time captures of the model and the
// reconciliation policies that turn changed-cell sets into renderer
// instructions

pub mod diff;
pub mod reconciler;

use crate::grid::{CellData, CellId, GridModel};
use serde::{Deserialize, Serialize};

pub use diff::{diff_snapshots, SnapshotDiff};
pub use reconciler::{
    policy_for, ChangeDescriptor, FullRebuild, IncrementalReload, ReconcilePolicy,
};

/// One section as captured into a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotSection {
    pub index: usize,
    pub title: String,
    pub items: Vec<CellData>,
}

/// A full ordered representation of sections and cells at one point in
/// time. Cell payloads are baked in at capture and may go stale; cell
/// matching is by identity, so stale payloads are harmless to consumers
/// that re-read the model when told to reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub sections: Vec<SnapshotSection>,
}

impl Snapshot {
    /// Capture the current model state
    pub fn capture(model: &GridModel) -> Self {
        let sections = model
            .sections()
            .iter()
            .map(|section| SnapshotSection {
                index: section.index,
                title: section.title.clone(),
                items: section.items.clone(),
            })
            .collect();
        Self { sections }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn cell_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Whether the snapshot's topology contains the identity
    pub fn contains(&self, id: CellId) -> bool {
        self.sections
            .iter()
            .any(|s| s.index == id.section && s.items.iter().any(|c| c.index == id.index))
    }

    /// All cell identities in layout order
    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter().map(CellData::id))
    }
}
