// Structural snapshot diffing - insertions, deletions, and moves
// between two captures, matched by cell identity

use crate::grid::CellId;
use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The structural difference between two snapshots, plus the explicit
/// reload list supplied by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDiff {
    pub inserted_sections: Vec<usize>,
    pub removed_sections: Vec<usize>,
    pub inserted: Vec<CellId>,
    pub removed: Vec<CellId>,
    pub moved: Vec<CellId>,
    pub reloaded: Vec<CellId>,
}

impl SnapshotDiff {
    /// True when the two snapshots had identical topology
    pub fn is_structural_noop(&self) -> bool {
        self.inserted_sections.is_empty()
            && self.removed_sections.is_empty()
            && self.inserted.is_empty()
            && self.removed.is_empty()
            && self.moved.is_empty()
    }
}

/// Diff two snapshots structurally. Identity equality drives matching,
/// payload values are ignored; value changes travel in `reloaded`,
/// which this function leaves empty for the caller to fill.
pub fn diff_snapshots(old: &Snapshot, new: &Snapshot) -> SnapshotDiff {
    let mut diff = SnapshotDiff::default();

    let old_sections: HashSet<usize> = old.sections.iter().map(|s| s.index).collect();
    let new_sections: HashSet<usize> = new.sections.iter().map(|s| s.index).collect();

    for section in &old.sections {
        if !new_sections.contains(&section.index) {
            diff.removed_sections.push(section.index);
            diff.removed
                .extend(section.items.iter().map(|c| c.id()));
        }
    }
    for section in &new.sections {
        if !old_sections.contains(&section.index) {
            diff.inserted_sections.push(section.index);
            diff.inserted
                .extend(section.items.iter().map(|c| c.id()));
        }
    }

    let old_ids: HashSet<CellId> = old.ids().collect();
    let new_ids: HashSet<CellId> = new.ids().collect();

    for section in &new.sections {
        if !old_sections.contains(&section.index) {
            continue;
        }
        for cell in &section.items {
            if !old_ids.contains(&cell.id()) {
                diff.inserted.push(cell.id());
            }
        }
    }
    for section in &old.sections {
        if !new_sections.contains(&section.index) {
            continue;
        }
        for cell in &section.items {
            if !new_ids.contains(&cell.id()) {
                diff.removed.push(cell.id());
            }
        }
    }

    // A cell moved when the relative order of surviving identities
    // differs between the captures
    let old_order: Vec<CellId> = old.ids().filter(|id| new_ids.contains(id)).collect();
    let new_order: Vec<CellId> = new.ids().filter(|id| old_ids.contains(id)).collect();
    for (before, after) in old_order.iter().zip(new_order.iter()) {
        if before != after && !diff.moved.contains(after) {
            diff.moved.push(*after);
        }
    }

    diff
}
