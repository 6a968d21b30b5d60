// Reconciliation policies - translate "these identities changed" into
// an instruction a renderer can apply
//
// Two interchangeable policies cover the same contract at different
// cost: FullRebuild recaptures everything and diffs, IncrementalReload
// keeps the applied snapshot and lists only the cells to reload. Either
// way the renderer re-reads current values from the model for the cells
// it is told to redraw, so both end at the same visible state.

use crate::config::ReconcileMode;
use crate::grid::{CellId, GridModel};
use crate::snapshot::{diff_snapshots, Snapshot, SnapshotDiff};
use log::warn;
use std::collections::HashSet;

/// Instruction handed to the renderer after one mutation
#[derive(Debug, Clone)]
pub enum ChangeDescriptor {
    /// Replace the rendered topology with `snapshot`, applying `diff`
    Rebuild {
        snapshot: Snapshot,
        diff: SnapshotDiff,
    },
    /// Keep the rendered topology, re-read only these cells
    Reload { cells: Vec<CellId> },
}

impl ChangeDescriptor {
    /// The identities the renderer must re-read from the model
    pub fn reloaded_cells(&self) -> &[CellId] {
        match self {
            ChangeDescriptor::Rebuild { diff, .. } => &diff.reloaded,
            ChangeDescriptor::Reload { cells } => cells,
        }
    }
}

/// Strategy seam between the model and a renderer
pub trait ReconcilePolicy {
    /// Which policy this is
    fn mode(&self) -> ReconcileMode;

    /// Build the renderer instruction for one completed mutation
    fn reconcile(&mut self, model: &GridModel, changed: &HashSet<CellId>) -> ChangeDescriptor;
}

/// Construct the policy for a mode, seeded from current model state
pub fn policy_for(mode: ReconcileMode, model: &GridModel) -> Box<dyn ReconcilePolicy> {
    match mode {
        ReconcileMode::FullRebuild => Box::new(FullRebuild::new(model)),
        ReconcileMode::IncrementalReload => Box::new(IncrementalReload::new(model)),
    }
}

fn sorted_ids(changed: &HashSet<CellId>) -> Vec<CellId> {
    let mut cells: Vec<CellId> = changed.iter().copied().collect();
    cells.sort();
    cells
}

/// Recapture the whole model and diff against the previous capture
pub struct FullRebuild {
    last: Snapshot,
}

impl FullRebuild {
    pub fn new(model: &GridModel) -> Self {
        Self {
            last: Snapshot::capture(model),
        }
    }
}

impl ReconcilePolicy for FullRebuild {
    fn mode(&self) -> ReconcileMode {
        ReconcileMode::FullRebuild
    }

    fn reconcile(&mut self, model: &GridModel, changed: &HashSet<CellId>) -> ChangeDescriptor {
        let next = Snapshot::capture(model);
        let mut diff = diff_snapshots(&self.last, &next);
        diff.reloaded = sorted_ids(changed);
        self.last = next.clone();
        ChangeDescriptor::Rebuild {
            snapshot: next,
            diff,
        }
    }
}

/// Keep the snapshot applied at construction and reload changed cells
/// in place. The held payload values go stale as mutations accumulate;
/// only the topology matters, since reloads re-read the model.
pub struct IncrementalReload {
    applied: Snapshot,
}

impl IncrementalReload {
    pub fn new(model: &GridModel) -> Self {
        Self {
            applied: Snapshot::capture(model),
        }
    }
}

impl ReconcilePolicy for IncrementalReload {
    fn mode(&self) -> ReconcileMode {
        ReconcileMode::IncrementalReload
    }

    fn reconcile(&mut self, _model: &GridModel, changed: &HashSet<CellId>) -> ChangeDescriptor {
        let cells = sorted_ids(changed);
        // GridModel only reports identities it owns; guard anyway so a
        // foreign caller surfaces loudly instead of desyncing the view
        for id in &cells {
            if !self.applied.contains(*id) {
                warn!(
                    "reload requested for unknown cell (section {}, index {})",
                    id.section, id.index
                );
            }
        }
        ChangeDescriptor::Reload { cells }
    }
}
