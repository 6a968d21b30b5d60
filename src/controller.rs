// Grid controller - the seam between a view layer and the model

use crate::config::{GridConfig, ReconcileMode};
use crate::grid::{GridModel, GridResult, Section};
use crate::snapshot::{policy_for, ChangeDescriptor, ReconcilePolicy};
use log::{debug, info};
use rand::Rng;

/// Owns the model and the active reconciliation policy.
///
/// A view layer feeds selection events in through `on_cell_selected`
/// and applies the returned descriptor; reads go through
/// `current_sections` / `header_title` / `model`.
pub struct GridController {
    model: GridModel,
    policy: Box<dyn ReconcilePolicy>,
}

impl GridController {
    /// Build a controller over a randomly populated model
    pub fn new<R: Rng>(config: GridConfig, rng: &mut R) -> GridResult<Self> {
        let mode = config.reconcile_mode;
        let model = GridModel::new(config, rng)?;
        info!(
            "grid ready: {} sections, {} cells, {:?} reconciliation",
            model.sections().len(),
            model.total_cells(),
            mode
        );
        let policy = policy_for(mode, &model);
        Ok(Self { model, policy })
    }

    /// Build a controller with pinned per-section cell counts
    pub fn with_section_counts(config: GridConfig, counts: &[usize]) -> GridResult<Self> {
        let mode = config.reconcile_mode;
        let model = GridModel::with_section_counts(config, counts)?;
        let policy = policy_for(mode, &model);
        Ok(Self { model, policy })
    }

    /// Handle one cell selection: mutate the model, then ask the active
    /// policy for the renderer instruction
    pub fn on_cell_selected(
        &mut self,
        section: usize,
        position: usize,
    ) -> GridResult<ChangeDescriptor> {
        let changed = self.model.select_cell(section, position)?;
        let descriptor = self.policy.reconcile(&self.model, &changed);
        debug!(
            "selection ({}, {}) -> {} cells to reload",
            section,
            position,
            descriptor.reloaded_cells().len()
        );
        Ok(descriptor)
    }

    /// All sections for initial population
    pub fn current_sections(&self) -> &[Section] {
        self.model.sections()
    }

    pub fn header_title(&self, section: usize) -> GridResult<&str> {
        self.model.header_title(section)
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn reconcile_mode(&self) -> ReconcileMode {
        self.policy.mode()
    }

    /// Switch reconciliation policy. The incoming policy is seeded from
    /// current model state, so no pre-switch change replays or is lost.
    pub fn set_reconcile_mode(&mut self, mode: ReconcileMode) {
        if mode == self.policy.mode() {
            return;
        }
        info!("switching reconciliation to {:?}", mode);
        self.policy = policy_for(mode, &self.model);
    }
}
