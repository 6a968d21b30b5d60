// Tap Grid: sectioned grid-of-cells tap counter with snapshot reconciliation
// Selecting a cell bumps its value and its grid row/column running totals,
// then a reconciliation policy tells the renderer which cells to redraw

// Modular structure
pub mod config;
pub mod controller;
pub mod display;
pub mod grid;
pub mod snapshot;

// Re-export main types for convenience
pub use config::{GridConfig, ReconcileMode};
pub use controller::GridController;
pub use display::{color_category_for, ColorCategory, RenderSurface};
pub use grid::{CellData, CellId, GridError, GridModel, GridResult, Section};
pub use snapshot::{
    diff_snapshots, policy_for, ChangeDescriptor, FullRebuild, IncrementalReload,
    ReconcilePolicy, Snapshot, SnapshotDiff,
};
