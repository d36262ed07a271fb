//! Application model - the complete state of the dock system
//!
//! This module contains the widget arena types and the top-level model that
//! the update function operates on.

pub mod tree;
pub mod widget;

pub use tree::{Slot, WidgetTree, MAIN_WINDOW_SIZE};
pub use widget::{
    DialogId, Dockable, DockableInfo, Geometry, Orientation, Side, Widget, WidgetId, WidgetKind,
    WindowRole,
};

use crate::config::DockConfig;
use crate::layout::{DockManager, LoadReport};

/// The complete application model
#[derive(Debug, Clone)]
pub struct DockModel {
    /// Widget tree, registry and layout engine
    pub dock: DockManager,
    /// Persisted dock configuration
    pub config: DockConfig,
    /// Problems found by the most recent layout load
    pub last_load_report: Option<LoadReport>,
}

impl DockModel {
    /// Create a model and register the configured panels
    pub fn new(config: DockConfig) -> Self {
        let mut dock = DockManager::new().with_dialog_size(config.dialog_size);
        for name in &config.panels {
            if let Err(e) = dock.register_dockable(Dockable::named(name.clone())) {
                tracing::warn!("Skipping configured panel: {}", e);
            }
        }
        Self {
            dock,
            config,
            last_load_report: None,
        }
    }

    /// Apply a layout string and remember what went wrong
    pub fn apply_layout(&mut self, layout: &str) -> &LoadReport {
        let report = self.dock.load_layout(layout);
        self.last_load_report.insert(report)
    }
}
