//! Dock manager - the layout engine over the widget arena
//!
//! The manager owns the widget tree and the dockable registry. Structural
//! operations live in `engine`, the layout string writer in `serialize` and
//! the reader in `parse`.
//!
//! Every public operation leaves the tree consistent:
//! - no paned container with fewer than two children
//! - no dock notebook without pages
//! - no open dialog without content

mod engine;
mod link;
mod parse;
mod serialize;

use std::collections::BTreeMap;

pub use link::LinkPoint;
pub use parse::{LoadReport, ParseIssue, ParseIssueKind};

use crate::messages::DockEvent;
use crate::model::{
    DialogId, Dockable, DockableInfo, Geometry, WidgetId, WidgetKind, WidgetTree,
};
use crate::panel::{DockError, Registry};

/// Size of a dialog created for a dockable with no remembered size
pub const DEFAULT_DIALOG_SIZE: (i32, i32) = (300, 400);

/// Owner of the widget tree, the dockable registry, and pending notifications
#[derive(Debug, Clone)]
pub struct DockManager {
    tree: WidgetTree,
    registry: Registry,
    events: Vec<DockEvent>,
    default_dialog_size: (i32, i32),
    /// Geometry set for dialog ids that have not opened yet
    pending_geometry: BTreeMap<DialogId, Geometry>,
}

impl Default for DockManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DockManager {
    pub fn new() -> Self {
        Self {
            tree: WidgetTree::new(),
            registry: Registry::new(),
            events: Vec::new(),
            default_dialog_size: DEFAULT_DIALOG_SIZE,
            pending_geometry: BTreeMap::new(),
        }
    }

    /// Use a different size for dialogs opened by `present`
    pub fn with_dialog_size(mut self, size: (i32, i32)) -> Self {
        self.default_dialog_size = size;
        self
    }

    pub fn default_dialog_size(&self) -> (i32, i32) {
        self.default_dialog_size
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Drain queued notifications
    pub fn take_events(&mut self) -> Vec<DockEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------------

    /// Add a dockable to the arena and the registry. It starts unattached.
    pub fn register_dockable(&mut self, dockable: Dockable) -> Result<WidgetId, DockError> {
        Registry::validate_name(&dockable.name)?;
        if self.registry.find(&dockable.name).is_ok() {
            return Err(DockError::DuplicateName(dockable.name));
        }

        let id = self.tree.create_dockable(DockableInfo {
            name: dockable.name.clone(),
            local_name: dockable.local_name,
            visible: true,
            saved_size: None,
        });
        self.registry.register(&dockable.name, id)?;
        tracing::info!("Registered dockable \"{}\"", dockable.name);
        self.events
            .push(DockEvent::DockableRegistered(dockable.name));
        Ok(id)
    }

    /// Detach a dockable from the layout and forget it.
    /// Returns false when it was not registered.
    pub fn unregister_dockable(&mut self, id: WidgetId) -> bool {
        if !self.registry.contains(id) {
            return false;
        }
        self.remove_widget_recursive(id);
        let name = self.registry.unregister(id).unwrap_or_default();
        self.tree.remove_dockable(id);
        tracing::info!("Unregistered dockable \"{}\"", name);
        self.events.push(DockEvent::DockableUnregistered(name));
        true
    }

    pub fn find_dockable(&self, name: &str) -> Result<WidgetId, DockError> {
        self.registry.find(name)
    }

    /// Name of a registered dockable
    pub fn dockable_name(&self, id: WidgetId) -> Option<&str> {
        self.registry.name_of(id)
    }

    // ------------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------------

    /// Bring a dockable to the front, ignoring unknown names
    pub fn present(&mut self, name: &str) {
        match self.find_dockable(name) {
            Ok(id) => self.present_dockable(id),
            Err(e) => tracing::debug!("present: {}", e),
        }
    }

    /// Show a dockable: select its tab and show its window, or float it in a
    /// new dialog when it is not docked anywhere.
    pub fn present_dockable(&mut self, id: WidgetId) {
        let Some(info) = self.tree.get(id).and_then(|w| w.as_dockable()).cloned() else {
            return;
        };

        if let Some(book) = self.tree.parent(id) {
            self.tree.set_current_page(book, id);
            if let Some(window) = self.tree.window_of(book) {
                self.tree.set_visible(window, true);
            }
            return;
        }

        let book = self.tree.create_notebook();
        self.tree.notebook_insert(book, id, None);

        let size = info.saved_size.unwrap_or(self.default_dialog_size);
        let dialog = self.open_dialog(self.next_dialog_geometry(size));
        LinkPoint::Window(dialog).link(&mut self.tree, book);
        self.tree.set_title(dialog, info.local_name);
        tracing::debug!("Floated dockable \"{}\" in a new dialog", info.name);
    }

    /// Tear a dockable out of the layout and float it in its own dialog
    pub fn detach(&mut self, id: WidgetId) {
        let Some(window) = self.tree.window_of(id) else {
            self.present_dockable(id);
            return;
        };
        // Remember the panel's share of its window as its floating size
        let size = self
            .tree
            .geometry(window)
            .map(|g| (g.width, g.height));
        if let Some(WidgetKind::Dockable(info)) = self.tree.get_mut(id).map(|w| &mut w.kind) {
            info.saved_size = size;
        }
        self.remove_widget_recursive(id);
        self.present_dockable(id);
    }

    /// Drop a dockable onto a notebook tab: insert it before `index`, or
    /// reorder it when it already lives in that notebook.
    pub fn move_to_notebook(&mut self, dockable: WidgetId, book: WidgetId, index: Option<usize>) -> bool {
        let is_book = matches!(
            self.tree.get(book).map(|w| &w.kind),
            Some(WidgetKind::Notebook { allow_empty: false, .. })
        );
        if !is_book || !self.registry.contains(dockable) {
            return false;
        }

        let old_parent = self.tree.parent(dockable);
        if old_parent == Some(book) {
            self.tree.notebook_insert(book, dockable, index);
            return true;
        }

        self.tree.detach(dockable);
        self.tree.notebook_insert(book, dockable, index);
        if let Some(old_parent) = old_parent {
            self.remove_empty_container_recursive(old_parent);
        }
        self.present_dockable(dockable);
        true
    }

    // ------------------------------------------------------------------------
    // Dialogs
    // ------------------------------------------------------------------------

    /// Open an empty dialog. Any pending geometry for its id is consumed;
    /// callers with a position of their own pass it in `geometry`.
    pub(crate) fn open_dialog(&mut self, geometry: Geometry) -> WidgetId {
        let dialog = self.tree.create_dialog(geometry);
        self.tree.set_visible(dialog, true);
        if let Some(dialog_id) = self.tree.dialog_id(dialog) {
            self.pending_geometry.remove(&dialog_id);
            self.events.push(DockEvent::DialogOpened(dialog_id));
        }
        dialog
    }

    /// Geometry for a dialog opened without a saved position: whatever was
    /// set for the next dialog id, else `size` at the origin
    pub(crate) fn next_dialog_geometry(&self, size: (i32, i32)) -> Geometry {
        self.pending_geometry
            .get(&self.tree.next_dialog_id())
            .copied()
            .unwrap_or(Geometry::new(0, 0, size.0, size.1))
    }

    pub(crate) fn close_window(&mut self, window: WidgetId) {
        if let Some(dialog_id) = self.tree.close_window(window) {
            tracing::debug!("Closed empty dialog {:?}", dialog_id);
            self.events.push(DockEvent::DialogClosed(dialog_id));
        }
    }

    /// Find an open dialog by id
    pub fn find_dialog(&self, dialog_id: DialogId) -> Option<WidgetId> {
        self.tree.find_dialog(dialog_id)
    }

    /// Geometry of an open dialog, or the one held for an id not yet opened
    pub fn dialog_geometry(&self, dialog_id: DialogId) -> Option<Geometry> {
        match self.tree.find_dialog(dialog_id) {
            Some(dialog) => self.tree.geometry(dialog),
            None => self.pending_geometry.get(&dialog_id).copied(),
        }
    }

    /// Ids with geometry held for a dialog that has not opened yet
    pub fn pending_dialog_ids(&self) -> impl Iterator<Item = DialogId> + '_ {
        self.pending_geometry.keys().copied()
    }

    /// Resize or move a dialog by id. For an id that has not opened yet the
    /// geometry is held and applied when that dialog opens without a saved
    /// position. Returns false for ids whose dialog has already closed.
    pub fn set_dialog_geometry(&mut self, dialog_id: DialogId, geometry: Geometry) -> bool {
        if let Some(dialog) = self.tree.find_dialog(dialog_id) {
            self.tree.set_geometry(dialog, geometry);
            return true;
        }
        if dialog_id < self.tree.next_dialog_id() {
            tracing::debug!("Dialog {:?} is closed; ignoring geometry", dialog_id);
            return false;
        }
        self.pending_geometry.insert(dialog_id, geometry);
        true
    }

    pub fn set_window_geometry(&mut self, window: WidgetId, geometry: Geometry) {
        self.tree.set_geometry(window, geometry);
    }

    pub fn show_all_dialogs(&mut self) {
        for dialog in self.tree.dialogs().to_vec() {
            self.tree.set_visible(dialog, true);
        }
    }

    /// Title each dialog after the dockables it holds
    pub fn update_window_titles(&mut self) {
        for dialog in self.tree.dialogs().to_vec() {
            let title = self
                .tree
                .dockables_in(dialog)
                .into_iter()
                .filter_map(|id| self.tree.get(id).and_then(|w| w.as_dockable()))
                .map(|info| info.local_name.as_str())
                .collect::<Vec<_>>()
                .join(" - ");
            self.tree.set_title(dialog, title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_emits_event_and_starts_unattached() {
        let mut manager = DockManager::new();
        let id = manager.register_dockable(Dockable::named("Params")).unwrap();
        assert_eq!(manager.tree().parent(id), None);
        assert_eq!(
            manager.take_events(),
            vec![DockEvent::DockableRegistered("Params".to_string())]
        );
        assert!(manager.take_events().is_empty());
    }

    #[test]
    fn test_register_duplicate_leaves_arena_untouched() {
        let mut manager = DockManager::new();
        manager.register_dockable(Dockable::named("Params")).unwrap();
        let before = manager.tree().len();
        assert!(manager
            .register_dockable(Dockable::named("Params"))
            .is_err());
        assert_eq!(manager.tree().len(), before);
    }

    #[test]
    fn test_present_unknown_name_is_a_no_op() {
        let mut manager = DockManager::new();
        let before = manager.tree().len();
        manager.present("Nope");
        assert_eq!(manager.tree().len(), before);
        assert!(manager.tree().dialogs().is_empty());
    }

    #[test]
    fn test_present_floats_unattached_dockable() {
        let mut manager = DockManager::new();
        let id = manager
            .register_dockable(Dockable::new("Params", "Parameters"))
            .unwrap();
        manager.present("Params");

        let dialogs = manager.tree().dialogs().to_vec();
        assert_eq!(dialogs.len(), 1);
        assert_eq!(manager.tree().window_of(id), Some(dialogs[0]));
        assert_eq!(manager.tree().title(dialogs[0]), Some("Parameters"));
        assert!(manager.tree().is_visible(dialogs[0]));
    }

    #[test]
    fn test_pending_geometry_applies_to_next_dialog() {
        let mut manager = DockManager::new();
        manager.register_dockable(Dockable::named("Params")).unwrap();
        let next = manager.tree().next_dialog_id();
        assert!(manager.set_dialog_geometry(next, Geometry::new(5, 6, 640, 480)));
        assert!(manager.tree().dialogs().is_empty());

        manager.present("Params");
        let dialog = manager.find_dialog(next).unwrap();
        assert_eq!(manager.tree().geometry(dialog), Some(Geometry::new(5, 6, 640, 480)));
        assert_eq!(manager.pending_dialog_ids().count(), 0);
    }
}
