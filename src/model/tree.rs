//! Widget arena - owns every node of the dock layout
//!
//! The arena mirrors a retained-mode toolkit's object tree: each node knows its
//! parent, containers know their children. Only the primitives in this module
//! touch container internals; everything above goes through `LinkPoint` and
//! the layout engine.

use std::collections::HashMap;

use super::widget::{
    DialogId, DockableInfo, Geometry, Orientation, Side, Widget, WidgetId, WidgetKind, WindowRole,
};

/// Default size of the main window
pub const MAIN_WINDOW_SIZE: (i32, i32) = (1024, 768);

/// Addressable child slot of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The single child of a bin or window
    Sole,
    /// One side of a paned container
    Side(Side),
}

/// Arena of widgets plus the well-known singletons
#[derive(Debug, Clone)]
pub struct WidgetTree {
    widgets: HashMap<WidgetId, Widget>,
    main_window: WidgetId,
    root_bin: WidgetId,
    main_notebook: WidgetId,
    /// Open floating dialogs in creation order
    dialogs: Vec<WidgetId>,
    next_widget_id: u64,
    next_dialog_id: u64,
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetTree {
    /// Create a tree holding the main window, its root bin, and the main notebook
    pub fn new() -> Self {
        let mut tree = Self {
            widgets: HashMap::new(),
            main_window: WidgetId(0),
            root_bin: WidgetId(0),
            main_notebook: WidgetId(0),
            dialogs: Vec::new(),
            next_widget_id: 1,
            next_dialog_id: 1,
        };

        let (width, height) = MAIN_WINDOW_SIZE;
        tree.main_window = tree.insert(WidgetKind::Window {
            role: WindowRole::Main,
            geometry: Geometry::new(0, 0, width, height),
            child: None,
            visible: true,
            title: String::new(),
        });
        tree.root_bin = tree.insert(WidgetKind::Bin { child: None });
        tree.main_notebook = tree.insert(WidgetKind::Notebook {
            pages: Vec::new(),
            current: 0,
            allow_empty: true,
        });
        tree.fill_slot(tree.main_window, Slot::Sole, tree.root_bin);
        tree.fill_slot(tree.root_bin, Slot::Sole, tree.main_notebook);
        tree
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(&id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.widgets.get(&id).and_then(|w| w.parent)
    }

    pub fn main_window(&self) -> WidgetId {
        self.main_window
    }

    pub fn root_bin(&self) -> WidgetId {
        self.root_bin
    }

    pub fn main_notebook(&self) -> WidgetId {
        self.main_notebook
    }

    /// Widget currently held by the main window's root bin
    pub fn root_child(&self) -> Option<WidgetId> {
        self.slot(self.root_bin, Slot::Sole)
    }

    pub fn dialogs(&self) -> &[WidgetId] {
        &self.dialogs
    }

    /// True for nodes that a container discard must never destroy
    pub fn is_protected(&self, id: WidgetId) -> bool {
        id == self.main_window || id == self.root_bin || id == self.main_notebook
    }

    /// Walk from the widget's parent up to the top-level window
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            // A cycle here would be a bug in the engine; bail instead of spinning
            if out.contains(&parent) {
                tracing::error!("cycle detected above widget {:?}", id);
                break;
            }
            out.push(parent);
            current = self.parent(parent);
        }
        out
    }

    /// Is `ancestor` a strict ancestor of `widget`
    pub fn is_ancestor(&self, ancestor: WidgetId, widget: WidgetId) -> bool {
        self.ancestors(widget).contains(&ancestor)
    }

    /// Top-level window containing the widget (the widget itself if it is one)
    pub fn window_of(&self, id: WidgetId) -> Option<WidgetId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|w| self.get(*w).is_some_and(Widget::is_window))
    }

    pub fn dialog_id(&self, window: WidgetId) -> Option<DialogId> {
        match self.get(window).map(|w| &w.kind) {
            Some(WidgetKind::Window {
                role: WindowRole::Dialog(id),
                ..
            }) => Some(*id),
            _ => None,
        }
    }

    pub fn find_dialog(&self, dialog_id: DialogId) -> Option<WidgetId> {
        self.dialogs
            .iter()
            .copied()
            .find(|w| self.dialog_id(*w) == Some(dialog_id))
    }

    /// Id the next opened dialog will get. Ids are never reused.
    pub fn next_dialog_id(&self) -> DialogId {
        DialogId(self.next_dialog_id)
    }

    pub fn geometry(&self, window: WidgetId) -> Option<Geometry> {
        match self.get(window).map(|w| &w.kind) {
            Some(WidgetKind::Window { geometry, .. }) => Some(*geometry),
            _ => None,
        }
    }

    pub fn is_visible(&self, window: WidgetId) -> bool {
        matches!(
            self.get(window).map(|w| &w.kind),
            Some(WidgetKind::Window { visible: true, .. })
        )
    }

    pub fn title(&self, window: WidgetId) -> Option<&str> {
        match self.get(window).map(|w| &w.kind) {
            Some(WidgetKind::Window { title, .. }) => Some(title.as_str()),
            _ => None,
        }
    }

    /// Pages of a notebook (empty for anything else)
    pub fn pages(&self, book: WidgetId) -> &[WidgetId] {
        match self.get(book).map(|w| &w.kind) {
            Some(WidgetKind::Notebook { pages, .. }) => pages,
            _ => &[],
        }
    }

    pub fn current_page(&self, book: WidgetId) -> Option<WidgetId> {
        match self.get(book).map(|w| &w.kind) {
            Some(WidgetKind::Notebook { pages, current, .. }) => pages.get(*current).copied(),
            _ => None,
        }
    }

    /// Content of a bin/window slot or a paned side
    pub fn slot(&self, container: WidgetId, slot: Slot) -> Option<WidgetId> {
        match (self.get(container).map(|w| &w.kind), slot) {
            (Some(WidgetKind::Bin { child }), Slot::Sole)
            | (Some(WidgetKind::Window { child, .. }), Slot::Sole) => *child,
            (Some(WidgetKind::Paned { first, .. }), Slot::Side(Side::First)) => *first,
            (Some(WidgetKind::Paned { second, .. }), Slot::Side(Side::Second)) => *second,
            _ => None,
        }
    }

    /// All dockables below `id` in layout order
    pub fn dockables_in(&self, id: WidgetId) -> Vec<WidgetId> {
        let Some(widget) = self.get(id) else {
            return Vec::new();
        };
        if widget.is_dockable() {
            return vec![id];
        }
        widget
            .children()
            .into_iter()
            .flat_map(|child| self.dockables_in(child))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Node creation
    // ------------------------------------------------------------------------

    fn insert(&mut self, kind: WidgetKind) -> WidgetId {
        let id = WidgetId(self.next_widget_id);
        self.next_widget_id += 1;
        self.widgets.insert(
            id,
            Widget {
                id,
                parent: None,
                kind,
            },
        );
        id
    }

    pub(crate) fn create_dockable(&mut self, info: DockableInfo) -> WidgetId {
        self.insert(WidgetKind::Dockable(info))
    }

    pub(crate) fn create_notebook(&mut self) -> WidgetId {
        self.insert(WidgetKind::Notebook {
            pages: Vec::new(),
            current: 0,
            allow_empty: false,
        })
    }

    pub(crate) fn create_paned(&mut self, orientation: Orientation, position: i32) -> WidgetId {
        self.insert(WidgetKind::Paned {
            orientation,
            position,
            first: None,
            second: None,
        })
    }

    pub(crate) fn create_dialog(&mut self, geometry: Geometry) -> WidgetId {
        let dialog_id = self.next_dialog_id();
        self.next_dialog_id += 1;
        let id = self.insert(WidgetKind::Window {
            role: WindowRole::Dialog(dialog_id),
            geometry,
            child: None,
            visible: false,
            title: String::new(),
        });
        self.dialogs.push(id);
        id
    }

    // ------------------------------------------------------------------------
    // Structural primitives
    // ------------------------------------------------------------------------

    /// Remove the widget from whatever container holds it.
    /// Returns the former parent.
    pub(crate) fn detach(&mut self, id: WidgetId) -> Option<WidgetId> {
        let parent = self.parent(id)?;
        if let Some(widget) = self.widgets.get_mut(&parent) {
            match &mut widget.kind {
                WidgetKind::Bin { child } | WidgetKind::Window { child, .. } => {
                    if *child == Some(id) {
                        *child = None;
                    }
                }
                WidgetKind::Paned { first, second, .. } => {
                    if *first == Some(id) {
                        *first = None;
                    } else if *second == Some(id) {
                        *second = None;
                    }
                }
                WidgetKind::Notebook { pages, current, .. } => {
                    if let Some(index) = pages.iter().position(|p| *p == id) {
                        pages.remove(index);
                        if *current > index || *current >= pages.len() {
                            *current = current.saturating_sub(1);
                        }
                    }
                }
                WidgetKind::Dockable(_) => {}
            }
        }
        if let Some(widget) = self.widgets.get_mut(&id) {
            widget.parent = None;
        }
        Some(parent)
    }

    /// Empty a slot, returning what it held
    pub(crate) fn take_slot(&mut self, container: WidgetId, slot: Slot) -> Option<WidgetId> {
        let child = self.slot(container, slot)?;
        self.detach(child);
        Some(child)
    }

    /// Put a widget into a slot, reparenting it from wherever it was
    pub(crate) fn fill_slot(&mut self, container: WidgetId, slot: Slot, widget: WidgetId) {
        if !self.contains(container) || !self.contains(widget) {
            return;
        }
        if self.parent(widget).is_some() {
            self.detach(widget);
        }
        if let Some(occupant) = self.take_slot(container, slot) {
            tracing::warn!(
                "slot {:?} of {:?} already held {:?}; it is now unattached",
                slot,
                container,
                occupant
            );
        }

        let filled = match (self.widgets.get_mut(&container).map(|w| &mut w.kind), slot) {
            (Some(WidgetKind::Bin { child }), Slot::Sole)
            | (Some(WidgetKind::Window { child, .. }), Slot::Sole) => {
                *child = Some(widget);
                true
            }
            (Some(WidgetKind::Paned { first, .. }), Slot::Side(Side::First)) => {
                *first = Some(widget);
                true
            }
            (Some(WidgetKind::Paned { second, .. }), Slot::Side(Side::Second)) => {
                *second = Some(widget);
                true
            }
            _ => false,
        };

        if filled {
            if let Some(w) = self.widgets.get_mut(&widget) {
                w.parent = Some(container);
            }
        } else {
            tracing::warn!("{:?} has no slot {:?}", container, slot);
        }
    }

    /// Insert a page into a notebook before `index` (append when `None`)
    /// and make it the current page. Reorders when the page is already there.
    pub(crate) fn notebook_insert(&mut self, book: WidgetId, page: WidgetId, index: Option<usize>) {
        if !matches!(
            self.get(book).map(|w| &w.kind),
            Some(WidgetKind::Notebook { .. })
        ) || !self.contains(page)
        {
            return;
        }

        // Reordering inside the same book shifts the target index
        let mut index = index;
        if self.parent(page) == Some(book) {
            if let (Some(target), Some(old)) =
                (index, self.pages(book).iter().position(|p| *p == page))
            {
                if old < target {
                    index = Some(target - 1);
                }
            }
        }
        if self.parent(page).is_some() {
            self.detach(page);
        }

        if let Some(WidgetKind::Notebook { pages, current, .. }) =
            self.widgets.get_mut(&book).map(|w| &mut w.kind)
        {
            let at = index.map_or(pages.len(), |i| i.min(pages.len()));
            pages.insert(at, page);
            *current = at;
        }
        if let Some(w) = self.widgets.get_mut(&page) {
            w.parent = Some(book);
        }
    }

    pub(crate) fn set_current_page(&mut self, book: WidgetId, page: WidgetId) {
        if let Some(WidgetKind::Notebook { pages, current, .. }) =
            self.widgets.get_mut(&book).map(|w| &mut w.kind)
        {
            if let Some(index) = pages.iter().position(|p| *p == page) {
                *current = index;
            }
        }
    }

    pub(crate) fn set_geometry(&mut self, window: WidgetId, value: Geometry) {
        if let Some(WidgetKind::Window { geometry, .. }) =
            self.widgets.get_mut(&window).map(|w| &mut w.kind)
        {
            *geometry = value;
        }
    }

    pub(crate) fn set_visible(&mut self, window: WidgetId, value: bool) {
        if let Some(WidgetKind::Window { visible, .. }) =
            self.widgets.get_mut(&window).map(|w| &mut w.kind)
        {
            *visible = value;
        }
    }

    pub(crate) fn set_title(&mut self, window: WidgetId, value: String) {
        if let Some(WidgetKind::Window { title, .. }) =
            self.widgets.get_mut(&window).map(|w| &mut w.kind)
        {
            *title = value;
        }
    }

    /// Destroy a container and every container below it.
    ///
    /// Dockables, windows and the singletons are never destroyed here; they
    /// are only detached and left for their owners.
    pub(crate) fn discard(&mut self, id: WidgetId) {
        let Some(widget) = self.get(id) else {
            return;
        };
        if widget.is_dockable() || widget.is_window() || self.is_protected(id) {
            self.detach(id);
            return;
        }

        let children = widget.children();
        self.detach(id);
        for child in children {
            self.detach(child);
            self.discard(child);
        }
        self.widgets.remove(&id);
    }

    /// Close a window: dialogs are destroyed, the main window is only hidden.
    /// Returns the id of a destroyed dialog.
    pub(crate) fn close_window(&mut self, window: WidgetId) -> Option<DialogId> {
        if window == self.main_window {
            self.set_visible(window, false);
            return None;
        }
        let dialog_id = self.dialog_id(window)?;
        if let Some(child) = self.take_slot(window, Slot::Sole) {
            self.discard(child);
        }
        self.dialogs.retain(|d| *d != window);
        self.widgets.remove(&window);
        Some(dialog_id)
    }

    /// Drop a dockable node from the arena entirely
    pub(crate) fn remove_dockable(&mut self, id: WidgetId) {
        if self.get(id).is_some_and(Widget::is_dockable) {
            self.detach(id);
            self.widgets.remove(&id);
        }
    }
}
