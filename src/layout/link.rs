//! Attachment points
//!
//! A `LinkPoint` names the slot a widget currently occupies so the engine can
//! move widgets around without caring which kind of container holds them.

use crate::model::{Side, Slot, WidgetId, WidgetKind, WidgetTree};

/// Where a widget is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkPoint {
    /// Sole child of a generic bin
    Bin(WidgetId),
    /// One side of a paned container
    Paned { paned: WidgetId, side: Side },
    /// Sole child of a top-level window
    Window(WidgetId),
}

impl LinkPoint {
    /// Classify the slot `widget` sits in.
    ///
    /// Returns `None` when the widget has no parent or its parent is a notebook
    /// (notebook pages are not link points).
    pub fn of(tree: &WidgetTree, widget: WidgetId) -> Option<LinkPoint> {
        let parent = tree.parent(widget)?;
        match &tree.get(parent)?.kind {
            WidgetKind::Bin { .. } => Some(LinkPoint::Bin(parent)),
            WidgetKind::Window { .. } => Some(LinkPoint::Window(parent)),
            WidgetKind::Paned { first, .. } => Some(LinkPoint::Paned {
                paned: parent,
                side: Side::from_first(*first == Some(widget)),
            }),
            WidgetKind::Notebook { .. } | WidgetKind::Dockable(_) => None,
        }
    }

    pub fn container(&self) -> WidgetId {
        match *self {
            LinkPoint::Bin(id) | LinkPoint::Window(id) => id,
            LinkPoint::Paned { paned, .. } => paned,
        }
    }

    fn slot(&self) -> Slot {
        match *self {
            LinkPoint::Bin(_) | LinkPoint::Window(_) => Slot::Sole,
            LinkPoint::Paned { side, .. } => Slot::Side(side),
        }
    }

    /// Widget currently occupying this point
    pub fn linked(&self, tree: &WidgetTree) -> Option<WidgetId> {
        tree.slot(self.container(), self.slot())
    }

    /// Empty this point, returning the widget that was there
    pub fn unlink(&self, tree: &mut WidgetTree) -> Option<WidgetId> {
        tree.take_slot(self.container(), self.slot())
    }

    /// Attach `widget` here, detaching it from any previous parent
    pub fn link(&self, tree: &mut WidgetTree, widget: WidgetId) {
        tree.fill_slot(self.container(), self.slot(), widget);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Orientation;

    #[test]
    fn test_main_notebook_links_into_root_bin() {
        let tree = WidgetTree::new();
        let point = LinkPoint::of(&tree, tree.main_notebook());
        assert_eq!(point, Some(LinkPoint::Bin(tree.root_bin())));
    }

    #[test]
    fn test_root_bin_links_into_main_window() {
        let tree = WidgetTree::new();
        let point = LinkPoint::of(&tree, tree.root_bin());
        assert_eq!(point, Some(LinkPoint::Window(tree.main_window())));
    }

    #[test]
    fn test_unattached_widget_has_no_link_point() {
        let mut tree = WidgetTree::new();
        let book = tree.create_notebook();
        assert_eq!(LinkPoint::of(&tree, book), None);
    }

    #[test]
    fn test_paned_sides_unlink_and_link() {
        let mut tree = WidgetTree::new();
        let paned = tree.create_paned(Orientation::Vertical, 50);
        let a = tree.create_notebook();
        let b = tree.create_notebook();
        LinkPoint::Paned {
            paned,
            side: Side::First,
        }
        .link(&mut tree, a);
        LinkPoint::Paned {
            paned,
            side: Side::Second,
        }
        .link(&mut tree, b);

        let point = LinkPoint::of(&tree, b).unwrap();
        assert_eq!(
            point,
            LinkPoint::Paned {
                paned,
                side: Side::Second
            }
        );
        assert_eq!(point.unlink(&mut tree), Some(b));
        assert_eq!(point.linked(&tree), None);
        assert_eq!(tree.parent(b), None);
        assert_eq!(tree.parent(a), Some(paned));
    }
}
