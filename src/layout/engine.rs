//! Structural operations: splitting, swapping, removing, collapsing

use super::{DockManager, LinkPoint};
use crate::model::{Orientation, Side, Widget, WidgetId, WidgetKind};

impl DockManager {
    /// Place `src` beside `dest` in a new paned container that takes over
    /// `dest`'s old position. `first` puts `src` on the left/top side.
    ///
    /// Fails without touching the tree when `src == dest`, when either is a
    /// window, or when `dest` has no link point. When `src` is an ancestor of
    /// `dest` this is a `swap_widgets(src, dest)`.
    pub fn add_widget(&mut self, dest: WidgetId, src: WidgetId, vertical: bool, first: bool) -> bool {
        if src == dest {
            return false;
        }
        let (Some(dest_widget), Some(src_widget)) = (self.tree.get(dest), self.tree.get(src)) else {
            return false;
        };
        if dest_widget.is_window() || src_widget.is_window() {
            return false;
        }
        if self.tree.is_ancestor(src, dest) {
            return self.swap_widgets(src, dest);
        }
        let Some(dest_link) = LinkPoint::of(&self.tree, dest) else {
            tracing::debug!("add_widget: {:?} has no link point", dest);
            return false;
        };

        let orientation = Orientation::from_vertical(vertical);
        let position = self.default_split_position(dest, orientation);

        let (dest_link, dest) = if self.tree.is_ancestor(dest, src) {
            // src lives inside dest: lift dest out first, then pull src out of
            // what is left so nothing inside dest gets relinked above it
            dest_link.unlink(&mut self.tree);
            self.remove_widget_recursive(src);
            match self.collapse_unattached(dest) {
                Some(rest) => (dest_link, rest),
                None => {
                    dest_link.link(&mut self.tree, src);
                    tracing::debug!("add_widget: {:?} emptied, {:?} takes its place", dest, src);
                    return true;
                }
            }
        } else {
            // Removing src can collapse dest's own paned, so re-read its link point
            self.remove_widget_recursive(src);
            let Some(dest_link) = LinkPoint::of(&self.tree, dest) else {
                tracing::warn!("add_widget: {:?} lost its link point", dest);
                return false;
            };
            dest_link.unlink(&mut self.tree);
            (dest_link, dest)
        };

        let paned = self.tree.create_paned(orientation, position);
        let side = Side::from_first(first);
        LinkPoint::Paned { paned, side }.link(&mut self.tree, src);
        LinkPoint::Paned {
            paned,
            side: side.other(),
        }
        .link(&mut self.tree, dest);
        dest_link.link(&mut self.tree, paned);

        tracing::debug!(
            "add_widget: split {:?} {} with {:?} into {:?}",
            dest,
            orientation.tag(),
            src,
            paned
        );
        true
    }

    /// Wrap a dockable in a new notebook and place it beside `dest`
    pub fn add_dockable(&mut self, dest: WidgetId, dockable: WidgetId, vertical: bool, first: bool) -> bool {
        if !self.registry.contains(dockable) || dest == dockable {
            return false;
        }

        let book = self.tree.create_notebook();
        if !self.add_widget(dest, book, vertical, first) {
            self.tree.discard(book);
            return false;
        }

        self.remove_widget_recursive(dockable);
        self.tree.notebook_insert(book, dockable, None);
        true
    }

    /// Exchange the positions of two widgets.
    ///
    /// Both link points are taken before anything moves. Fails without
    /// mutation when either widget has no link point, or when one contains the
    /// other (the exchange would put a widget inside itself).
    pub fn swap_widgets(&mut self, a: WidgetId, b: WidgetId) -> bool {
        if self.tree.is_ancestor(a, b) || self.tree.is_ancestor(b, a) {
            tracing::debug!("swap_widgets: {:?} and {:?} are nested", a, b);
            return false;
        }
        let (Some(point_a), Some(point_b)) =
            (LinkPoint::of(&self.tree, a), LinkPoint::of(&self.tree, b))
        else {
            return false;
        };
        if a == b {
            return true;
        }

        point_a.unlink(&mut self.tree);
        point_b.unlink(&mut self.tree);
        point_a.link(&mut self.tree, b);
        point_b.link(&mut self.tree, a);
        true
    }

    /// Detach a widget and collapse whatever that leaves degenerate
    pub fn remove_widget_recursive(&mut self, widget: WidgetId) {
        if let Some(link) = LinkPoint::of(&self.tree, widget) {
            link.unlink(&mut self.tree);
            match link {
                LinkPoint::Paned { paned, .. } => self.remove_empty_container_recursive(paned),
                LinkPoint::Window(window) => self.remove_empty_container_recursive(window),
                LinkPoint::Bin(_) => {}
            }
        } else if let Some(parent) = self.tree.detach(widget) {
            self.remove_empty_container_recursive(parent);
        }
    }

    /// Restore the tree invariants for one container:
    /// - paned with one child: the child takes the paned's place
    /// - paned with no children: removed from its parent and destroyed
    /// - window with no child: closed
    /// - dock notebook with no pages: removed from its parent and destroyed
    pub fn remove_empty_container_recursive(&mut self, container: WidgetId) {
        let Some(widget) = self.tree.get(container) else {
            return;
        };

        match &widget.kind {
            WidgetKind::Paned { first, second, .. } => match (*first, *second) {
                (Some(_), Some(_)) => {}
                (Some(survivor), None) | (None, Some(survivor)) => {
                    // An unattached paned has nowhere to put the survivor
                    let Some(paned_link) = LinkPoint::of(&self.tree, container) else {
                        return;
                    };
                    self.tree.detach(survivor);
                    paned_link.unlink(&mut self.tree);
                    paned_link.link(&mut self.tree, survivor);
                    self.tree.discard(container);
                }
                (None, None) => {
                    self.remove_widget_recursive(container);
                    self.tree.discard(container);
                }
            },
            WidgetKind::Window { child: None, .. } => self.close_window(container),
            WidgetKind::Notebook {
                pages,
                allow_empty: false,
                ..
            } if pages.is_empty() => {
                self.remove_widget_recursive(container);
                self.tree.discard(container);
            }
            _ => {}
        }
    }

    /// Normalize a subtree that has been lifted out of the layout.
    /// Returns what should stand in for it, or `None` when nothing is left.
    fn collapse_unattached(&mut self, id: WidgetId) -> Option<WidgetId> {
        let widget = self.tree.get(id)?;
        match &widget.kind {
            WidgetKind::Paned { first, second, .. } => match (*first, *second) {
                (Some(_), Some(_)) => Some(id),
                (Some(survivor), None) | (None, Some(survivor)) => {
                    self.tree.detach(survivor);
                    self.tree.discard(id);
                    self.collapse_unattached(survivor)
                }
                (None, None) => {
                    self.tree.discard(id);
                    None
                }
            },
            WidgetKind::Notebook {
                pages,
                allow_empty: false,
                ..
            } if pages.is_empty() => {
                self.tree.discard(id);
                None
            }
            _ => Some(id),
        }
    }

    /// Half of the enclosing window along the split axis
    fn default_split_position(&self, dest: WidgetId, orientation: Orientation) -> i32 {
        self.tree
            .window_of(dest)
            .and_then(|window| self.tree.geometry(window))
            .map(|g| match orientation {
                Orientation::Horizontal => g.width / 2,
                Orientation::Vertical => g.height / 2,
            })
            .unwrap_or(0)
    }

    /// Is the widget a window (never movable by the engine)
    pub fn is_window(&self, id: WidgetId) -> bool {
        self.tree.get(id).is_some_and(Widget::is_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dockable;

    /// Main window root: [hor| book(A) | book(B) ]
    fn two_books() -> (DockManager, WidgetId, WidgetId, WidgetId, WidgetId) {
        let mut manager = DockManager::new();
        let a = manager.register_dockable(Dockable::named("A")).unwrap();
        let b = manager.register_dockable(Dockable::named("B")).unwrap();
        let main_notebook = manager.tree().main_notebook();
        assert!(manager.add_dockable(main_notebook, a, false, true));
        assert!(manager.add_dockable(main_notebook, b, false, false));
        let book_a = manager.tree().parent(a).unwrap();
        let book_b = manager.tree().parent(b).unwrap();
        (manager, a, b, book_a, book_b)
    }

    #[test]
    fn test_add_widget_to_itself_fails() {
        let (mut manager, _, _, book_a, _) = two_books();
        let before = manager.save_layout();
        assert!(!manager.add_widget(book_a, book_a, true, true));
        assert_eq!(manager.save_layout(), before);
    }

    #[test]
    fn test_swap_nested_widgets_fails() {
        let (mut manager, _, _, book_a, _) = two_books();
        let paned = manager.tree().parent(book_a).unwrap();
        let before = manager.save_layout();
        assert!(!manager.swap_widgets(paned, book_a));
        assert!(!manager.add_widget(book_a, paned, false, true));
        assert_eq!(manager.save_layout(), before);
    }

    #[test]
    fn test_add_widget_sibling_into_same_paned() {
        let (mut manager, _, _, book_a, book_b) = two_books();
        // book_b sits beside book_a's parent; move it directly beside book_a
        assert!(manager.add_widget(book_a, book_b, true, false));
        let paned = manager.tree().parent(book_a).unwrap();
        assert_eq!(manager.tree().parent(book_b), Some(paned));
        match &manager.tree().get(paned).unwrap().kind {
            WidgetKind::Paned {
                orientation,
                first,
                second,
                ..
            } => {
                assert_eq!(*orientation, Orientation::Vertical);
                assert_eq!(*first, Some(book_a));
                assert_eq!(*second, Some(book_b));
            }
            other => panic!("Expected Paned, got {:?}", other),
        }
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let (mut manager, _, _, book_a, _) = two_books();
        let paned = manager.tree().parent(book_a).unwrap();
        let before = manager.save_layout();
        manager.remove_empty_container_recursive(paned);
        manager.remove_empty_container_recursive(paned);
        manager.remove_empty_container_recursive(book_a);
        assert_eq!(manager.save_layout(), before);
    }
}
