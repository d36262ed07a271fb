//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use studio_dock::config::DockConfig;
use studio_dock::layout::DockManager;
use studio_dock::model::{DockModel, Dockable, WidgetId, WidgetKind};

/// Create a manager with the given dockables registered (all unattached)
pub fn test_manager(names: &[&str]) -> DockManager {
    let mut manager = DockManager::new();
    for name in names {
        manager
            .register_dockable(Dockable::named(*name))
            .expect("test dockable names are valid and unique");
    }
    manager.take_events();
    manager
}

/// Create a model whose configured panels are exactly `names`
pub fn test_model(names: &[&str]) -> DockModel {
    DockModel::new(DockConfig {
        panels: names.iter().map(|n| n.to_string()).collect(),
        ..DockConfig::default()
    })
}

/// Wrap a main-window child in a full layout string
pub fn main_layout(child: &str) -> String {
    format!("[mainwindow|0|0|1024|768|{}]", child)
}

pub fn id(manager: &DockManager, name: &str) -> WidgetId {
    manager.find_dockable(name).expect("dockable is registered")
}

/// Notebook holding a dockable
pub fn book_of(manager: &DockManager, name: &str) -> WidgetId {
    manager
        .tree()
        .parent(id(manager, name))
        .expect("dockable is docked")
}

/// Walk every window and check the structural invariants:
/// - parent links agree with container contents
/// - every paned has both sides occupied
/// - every dock notebook has at least one page
/// - every dialog has content
pub fn assert_consistent(manager: &DockManager) {
    let tree = manager.tree();
    let mut roots = vec![tree.main_window()];
    roots.extend_from_slice(tree.dialogs());

    for root in roots {
        let window = tree.get(root).expect("window in arena");
        if let WidgetKind::Window { child, .. } = &window.kind {
            if root != tree.main_window() {
                assert!(child.is_some(), "dialog {:?} has no content", root);
            }
        }
        check_subtree(manager, root);
    }
}

fn check_subtree(manager: &DockManager, id: WidgetId) {
    let tree = manager.tree();
    let widget = tree.get(id).expect("widget in arena");

    match &widget.kind {
        WidgetKind::Paned { first, second, .. } => {
            assert!(
                first.is_some() && second.is_some(),
                "paned {:?} has an empty side",
                id
            );
        }
        WidgetKind::Notebook {
            pages,
            current,
            allow_empty,
        } => {
            if !allow_empty {
                assert!(!pages.is_empty(), "notebook {:?} has no pages", id);
            }
            if !pages.is_empty() {
                assert!(*current < pages.len(), "notebook {:?} current out of range", id);
            }
        }
        _ => {}
    }

    for child in widget.children() {
        assert_eq!(
            tree.parent(child),
            Some(id),
            "child {:?} does not point back to {:?}",
            child,
            id
        );
        check_subtree(manager, child);
    }
}
