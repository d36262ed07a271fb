//! Layout string writer
//!
//! Format (one production per container kind):
//! - `[mainwindow|left|top|width|height|<child>]`
//! - `[dialog|left|top|width|height|<child>]`
//! - `[hor|position|<first>|<second>]` / `[vert|...]`
//! - `[book|name|name|]`
//! - `[mainnotebook]`
//!
//! A full layout is every dialog followed by `|`, then the main window.

use super::DockManager;
use crate::model::{Geometry, WidgetId, WidgetKind, WindowRole};

impl DockManager {
    /// Serialize every dialog in order, then the main window
    pub fn save_layout(&self) -> String {
        let mut out = String::new();
        for dialog in self.tree.dialogs() {
            self.write_widget(&mut out, Some(*dialog));
            out.push('|');
        }
        self.write_widget(&mut out, Some(self.tree.main_window()));
        out
    }

    /// Serialize the subtree rooted at one widget
    pub fn write_layout(&self, widget: WidgetId) -> String {
        let mut out = String::new();
        self.write_widget(&mut out, Some(widget));
        out
    }

    fn write_widget(&self, out: &mut String, widget: Option<WidgetId>) {
        let Some(id) = widget else {
            return;
        };
        let Some(node) = self.tree.get(id) else {
            return;
        };

        if id == self.tree.main_notebook() {
            out.push_str("[mainnotebook]");
            return;
        }

        match &node.kind {
            WidgetKind::Window {
                role,
                geometry,
                child,
                ..
            } => {
                let tag = match role {
                    WindowRole::Main => "mainwindow",
                    WindowRole::Dialog(_) => "dialog",
                };
                out.push('[');
                out.push_str(tag);
                out.push('|');
                write_geometry(out, geometry);
                self.write_widget(out, *child);
                out.push(']');
            }
            WidgetKind::Bin { child } => self.write_widget(out, *child),
            WidgetKind::Paned {
                orientation,
                position,
                first,
                second,
            } => {
                out.push_str(&format!("[{}|{}|", orientation.tag(), position));
                self.write_widget(out, *first);
                out.push('|');
                self.write_widget(out, *second);
                out.push(']');
            }
            WidgetKind::Notebook { pages, .. } => {
                out.push_str("[book");
                for page in pages {
                    if let Some(info) = self.tree.get(*page).and_then(|w| w.as_dockable()) {
                        out.push('|');
                        out.push_str(&info.name);
                    }
                }
                out.push_str("|]");
            }
            // A dockable outside any notebook reads back as a one-page book
            WidgetKind::Dockable(info) => {
                out.push_str(&format!("[book|{}|]", info.name));
            }
        }
    }
}

fn write_geometry(out: &mut String, geometry: &Geometry) {
    out.push_str(&format!(
        "{}|{}|{}|{}|",
        geometry.x, geometry.y, geometry.width, geometry.height
    ));
}
