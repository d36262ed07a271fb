//! Debug state dump for development diagnostics
//!
//! Serializes the widget tree to JSON so a broken layout can be inspected
//! node by node. Written by `studio-dock --dump`.

use serde::Serialize;

use crate::layout::DockManager;
use crate::model::{WidgetId, WidgetKind, WindowRole};

#[derive(Debug, Serialize)]
pub struct TreeDump {
    pub widget_count: usize,
    pub panels: Vec<PanelDump>,
    pub dialogs: Vec<NodeDump>,
    pub main_window: NodeDump,
    /// Registered dockables not placed anywhere
    pub unattached: Vec<String>,
    pub layout: String,
}

#[derive(Debug, Serialize)]
pub struct PanelDump {
    pub id: u64,
    pub name: String,
    pub attached: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeDump {
    Window {
        id: u64,
        role: String,
        geometry: (i32, i32, i32, i32),
        visible: bool,
        title: String,
        child: Option<Box<NodeDump>>,
    },
    Bin {
        id: u64,
        child: Option<Box<NodeDump>>,
    },
    Paned {
        id: u64,
        orientation: &'static str,
        position: i32,
        first: Option<Box<NodeDump>>,
        second: Option<Box<NodeDump>>,
    },
    Notebook {
        id: u64,
        main: bool,
        current: usize,
        pages: Vec<String>,
    },
    Dockable {
        id: u64,
        name: String,
    },
    /// A dangling reference; should never appear
    Missing {
        id: u64,
    },
}

impl TreeDump {
    pub fn from_manager(manager: &DockManager) -> Self {
        let tree = manager.tree();
        let panels = manager
            .registry()
            .panels()
            .iter()
            .map(|p| PanelDump {
                id: p.id.0,
                name: p.name.clone(),
                attached: tree.parent(p.id).is_some(),
            })
            .collect::<Vec<_>>();
        let unattached = panels
            .iter()
            .filter(|p| !p.attached)
            .map(|p| p.name.clone())
            .collect();

        Self {
            widget_count: tree.len(),
            panels,
            dialogs: tree
                .dialogs()
                .iter()
                .map(|d| NodeDump::build(manager, *d))
                .collect(),
            main_window: NodeDump::build(manager, tree.main_window()),
            unattached,
            layout: manager.save_layout(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

impl NodeDump {
    fn build(manager: &DockManager, id: WidgetId) -> Self {
        let tree = manager.tree();
        let child = |c: Option<WidgetId>| c.map(|c| Box::new(NodeDump::build(manager, c)));
        let Some(widget) = tree.get(id) else {
            return NodeDump::Missing { id: id.0 };
        };

        match &widget.kind {
            WidgetKind::Window {
                role,
                geometry,
                child: inner,
                visible,
                title,
            } => NodeDump::Window {
                id: id.0,
                role: match role {
                    WindowRole::Main => "main".to_string(),
                    WindowRole::Dialog(d) => format!("dialog {}", d.0),
                },
                geometry: (geometry.x, geometry.y, geometry.width, geometry.height),
                visible: *visible,
                title: title.clone(),
                child: child(*inner),
            },
            WidgetKind::Bin { child: inner } => NodeDump::Bin {
                id: id.0,
                child: child(*inner),
            },
            WidgetKind::Paned {
                orientation,
                position,
                first,
                second,
            } => NodeDump::Paned {
                id: id.0,
                orientation: orientation.tag(),
                position: *position,
                first: child(*first),
                second: child(*second),
            },
            WidgetKind::Notebook { pages, current, .. } => NodeDump::Notebook {
                id: id.0,
                main: id == tree.main_notebook(),
                current: *current,
                pages: pages
                    .iter()
                    .map(|p| {
                        manager
                            .dockable_name(*p)
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("#{}", p.0))
                    })
                    .collect(),
            },
            WidgetKind::Dockable(info) => NodeDump::Dockable {
                id: id.0,
                name: info.name.clone(),
            },
        }
    }
}
