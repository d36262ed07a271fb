//! Widget node types for the dock layout tree
//!
//! Every node in the tree is a `Widget` stored in the `WidgetTree` arena and
//! addressed by a `WidgetId`. The set of container shapes is closed, so the
//! node payload is a plain enum rather than a trait object.

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a node in the widget arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

/// Unique identifier for a floating dock dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DialogId(pub u64);

// ============================================================================
// Geometry
// ============================================================================

/// Window position and size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Split direction of a paned container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Children arranged left-to-right (`hor`)
    Horizontal,
    /// Children arranged top-to-bottom (`vert`)
    Vertical,
}

impl Orientation {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Tag used in the layout string
    pub fn tag(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "hor",
            Orientation::Vertical => "vert",
        }
    }
}

/// Which side of a paned container a child occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn from_first(first: bool) -> Self {
        if first {
            Side::First
        } else {
            Side::Second
        }
    }

    pub fn other(&self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

// ============================================================================
// Dockables
// ============================================================================

/// A named leaf panel that can be docked into any notebook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dockable {
    /// Stable name used in layout strings
    pub name: String,
    /// Human readable name shown in tab labels and dialog titles
    pub local_name: String,
}

impl Dockable {
    pub fn new(name: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local_name: local_name.into(),
        }
    }

    /// Create a dockable whose display name equals its name
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            local_name: name.clone(),
            name,
        }
    }
}

/// Per-node state for a dockable living in the arena
#[derive(Debug, Clone)]
pub struct DockableInfo {
    pub name: String,
    pub local_name: String,
    pub visible: bool,
    /// Size remembered when the dockable was torn off, used when it floats again
    pub saved_size: Option<(i32, i32)>,
}

// ============================================================================
// Widget nodes
// ============================================================================

/// What a top-level window is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRole {
    Main,
    Dialog(DialogId),
}

/// Node payload: a leaf dockable or one of the container shapes
#[derive(Debug, Clone)]
pub enum WidgetKind {
    Dockable(DockableInfo),
    /// Generic single-child container
    Bin { child: Option<WidgetId> },
    /// Two-child split container
    Paned {
        orientation: Orientation,
        position: i32,
        first: Option<WidgetId>,
        second: Option<WidgetId>,
    },
    /// Tabbed container
    Notebook {
        pages: Vec<WidgetId>,
        current: usize,
        /// The main notebook may stay empty; dock books may not
        allow_empty: bool,
    },
    /// Main window or floating dialog
    Window {
        role: WindowRole,
        geometry: Geometry,
        child: Option<WidgetId>,
        visible: bool,
        title: String,
    },
}

/// A node in the widget arena
#[derive(Debug, Clone)]
pub struct Widget {
    pub id: WidgetId,
    pub parent: Option<WidgetId>,
    pub kind: WidgetKind,
}

impl Widget {
    pub fn is_dockable(&self) -> bool {
        matches!(self.kind, WidgetKind::Dockable(_))
    }

    pub fn is_window(&self) -> bool {
        matches!(self.kind, WidgetKind::Window { .. })
    }

    pub fn as_dockable(&self) -> Option<&DockableInfo> {
        match &self.kind {
            WidgetKind::Dockable(info) => Some(info),
            _ => None,
        }
    }

    /// Direct children in layout order
    pub fn children(&self) -> Vec<WidgetId> {
        match &self.kind {
            WidgetKind::Dockable(_) => Vec::new(),
            WidgetKind::Bin { child } | WidgetKind::Window { child, .. } => {
                child.iter().copied().collect()
            }
            WidgetKind::Paned { first, second, .. } => {
                first.iter().chain(second.iter()).copied().collect()
            }
            WidgetKind::Notebook { pages, .. } => pages.clone(),
        }
    }
}
