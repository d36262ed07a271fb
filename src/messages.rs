//! Message types for the Elm-style architecture
//!
//! UI actions reach the dock manager as `DockMsg`s; the manager reports what
//! happened back to the host as `DockEvent`s.

use crate::model::{DialogId, WidgetId};

/// Dock layout actions triggered by the user or by the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockMsg {
    /// Wrap a dockable in a new notebook and split it beside `dest`
    AddDockable {
        dest: WidgetId,
        dockable: WidgetId,
        vertical: bool,
        first: bool,
    },
    /// Split `src` beside `dest`
    AddWidget {
        dest: WidgetId,
        src: WidgetId,
        vertical: bool,
        first: bool,
    },
    /// Exchange two widgets' positions
    Swap(WidgetId, WidgetId),
    /// Take a widget out of the layout
    Remove(WidgetId),
    /// Tear a dockable off into its own dialog
    Detach(WidgetId),
    /// Bring a dockable to the front by name
    Present(String),
    /// Tab dropped onto another tab
    MovePage {
        dockable: WidgetId,
        book: WidgetId,
        index: Option<usize>,
    },
    /// Close a panel for good (unregisters it)
    ClosePanel(WidgetId),
    /// Apply a serialized layout
    LoadLayout(String),
    /// Serialize the current layout and persist it
    SaveLayout,
    /// Apply the configured default layout
    RestoreDefaultLayout,
    /// Show every floating dialog
    ShowAllDialogs,
}

/// Notifications queued by the dock manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockEvent {
    DockableRegistered(String),
    DockableUnregistered(String),
    DialogOpened(DialogId),
    DialogClosed(DialogId),
    LayoutLoaded,
}
