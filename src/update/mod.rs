//! Update functions for the Elm-style architecture
//!
//! All dock state transformations flow through these functions.

mod dock;

use crate::commands::Cmd;
use crate::messages::DockMsg;
use crate::model::DockModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use dock::update_dock;

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut DockModel, msg: DockMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        dock::update_dock(model, msg)
    }
}

/// Update with a span per message and a structural diff of the tree
#[cfg(debug_assertions)]
fn update_traced(model: &mut DockModel, msg: DockMsg) -> Option<Cmd> {
    let msg_name = format!("{:?}", msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = LayoutSnapshot::from_manager(&model.dock);
    let result = dock::update_dock(model, msg);
    let after = LayoutSnapshot::from_manager(&model.dock);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    result
}
