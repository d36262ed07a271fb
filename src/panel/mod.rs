//! Panel registry - the dockables known to the dock manager
//!
//! - `Registry`: ordered name to widget mapping
//! - `DockError`: registration and lookup failures

mod registry;

pub use registry::{DockError, RegisteredPanel, Registry, RESERVED_NAME_CHARS};
