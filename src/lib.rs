//! Studio Dock - dock layout persistence and re-linking engine
//!
//! This crate keeps the panels of a multi-window editor in a tree of paned
//! splits, tabbed notebooks and windows, serializes that tree to a compact
//! layout string, and rebuilds it from one. UI actions flow through an
//! Elm-style `update` function.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod debug_dump;
pub mod layout;
pub mod messages;
pub mod model;
pub mod panel;
pub mod session;
pub mod settings;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use layout::DockManager;
pub use messages::{DockEvent, DockMsg};
pub use model::DockModel;
pub use settings::DockSettings;
