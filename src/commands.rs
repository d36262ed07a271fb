//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects requested by the dock update function
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Write this layout string to the session file
    PersistLayout(String),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::PersistLayout(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Layout string to persist, if any command carries one
    pub fn layout_to_persist(&self) -> Option<&str> {
        match self {
            Cmd::PersistLayout(layout) => Some(layout),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.layout_to_persist()),
            _ => None,
        }
    }
}
