//! Registry of dockable panels
//!
//! The registry is a non-owning, ordered list of the dockables known to the
//! dock manager. The nodes themselves live in the widget arena; the registry
//! only maps names to ids for layout (de)serialization.

use crate::model::WidgetId;

/// Characters that delimit fields in a layout string
pub const RESERVED_NAME_CHARS: [char; 2] = ['|', ']'];

/// Errors reported by registry lookups and registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockError {
    /// No dockable with this name is registered
    NotFound(String),
    /// A dockable with this name is already registered
    DuplicateName(String),
    /// The name is empty or contains a layout separator
    InvalidName(String),
}

impl std::fmt::Display for DockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DockError::NotFound(name) => write!(f, "Dockable not found: {}", name),
            DockError::DuplicateName(name) => write!(f, "Dockable already registered: {}", name),
            DockError::InvalidName(name) => write!(
                f,
                "Invalid dockable name {:?}: names must be non-empty and may not contain '|' or ']'",
                name
            ),
        }
    }
}

impl std::error::Error for DockError {}

/// A registered dockable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredPanel {
    pub name: String,
    pub id: WidgetId,
}

/// Name to widget lookup for registered dockables
#[derive(Debug, Clone, Default)]
pub struct Registry {
    panels: Vec<RegisteredPanel>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that a name can be written into a layout string
    pub fn validate_name(name: &str) -> Result<(), DockError> {
        if name.is_empty() || name.contains(RESERVED_NAME_CHARS) {
            return Err(DockError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    /// Append a dockable to the list
    pub fn register(&mut self, name: &str, id: WidgetId) -> Result<(), DockError> {
        Self::validate_name(name)?;
        if self.panels.iter().any(|p| p.name == name) {
            return Err(DockError::DuplicateName(name.to_string()));
        }
        self.panels.push(RegisteredPanel {
            name: name.to_string(),
            id,
        });
        Ok(())
    }

    /// Remove a dockable from the list, returning its name if it was registered
    pub fn unregister(&mut self, id: WidgetId) -> Option<String> {
        let index = self.panels.iter().position(|p| p.id == id)?;
        Some(self.panels.remove(index).name)
    }

    /// Look up a dockable by name
    pub fn find(&self, name: &str) -> Result<WidgetId, DockError> {
        self.panels
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.id)
            .ok_or_else(|| DockError::NotFound(name.to_string()))
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.panels.iter().any(|p| p.id == id)
    }

    pub fn name_of(&self, id: WidgetId) -> Option<&str> {
        self.panels
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }

    /// Registered dockables in registration order
    pub fn panels(&self) -> &[RegisteredPanel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
