//! Persistent dock layout
//!
//! The last layout string is kept in `layout.json` next to the config so the
//! next start can restore panel positions.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::SystemTime;

/// A saved layout string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLayout {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Layout string as produced by `DockManager::save_layout`
    pub layout: String,
    /// Timestamp when saved (Unix epoch seconds)
    #[serde(default)]
    pub saved_at: u64,
}

impl SavedLayout {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            layout: layout.into(),
            saved_at: now_epoch_secs(),
        }
    }

    /// Load the saved layout from the config directory
    pub fn load() -> Option<Self> {
        let path = crate::config_paths::layout_file()?;
        Self::load_from(&path)
    }

    /// Load a saved layout from a specific file.
    /// Missing or unreadable files yield `None`.
    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str::<Self>(&contents) {
            Ok(saved) if saved.layout.is_empty() => None,
            Ok(saved) => Some(saved),
            Err(e) => {
                tracing::warn!("Ignoring corrupt layout file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Save to the config directory
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::layout_file() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        self.save_to(&path)
    }

    /// Save to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::debug!("Saved layout to {}", path.display());
        Ok(())
    }
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
