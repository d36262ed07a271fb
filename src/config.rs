//! Dock configuration persistence
//!
//! Stores user preferences in `~/.config/studio-dock/config.yaml`

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layout applied on first start and by "restore default layout"
pub const DEFAULT_LAYOUT: &str = "[mainwindow|0|0|1024|768|\
[hor|220|[vert|380|[book|toolbox|]|[book|history|library|]]|\
[hor|560|[vert|480|[mainnotebook]|[book|params|timetrack|curves|]]|\
[vert|380|[book|layers|]|[book|navigator|]]]]]";

/// Dock configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockConfig {
    /// Panels registered at startup, in order
    #[serde(default = "default_panels")]
    pub panels: Vec<String>,

    /// Layout string used when there is no saved session
    #[serde(default = "default_layout")]
    pub default_layout: String,

    /// Size of dialogs opened for floating panels (width, height)
    #[serde(default = "default_dialog_size")]
    pub dialog_size: (i32, i32),

    /// Restore the last saved layout on startup
    #[serde(default = "default_true")]
    pub restore_session: bool,
}

fn default_panels() -> Vec<String> {
    [
        "toolbox",
        "params",
        "layers",
        "library",
        "navigator",
        "history",
        "timetrack",
        "curves",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_layout() -> String {
    DEFAULT_LAYOUT.to_string()
}

fn default_dialog_size() -> (i32, i32) {
    crate::layout::DEFAULT_DIALOG_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            panels: default_panels(),
            default_layout: default_layout(),
            dialog_size: default_dialog_size(),
            restore_session: true,
        }
    }
}

impl DockConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
