//! Where studio-dock keeps its files
//!
//! Everything lives in one directory: `$XDG_CONFIG_HOME/studio-dock` (falling
//! back to `~/.config/studio-dock`), or `%APPDATA%\studio-dock` on Windows.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "studio-dock";
const CONFIG_FILE: &str = "config.yaml";
const LAYOUT_FILE: &str = "layout.json";
const LOGS_DIR: &str = "logs";

pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|base| base.join(APP_DIR))
}

fn in_config_dir(name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(name))
}

/// Panel list, default layout and dialog size (`DockConfig`)
pub fn config_file() -> Option<PathBuf> {
    in_config_dir(CONFIG_FILE)
}

/// Last saved layout string (`SavedLayout`)
pub fn layout_file() -> Option<PathBuf> {
    in_config_dir(LAYOUT_FILE)
}

/// Daily rotated trace logs
pub fn logs_dir() -> Option<PathBuf> {
    in_config_dir(LOGS_DIR)
}

fn create(path: PathBuf) -> Result<PathBuf, String> {
    fs::create_dir_all(&path).map_err(|e| describe(&path, e))?;
    Ok(path)
}

fn describe(path: &Path, err: std::io::Error) -> String {
    format!("Failed to create directory {}: {}", path.display(), err)
}

pub fn ensure_config_dir() -> Result<PathBuf, String> {
    create(config_dir().ok_or("No config directory available")?)
}

pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    ensure_config_dir()?;
    create(logs_dir().ok_or("No config directory available")?)
}
