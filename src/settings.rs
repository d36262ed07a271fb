//! Key-value view of the dock state
//!
//! Keys:
//! - `dialog.<id>.pos`: `"x y"`
//! - `dialog.<id>.size`: `"width height"`
//! - `layout`: the whole layout string
//!
//! Geometry set for a dialog id that has not opened yet is held by the
//! manager until that dialog opens; no window is created for it.

use crate::layout::DockManager;
use crate::model::{DialogId, Geometry};

const LAYOUT_KEY: &str = "layout";

/// Which part of a dialog's geometry a key addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogField {
    Pos,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsKey {
    Layout,
    Dialog(DialogId, DialogField),
}

impl SettingsKey {
    fn parse(key: &str) -> Option<Self> {
        if key == LAYOUT_KEY {
            return Some(SettingsKey::Layout);
        }
        let rest = key.strip_prefix("dialog.")?;
        let (id, field) = rest.split_once('.')?;
        let id = DialogId(id.parse().ok()?);
        let field = match field {
            "pos" => DialogField::Pos,
            "size" => DialogField::Size,
            _ => return None,
        };
        Some(SettingsKey::Dialog(id, field))
    }
}

/// Parse `"a b"` into two integers
fn parse_pair(value: &str) -> Option<(i32, i32)> {
    let mut parts = value.split_whitespace();
    let a = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b))
}

/// Settings adapter over a dock manager
pub struct DockSettings<'a> {
    manager: &'a mut DockManager,
}

impl<'a> DockSettings<'a> {
    pub fn new(manager: &'a mut DockManager) -> Self {
        Self { manager }
    }

    pub fn get_value(&self, key: &str) -> Option<String> {
        match SettingsKey::parse(key)? {
            SettingsKey::Layout => Some(self.manager.save_layout()),
            SettingsKey::Dialog(id, field) => {
                let g = self.manager.dialog_geometry(id)?;
                Some(match field {
                    DialogField::Pos => format!("{} {}", g.x, g.y),
                    DialogField::Size => format!("{} {}", g.width, g.height),
                })
            }
        }
    }

    /// Apply one setting. Returns false for unknown keys or malformed values.
    pub fn set_value(&mut self, key: &str, value: &str) -> bool {
        let Some(key) = SettingsKey::parse(key) else {
            tracing::debug!("Unknown dock setting {:?}", key);
            return false;
        };
        match key {
            SettingsKey::Layout => {
                self.manager.load_layout(value);
                true
            }
            SettingsKey::Dialog(id, field) => {
                let Some((a, b)) = parse_pair(value) else {
                    tracing::warn!("Malformed value {:?} for dialog {:?}", value, id);
                    return false;
                };
                let current = self.manager.dialog_geometry(id).unwrap_or_else(|| {
                    let (width, height) = self.manager.default_dialog_size();
                    Geometry::new(0, 0, width, height)
                });
                let geometry = match field {
                    DialogField::Pos => Geometry::new(a, b, current.width, current.height),
                    DialogField::Size => Geometry::new(current.x, current.y, a, b),
                };
                self.manager.set_dialog_geometry(id, geometry)
            }
        }
    }

    /// Every key that currently has a value
    pub fn key_list(&self) -> Vec<String> {
        let tree = self.manager.tree();
        let open = tree.dialogs().iter().filter_map(|d| tree.dialog_id(*d));
        let mut keys = Vec::new();
        for id in open.chain(self.manager.pending_dialog_ids()) {
            keys.push(format!("dialog.{}.pos", id.0));
            keys.push(format!("dialog.{}.size", id.0));
        }
        keys.push(LAYOUT_KEY.to_string());
        keys
    }
}
