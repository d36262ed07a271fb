//! Tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging layout
//! changes and layout string loading.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug` - structural diffs only
//! - `RUST_LOG=studio_dock::layout=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/studio-dock/logs/studio-dock.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::layout::DockManager;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`).
/// File logging writes to `~/.config/studio-dock/logs/studio-dock.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "studio-dock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the dock tree for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub widget_count: usize,
    pub dialog_count: usize,
    pub panel_count: usize,
    pub layout: String,
}

impl LayoutSnapshot {
    pub fn from_manager(manager: &DockManager) -> Self {
        Self {
            widget_count: manager.tree().len(),
            dialog_count: manager.tree().dialogs().len(),
            panel_count: manager.registry().len(),
            layout: manager.save_layout(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.widget_count != other.widget_count {
            changes.push(format!(
                "widgets: {} → {}",
                self.widget_count, other.widget_count
            ));
        }
        if self.dialog_count != other.dialog_count {
            changes.push(format!(
                "dialogs: {} → {}",
                self.dialog_count, other.dialog_count
            ));
        }
        if self.panel_count != other.panel_count {
            changes.push(format!(
                "panels: {} → {}",
                self.panel_count, other.panel_count
            ));
        }
        if self.layout != other.layout {
            changes.push(format!("layout: {}", other.layout));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
