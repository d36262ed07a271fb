//! Command-line argument parsing
//!
//! Supports:
//! - Choosing the registered panels
//! - Loading a layout from the command line, a file, or the saved session
//! - Printing the resulting layout or a JSON dump of the tree
//! - Saving the resulting layout as the new session

use clap::Parser;
use std::path::PathBuf;

/// Dock layout tool: load, normalize and save panel layouts
#[derive(Parser, Debug)]
#[command(
    name = "studio-dock",
    version,
    about = "Load, normalize and save dock panel layouts"
)]
pub struct CliArgs {
    /// Register this panel (repeatable; replaces the configured panel list)
    #[arg(short = 'p', long = "panel", value_name = "NAME")]
    pub panels: Vec<String>,

    /// Layout string to apply
    #[arg(short = 'l', long, value_name = "LAYOUT", conflicts_with = "layout_file")]
    pub layout: Option<String>,

    /// Read the layout string from a file
    #[arg(short = 'f', long, value_name = "PATH")]
    pub layout_file: Option<PathBuf>,

    /// Print a JSON dump of the widget tree instead of the layout string
    #[arg(long)]
    pub dump: bool,

    /// Save the resulting layout as the session layout
    #[arg(short = 's', long)]
    pub save: bool,

    /// Ignore the saved session and start from the default layout
    #[arg(short = 'n', long)]
    pub new: bool,
}

/// Where the startup layout comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    /// Given on the command line
    Inline(String),
    /// Read from a file
    File(PathBuf),
    /// Last saved session, falling back to the default
    Session,
    /// Configured default layout
    Default,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Panels to register instead of the configured ones
    pub panels: Option<Vec<String>>,
    pub source: LayoutSource,
    pub dump: bool,
    pub save: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> StartupConfig {
        let source = if let Some(layout) = self.layout {
            LayoutSource::Inline(layout)
        } else if let Some(path) = self.layout_file {
            LayoutSource::File(path)
        } else if self.new {
            LayoutSource::Default
        } else {
            LayoutSource::Session
        };

        StartupConfig {
            panels: (!self.panels.is_empty()).then_some(self.panels),
            source,
            dump: self.dump,
            save: self.save,
        }
    }
}
