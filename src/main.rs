//! studio-dock: load a dock layout, normalize it, print or save it

use anyhow::{Context, Result};
use clap::Parser;

use studio_dock::cli::{CliArgs, LayoutSource, StartupConfig};
use studio_dock::debug_dump::TreeDump;
use studio_dock::messages::DockMsg;
use studio_dock::session::SavedLayout;
use studio_dock::update::update;
use studio_dock::{DockConfig, DockModel};

fn main() -> Result<()> {
    studio_dock::tracing::init();

    let startup = CliArgs::parse().into_config();
    let mut config = DockConfig::load();
    if let Some(panels) = startup.panels.clone() {
        config.panels = panels;
    }

    let mut model = DockModel::new(config);
    let layout = startup_layout(&startup, &model.config)?;
    update(&mut model, DockMsg::LoadLayout(layout));

    if let Some(report) = &model.last_load_report {
        for issue in &report.issues {
            eprintln!("warning: {}", issue);
        }
    }

    if startup.dump {
        println!("{}", TreeDump::from_manager(&model.dock).to_json());
    } else {
        println!("{}", model.dock.save_layout());
    }

    if startup.save {
        let cmd = update(&mut model, DockMsg::SaveLayout);
        if let Some(layout) = cmd.as_ref().and_then(|c| c.layout_to_persist()) {
            SavedLayout::new(layout)
                .save()
                .context("Failed to save session layout")?;
        }
    }

    Ok(())
}

/// Pick the layout string to start from
fn startup_layout(startup: &StartupConfig, config: &DockConfig) -> Result<String> {
    match &startup.source {
        LayoutSource::Inline(layout) => Ok(layout.clone()),
        LayoutSource::File(path) => std::fs::read_to_string(path)
            .map(|s| s.trim_end().to_string())
            .with_context(|| format!("Failed to read layout file {}", path.display())),
        LayoutSource::Session if config.restore_session => Ok(SavedLayout::load()
            .map(|saved| saved.layout)
            .unwrap_or_else(|| config.default_layout.clone())),
        LayoutSource::Session | LayoutSource::Default => Ok(config.default_layout.clone()),
    }
}
