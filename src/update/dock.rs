//! Dock message handlers

use crate::commands::Cmd;
use crate::messages::DockMsg;
use crate::model::DockModel;

/// Handle dock messages
pub fn update_dock(model: &mut DockModel, msg: DockMsg) -> Option<Cmd> {
    match msg {
        DockMsg::AddDockable {
            dest,
            dockable,
            vertical,
            first,
        } => structural(model, |m| m.dock.add_dockable(dest, dockable, vertical, first)),

        DockMsg::AddWidget {
            dest,
            src,
            vertical,
            first,
        } => structural(model, |m| m.dock.add_widget(dest, src, vertical, first)),

        DockMsg::Swap(a, b) => structural(model, |m| m.dock.swap_widgets(a, b)),

        DockMsg::Remove(widget) => structural(model, |m| {
            if m.dock.is_window(widget) || widget == m.dock.tree().root_bin() {
                return false;
            }
            m.dock.remove_widget_recursive(widget);
            true
        }),

        DockMsg::Detach(dockable) => structural(model, |m| {
            if !m.dock.registry().contains(dockable) {
                return false;
            }
            m.dock.detach(dockable);
            true
        }),

        DockMsg::Present(name) => {
            model.dock.present(&name);
            model.dock.update_window_titles();
            Some(Cmd::Redraw)
        }

        DockMsg::MovePage {
            dockable,
            book,
            index,
        } => structural(model, |m| m.dock.move_to_notebook(dockable, book, index)),

        DockMsg::ClosePanel(dockable) => {
            structural(model, |m| m.dock.unregister_dockable(dockable))
        }

        DockMsg::LoadLayout(layout) => {
            model.apply_layout(&layout);
            Some(Cmd::Redraw)
        }

        DockMsg::SaveLayout => Some(Cmd::PersistLayout(model.dock.save_layout())),

        DockMsg::RestoreDefaultLayout => {
            let layout = model.config.default_layout.clone();
            model.apply_layout(&layout);
            Some(Cmd::Redraw)
        }

        DockMsg::ShowAllDialogs => {
            model.dock.show_all_dialogs();
            Some(Cmd::Redraw)
        }
    }
}

/// Run a tree-changing operation; refresh titles and redraw when it applied
fn structural(model: &mut DockModel, op: impl FnOnce(&mut DockModel) -> bool) -> Option<Cmd> {
    if !op(model) {
        return None;
    }
    model.dock.update_window_titles();
    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DockConfig;

    fn model() -> DockModel {
        DockModel::new(DockConfig {
            panels: vec!["Params".to_string(), "Layers".to_string()],
            ..DockConfig::default()
        })
    }

    #[test]
    fn test_save_layout_returns_persist_command() {
        let mut model = model();
        let cmd = update_dock(&mut model, DockMsg::SaveLayout);
        assert_eq!(
            cmd,
            Some(Cmd::PersistLayout(
                "[mainwindow|0|0|1024|768|[mainnotebook]]".to_string()
            ))
        );
    }

    #[test]
    fn test_failed_operation_requests_nothing() {
        let mut model = model();
        let main_window = model.dock.tree().main_window();
        assert_eq!(update_dock(&mut model, DockMsg::Remove(main_window)), None);
        let book = model.dock.tree().main_notebook();
        assert_eq!(update_dock(&mut model, DockMsg::Swap(book, main_window)), None);
    }

    #[test]
    fn test_detach_titles_new_dialog() {
        let mut model = model();
        let params = model.dock.find_dockable("Params").unwrap();
        let cmd = update_dock(&mut model, DockMsg::Detach(params));
        assert_eq!(cmd, Some(Cmd::Redraw));

        let dialog = model.dock.tree().window_of(params).unwrap();
        assert_eq!(model.dock.tree().title(dialog), Some("Params"));
    }
}
