//! Tests for the message-driven update layer

mod common;

use common::{book_of, main_layout, test_model};
use studio_dock::commands::Cmd;
use studio_dock::update::update;
use studio_dock::{DockEvent, DockMsg};

#[test]
fn test_restore_default_layout_places_every_panel() {
    let mut model = test_model(&[
        "toolbox",
        "params",
        "layers",
        "library",
        "navigator",
        "history",
        "timetrack",
        "curves",
    ]);

    let cmd = update(&mut model, DockMsg::RestoreDefaultLayout);

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(model.last_load_report.as_ref().unwrap().is_clean());
    assert_eq!(model.dock.save_layout(), model.config.default_layout);
}

#[test]
fn test_load_then_save_persists_layout() {
    let mut model = test_model(&["A", "B"]);
    let layout = main_layout("[hor|300|[book|A|]|[book|B|]]");

    update(&mut model, DockMsg::LoadLayout(layout.clone()));
    let cmd = update(&mut model, DockMsg::SaveLayout).unwrap();

    assert!(!cmd.needs_redraw());
    assert_eq!(cmd.layout_to_persist(), Some(layout.as_str()));
}

#[test]
fn test_load_records_report() {
    let mut model = test_model(&[]);
    update(&mut model, DockMsg::LoadLayout("[oops]".to_string()));
    let report = model.last_load_report.as_ref().unwrap();
    assert_eq!(report.issues.len(), 1);
}

#[test]
fn test_add_and_swap_messages() {
    let mut model = test_model(&["A", "B"]);
    let main_notebook = model.dock.tree().main_notebook();
    let a = model.dock.find_dockable("A").unwrap();
    let b = model.dock.find_dockable("B").unwrap();

    let cmd = update(
        &mut model,
        DockMsg::AddDockable {
            dest: main_notebook,
            dockable: a,
            vertical: false,
            first: true,
        },
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    update(
        &mut model,
        DockMsg::AddDockable {
            dest: main_notebook,
            dockable: b,
            vertical: false,
            first: false,
        },
    );

    let book_a = book_of(&model.dock, "A");
    let book_b = book_of(&model.dock, "B");
    assert_eq!(update(&mut model, DockMsg::Swap(book_a, book_b)), Some(Cmd::Redraw));
    assert_eq!(
        model.dock.save_layout(),
        main_layout("[hor|512|[book|B|]|[hor|512|[mainnotebook]|[book|A|]]]")
    );

    assert_eq!(update(&mut model, DockMsg::Remove(book_a)), Some(Cmd::Redraw));
    assert_eq!(
        model.dock.save_layout(),
        main_layout("[hor|512|[book|B|]|[mainnotebook]]")
    );
}

#[test]
fn test_close_panel_unregisters() {
    let mut model = test_model(&["A"]);
    let a = model.dock.find_dockable("A").unwrap();
    model.dock.take_events();

    assert_eq!(update(&mut model, DockMsg::ClosePanel(a)), Some(Cmd::Redraw));
    assert!(model.dock.find_dockable("A").is_err());
    assert_eq!(
        model.dock.take_events(),
        vec![DockEvent::DockableUnregistered("A".to_string())]
    );
    assert_eq!(update(&mut model, DockMsg::ClosePanel(a)), None);
}

#[test]
fn test_present_and_show_all() {
    let mut model = test_model(&["A"]);
    update(&mut model, DockMsg::Present("A".to_string()));
    assert_eq!(model.dock.tree().dialogs().len(), 1);

    update(&mut model, DockMsg::Present("missing".to_string()));
    assert_eq!(model.dock.tree().dialogs().len(), 1);

    assert_eq!(update(&mut model, DockMsg::ShowAllDialogs), Some(Cmd::Redraw));
}

#[test]
fn test_move_page_message() {
    let mut model = test_model(&["A", "B"]);
    update(
        &mut model,
        DockMsg::LoadLayout(main_layout("[hor|300|[book|A|]|[book|B|]]")),
    );
    let a = model.dock.find_dockable("A").unwrap();
    let book_b = book_of(&model.dock, "B");

    let cmd = update(
        &mut model,
        DockMsg::MovePage {
            dockable: a,
            book: book_b,
            index: None,
        },
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.dock.save_layout(), main_layout("[book|B|A|]"));
}
