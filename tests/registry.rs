//! Tests for dockable registration and presentation

mod common;

use common::{assert_consistent, book_of, id, main_layout, test_manager};
use studio_dock::layout::DockManager;
use studio_dock::model::Dockable;
use studio_dock::panel::DockError;
use studio_dock::DockEvent;

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_register_rejects_separator_characters() {
    let mut manager = DockManager::new();
    for name in ["a|b", "a]b", ""] {
        assert_eq!(
            manager.register_dockable(Dockable::named(name)),
            Err(DockError::InvalidName(name.to_string()))
        );
    }
    assert!(manager.registry().is_empty());
}

#[test]
fn test_register_rejects_duplicates() {
    let mut manager = test_manager(&["Params"]);
    assert_eq!(
        manager.register_dockable(Dockable::named("Params")),
        Err(DockError::DuplicateName("Params".to_string()))
    );
    assert_eq!(manager.registry().len(), 1);
}

#[test]
fn test_find_unknown_is_not_found() {
    let manager = test_manager(&["Params"]);
    assert_eq!(
        manager.find_dockable("Layers"),
        Err(DockError::NotFound("Layers".to_string()))
    );
    assert_eq!(
        DockError::NotFound("Layers".to_string()).to_string(),
        "Dockable not found: Layers"
    );
}

#[test]
fn test_registry_keeps_registration_order() {
    let manager = test_manager(&["C", "A", "B"]);
    let names: Vec<_> = manager
        .registry()
        .panels()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_unregister_detaches_and_cleans_up() {
    let mut manager = test_manager(&["A", "B"]);
    manager.load_layout(&main_layout("[hor|300|[book|A|]|[book|B|]]"));
    manager.take_events();
    let a = id(&manager, "A");

    assert!(manager.unregister_dockable(a));

    assert_eq!(manager.save_layout(), main_layout("[book|B|]"));
    assert!(!manager.tree().contains(a));
    assert_eq!(manager.find_dockable("A"), Err(DockError::NotFound("A".to_string())));
    assert_eq!(
        manager.take_events(),
        vec![DockEvent::DockableUnregistered("A".to_string())]
    );
    assert_consistent(&manager);
}

#[test]
fn test_unregister_unknown_returns_false() {
    let mut manager = test_manager(&["A"]);
    let a = id(&manager, "A");
    assert!(manager.unregister_dockable(a));
    assert!(!manager.unregister_dockable(a));
}

#[test]
fn test_unregistered_name_is_skipped_on_load() {
    let mut manager = test_manager(&["A", "B"]);
    let b = id(&manager, "B");
    manager.unregister_dockable(b);

    let report = manager.load_layout(&main_layout("[hor|300|[book|A|]|[book|B|]]"));
    assert!(report.is_clean());
    assert_eq!(manager.save_layout(), main_layout("[book|A|]"));
}

// ============================================================================
// Presentation
// ============================================================================

#[test]
fn test_present_docked_selects_tab_and_shows_window() {
    let mut manager = test_manager(&["A", "B"]);
    manager.load_layout(&main_layout("[book|A|B|]"));
    let book = book_of(&manager, "A");
    assert_eq!(manager.tree().current_page(book), Some(id(&manager, "B")));

    manager.present("A");

    assert_eq!(manager.tree().current_page(book), Some(id(&manager, "A")));
    assert!(manager.tree().is_visible(manager.tree().main_window()));
    assert!(manager.tree().dialogs().is_empty());
}

#[test]
fn test_present_uses_local_name_for_title() {
    let mut manager = DockManager::new().with_dialog_size((250, 180));
    manager
        .register_dockable(Dockable::new("params", "Parameters"))
        .unwrap();
    manager.present("params");

    let dialog = manager.tree().dialogs()[0];
    assert_eq!(manager.tree().title(dialog), Some("Parameters"));
    let g = manager.tree().geometry(dialog).unwrap();
    assert_eq!((g.width, g.height), (250, 180));
}

#[test]
fn test_detach_floats_dockable_with_window_size() {
    let mut manager = test_manager(&["A", "B"]);
    manager.load_layout("[dialog|40|40|640|480|[hor|300|[book|A|]|[book|B|]]]|[mainwindow|0|0|1024|768|[mainnotebook]]");
    let a = id(&manager, "A");

    manager.detach(a);

    let dialogs = manager.tree().dialogs().to_vec();
    assert_eq!(dialogs.len(), 2);
    let floating = manager.tree().window_of(a).unwrap();
    assert_eq!(floating, dialogs[1]);
    let g = manager.tree().geometry(floating).unwrap();
    assert_eq!((g.width, g.height), (640, 480));
    assert_consistent(&manager);
}

#[test]
fn test_move_page_between_books() {
    let mut manager = test_manager(&["A", "B", "C"]);
    manager.load_layout(&main_layout("[hor|300|[book|A|]|[book|B|C|]]"));
    let a = id(&manager, "A");
    let target = book_of(&manager, "B");

    assert!(manager.move_to_notebook(a, target, Some(1)));

    assert_eq!(manager.save_layout(), main_layout("[book|B|A|C|]"));
    assert_eq!(manager.tree().current_page(target), Some(a));
    assert_consistent(&manager);
}

#[test]
fn test_move_page_reorders_within_book() {
    let mut manager = test_manager(&["A", "B", "C"]);
    manager.load_layout(&main_layout("[book|A|B|C|]"));
    let a = id(&manager, "A");
    let book = book_of(&manager, "A");

    assert!(manager.move_to_notebook(a, book, Some(3)));
    assert_eq!(manager.save_layout(), main_layout("[book|B|C|A|]"));

    assert!(manager.move_to_notebook(a, book, Some(0)));
    assert_eq!(manager.save_layout(), main_layout("[book|A|B|C|]"));
}

#[test]
fn test_move_page_onto_main_notebook_is_refused() {
    let mut manager = test_manager(&["A"]);
    manager.load_layout(&main_layout("[hor|300|[book|A|]|[mainnotebook]]"));
    let main_notebook = manager.tree().main_notebook();
    let before = manager.save_layout();
    assert!(!manager.move_to_notebook(id(&manager, "A"), main_notebook, None));
    assert_eq!(manager.save_layout(), before);
}

// ============================================================================
// Dialogs
// ============================================================================

#[test]
fn test_titles_follow_contents() {
    let mut manager = DockManager::new();
    manager
        .register_dockable(Dockable::new("layers", "Layers"))
        .unwrap();
    manager
        .register_dockable(Dockable::new("params", "Params"))
        .unwrap();
    manager.load_layout("[dialog|0|0|300|300|[vert|150|[book|layers|]|[book|params|]]]|[mainwindow|0|0|1024|768|[mainnotebook]]");

    let dialog = manager.tree().dialogs()[0];
    assert_eq!(manager.tree().title(dialog), Some("Layers - Params"));
}

#[test]
fn test_show_all_dialogs() {
    let mut manager = test_manager(&["A", "B"]);
    manager.load_layout(
        "[dialog|0|0|300|300|[book|A|]]|[dialog|10|10|300|300|[book|B|]]|[mainwindow|0|0|1024|768|[mainnotebook]]",
    );
    manager.show_all_dialogs();

    let dialogs = manager.tree().dialogs().to_vec();
    assert_eq!(dialogs.len(), 2);
    for dialog in dialogs {
        assert!(manager.tree().is_visible(dialog));
        let dialog_id = manager.tree().dialog_id(dialog).unwrap();
        assert_eq!(manager.find_dialog(dialog_id), Some(dialog));
    }
}
