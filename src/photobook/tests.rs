//! Unit tests for the photobook module.

use bevy::prelude::*;

use super::*;
use crate::config::{AppConfig, StudioConfigData};

fn slot(id: &str) -> PhotoSlot {
    PhotoSlot {
        id: id.to_string(),
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 150.0,
        photo_id: None,
    }
}

fn sample_book() -> Vec<Spread> {
    vec![
        Spread {
            id: "cover".to_string(),
            kind: SpreadKind::Cover,
            slots: vec![slot("cover-1")],
        },
        Spread {
            id: "spread-1".to_string(),
            kind: SpreadKind::Spread,
            slots: vec![slot("s1-a"), slot("s1-b")],
        },
    ]
}

fn test_app(history_size: usize) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(AppConfig {
            data: StudioConfigData {
                photobook_history_size: history_size,
                ..Default::default()
            },
            config_path: std::env::temp_dir().join("photostudio-photobook-test.json"),
            dirty: false,
        })
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins(PhotobookPlugin);
    app.update();
    app
}

fn history(app: &App) -> &PhotobookHistory {
    app.world().resource::<PhotobookHistory>()
}

fn photo_in(app: &App, slot_id: &str) -> Option<String> {
    history(app)
        .spreads()
        .iter()
        .flat_map(|s| s.slots.iter())
        .find(|s| s.id == slot_id)
        .and_then(|s| s.photo_id.clone())
}

fn press(app: &mut App, keys: &[KeyCode]) {
    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        for key in keys {
            input.press(*key);
        }
    }
    app.update();
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.release_all();
    input.clear();
}

#[test]
fn test_history_size_comes_from_config() {
    let app = test_app(7);
    assert_eq!(history(&app).0.max_history_size(), 7);
}

#[test]
fn test_load_resets_history() {
    let mut app = test_app(100);
    app.world_mut().write_message(EditSpreadsRequest(sample_book()));
    app.world_mut().write_message(AssignPhotoRequest {
        slot_id: "cover-1".to_string(),
        photo_id: "p1".to_string(),
    });
    app.update();
    assert!(history(&app).0.can_undo());

    app.world_mut().write_message(LoadPhotobookRequest(sample_book()));
    app.update();

    assert!(!history(&app).0.can_undo());
    assert!(!history(&app).0.can_redo());
    assert_eq!(history(&app).spreads().len(), 2);
}

#[test]
fn test_assign_undo_redo_through_messages() {
    let mut app = test_app(100);
    app.world_mut().write_message(LoadPhotobookRequest(sample_book()));
    app.update();

    app.world_mut().write_message(AssignPhotoRequest {
        slot_id: "s1-a".to_string(),
        photo_id: "p42".to_string(),
    });
    app.update();
    assert_eq!(photo_in(&app, "s1-a").as_deref(), Some("p42"));

    app.world_mut().write_message(UndoRequest);
    app.update();
    assert_eq!(photo_in(&app, "s1-a"), None);

    app.world_mut().write_message(RedoRequest);
    app.update();
    assert_eq!(photo_in(&app, "s1-a").as_deref(), Some("p42"));
}

#[test]
fn test_unknown_slot_is_not_recorded() {
    let mut app = test_app(100);
    app.world_mut().write_message(LoadPhotobookRequest(sample_book()));
    app.update();

    app.world_mut().write_message(RemovePhotoRequest {
        slot_id: "missing".to_string(),
    });
    app.update();

    assert!(!history(&app).0.can_undo());
}

#[test]
fn test_clear_history_keeps_spreads() {
    let mut app = test_app(100);
    app.world_mut().write_message(LoadPhotobookRequest(sample_book()));
    app.update();
    app.world_mut().write_message(AssignPhotoRequest {
        slot_id: "cover-1".to_string(),
        photo_id: "p1".to_string(),
    });
    app.update();

    app.world_mut().write_message(ClearPhotobookHistoryRequest);
    app.update();

    assert!(!history(&app).0.can_undo());
    assert_eq!(photo_in(&app, "cover-1").as_deref(), Some("p1"));
}

#[test]
fn test_keyboard_shortcuts() {
    let mut app = test_app(100);
    app.world_mut().write_message(LoadPhotobookRequest(sample_book()));
    app.update();
    app.world_mut().write_message(AssignPhotoRequest {
        slot_id: "s1-b".to_string(),
        photo_id: "p7".to_string(),
    });
    app.update();

    press(&mut app, &[KeyCode::ControlLeft, KeyCode::KeyZ]);
    assert_eq!(photo_in(&app, "s1-b"), None);

    press(&mut app, &[KeyCode::ControlLeft, KeyCode::ShiftLeft, KeyCode::KeyZ]);
    assert_eq!(photo_in(&app, "s1-b").as_deref(), Some("p7"));

    press(&mut app, &[KeyCode::ControlLeft, KeyCode::KeyZ]);
    press(&mut app, &[KeyCode::ControlRight, KeyCode::KeyY]);
    assert_eq!(photo_in(&app, "s1-b").as_deref(), Some("p7"));
}

#[test]
fn test_z_without_modifier_does_nothing() {
    let mut app = test_app(100);
    app.world_mut().write_message(LoadPhotobookRequest(sample_book()));
    app.update();
    app.world_mut().write_message(AssignPhotoRequest {
        slot_id: "s1-b".to_string(),
        photo_id: "p7".to_string(),
    });
    app.update();

    press(&mut app, &[KeyCode::KeyZ]);

    assert_eq!(photo_in(&app, "s1-b").as_deref(), Some("p7"));
}
