//! Systems for photobook editing, undo and redo.

use bevy::prelude::*;

use super::editor_history::{
    AssignPhotoRequest, ClearPhotobookHistoryRequest, EditSpreadsRequest, LoadPhotobookRequest,
    PhotobookHistory, RedoRequest, RemovePhotoRequest, UndoRequest,
};
use super::spread::{assign_photo, has_slot, remove_photo};
use crate::config::AppConfig;

/// Startup system sizing the history from config
pub fn configure_photobook_history(config: Res<AppConfig>, mut history: ResMut<PhotobookHistory>) {
    *history = PhotobookHistory::with_size(config.data.photobook_history_size);
    debug!(
        "Photobook history holds up to {} steps",
        config.data.photobook_history_size
    );
}

fn command_modifier(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.any_pressed([
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::SuperLeft,
        KeyCode::SuperRight,
    ])
}

/// Ctrl+Z undoes; Ctrl+Y or Ctrl+Shift+Z redoes
pub fn handle_undo_redo_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut undo_events: MessageWriter<UndoRequest>,
    mut redo_events: MessageWriter<RedoRequest>,
) {
    if !command_modifier(&keyboard) {
        return;
    }
    let shift = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    if keyboard.just_pressed(KeyCode::KeyZ) {
        if shift {
            redo_events.write(RedoRequest);
        } else {
            undo_events.write(UndoRequest);
        }
    } else if keyboard.just_pressed(KeyCode::KeyY) {
        redo_events.write(RedoRequest);
    }
}

pub fn apply_spread_edits(
    mut edits: MessageReader<EditSpreadsRequest>,
    mut assigns: MessageReader<AssignPhotoRequest>,
    mut removals: MessageReader<RemovePhotoRequest>,
    mut history: ResMut<PhotobookHistory>,
) {
    for EditSpreadsRequest(spreads) in edits.read() {
        history.0.push(spreads.clone());
    }

    for request in assigns.read() {
        if !has_slot(history.spreads(), &request.slot_id) {
            warn!("Cannot place photo: no slot {}", request.slot_id);
            continue;
        }
        history
            .0
            .push_with(|spreads| assign_photo(spreads, &request.slot_id, &request.photo_id));
    }

    for request in removals.read() {
        if !has_slot(history.spreads(), &request.slot_id) {
            warn!("Cannot clear slot: no slot {}", request.slot_id);
            continue;
        }
        history
            .0
            .push_with(|spreads| remove_photo(spreads, &request.slot_id));
    }
}

pub fn apply_photobook_load(
    mut events: MessageReader<LoadPhotobookRequest>,
    mut history: ResMut<PhotobookHistory>,
) {
    for LoadPhotobookRequest(spreads) in events.read() {
        history.0.reset(spreads.clone());
        info!("Loaded photobook with {} spreads", spreads.len());
    }
}

pub fn apply_clear_history(
    mut events: MessageReader<ClearPhotobookHistoryRequest>,
    mut history: ResMut<PhotobookHistory>,
) {
    for _ in events.read() {
        history.0.clear_history();
    }
}

pub fn apply_undo(mut events: MessageReader<UndoRequest>, mut history: ResMut<PhotobookHistory>) {
    for _ in events.read() {
        if history.0.undo() {
            debug!(
                "Undo: step {} of {}",
                history.0.current_index(),
                history.0.history_size()
            );
        }
    }
}

pub fn apply_redo(mut events: MessageReader<RedoRequest>, mut history: ResMut<PhotobookHistory>) {
    for _ in events.read() {
        if history.0.redo() {
            debug!(
                "Redo: step {} of {}",
                history.0.current_index(),
                history.0.history_size()
            );
        }
    }
}
