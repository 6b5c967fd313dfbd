//! Photobook editor state with undo/redo.
//!
//! The spreads being edited live in a [`PhotobookHistory`] resource. Every
//! edit is recorded so it can be undone.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last edit
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone edit
//!
//! Opening another photobook ([`LoadPhotobookRequest`]) starts a fresh history.

mod editor_history;
mod spread;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::config::ConfigLoaded;

pub use editor_history::{
    AssignPhotoRequest, ClearPhotobookHistoryRequest, EditSpreadsRequest, LoadPhotobookRequest,
    PhotobookHistory, RedoRequest, RemovePhotoRequest, UndoRequest,
};
pub use spread::{PhotoSlot, Spread, SpreadKind};

pub struct PhotobookPlugin;

impl Plugin for PhotobookPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhotobookHistory>()
            .add_message::<EditSpreadsRequest>()
            .add_message::<AssignPhotoRequest>()
            .add_message::<RemovePhotoRequest>()
            .add_message::<LoadPhotobookRequest>()
            .add_message::<ClearPhotobookHistoryRequest>()
            .add_message::<UndoRequest>()
            .add_message::<RedoRequest>()
            .add_systems(
                Startup,
                systems::configure_photobook_history.after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    systems::handle_undo_redo_shortcuts,
                    systems::apply_photobook_load,
                    systems::apply_spread_edits,
                    systems::apply_clear_history,
                    systems::apply_undo,
                    systems::apply_redo,
                )
                    .chain(),
            );
    }
}
