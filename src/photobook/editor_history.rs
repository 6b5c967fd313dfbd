//! Undo/redo state of the photobook editor.

use bevy::prelude::*;

use super::spread::Spread;
use crate::constants::PHOTOBOOK_HISTORY_SIZE;
use crate::history::BoundedHistory;

/// Resource holding the spreads being edited and their edit history
#[derive(Resource)]
pub struct PhotobookHistory(pub BoundedHistory<Vec<Spread>>);

impl Default for PhotobookHistory {
    fn default() -> Self {
        Self(BoundedHistory::new(Vec::new(), PHOTOBOOK_HISTORY_SIZE))
    }
}

impl PhotobookHistory {
    pub fn with_size(max_history_size: usize) -> Self {
        Self(BoundedHistory::new(Vec::new(), max_history_size))
    }

    pub fn spreads(&self) -> &[Spread] {
        self.0.present()
    }
}

/// Replace the spreads with an edited version (undoable)
#[derive(Message)]
pub struct EditSpreadsRequest(pub Vec<Spread>);

/// Put a photo into a slot (undoable)
#[derive(Message)]
pub struct AssignPhotoRequest {
    pub slot_id: String,
    pub photo_id: String,
}

/// Empty a slot (undoable)
#[derive(Message)]
pub struct RemovePhotoRequest {
    pub slot_id: String,
}

/// Open a different photobook, discarding all history
#[derive(Message)]
pub struct LoadPhotobookRequest(pub Vec<Spread>);

/// Forget undo/redo history but keep the current spreads
#[derive(Message)]
pub struct ClearPhotobookHistoryRequest;

#[derive(Message)]
pub struct UndoRequest;

#[derive(Message)]
pub struct RedoRequest;
