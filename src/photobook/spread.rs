//! Photobook page model.

use serde::{Deserialize, Serialize};

/// Whether a spread is the cover or an inner double page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadKind {
    Cover,
    Spread,
}

/// A rectangle on a spread that can hold one photo.
///
/// Coordinates are in millimetres from the top-left corner of the spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSlot {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub photo_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spread {
    pub id: String,
    pub kind: SpreadKind,
    pub slots: Vec<PhotoSlot>,
}

/// Put a photo into a slot, wherever that slot is
pub fn assign_photo(spreads: &[Spread], slot_id: &str, photo_id: &str) -> Vec<Spread> {
    map_slot(spreads, slot_id, |slot| slot.photo_id = Some(photo_id.to_string()))
}

/// Empty a slot
pub fn remove_photo(spreads: &[Spread], slot_id: &str) -> Vec<Spread> {
    map_slot(spreads, slot_id, |slot| slot.photo_id = None)
}

fn map_slot(spreads: &[Spread], slot_id: &str, edit: impl Fn(&mut PhotoSlot)) -> Vec<Spread> {
    spreads
        .iter()
        .cloned()
        .map(|mut spread| {
            for slot in spread.slots.iter_mut().filter(|s| s.id == slot_id) {
                edit(slot);
            }
            spread
        })
        .collect()
}

/// Whether any slot with this id exists
pub fn has_slot(spreads: &[Spread], slot_id: &str) -> bool {
    spreads
        .iter()
        .flat_map(|s| s.slots.iter())
        .any(|slot| slot.id == slot_id)
}
