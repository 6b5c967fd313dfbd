//! Snapshot payloads stored in navigation histories.
//!
//! A payload holds only the fields that identify a view. The time a snapshot
//! was taken lives in [`super::NavigationEntry`], so comparing payloads never
//! compares timestamps.

use serde::{Deserialize, Serialize};

/// How the clients list is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientsViewMode {
    #[default]
    Cards,
    Table,
}

/// Booking status filter on the clients list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatusFilter {
    #[default]
    All,
    Active,
    Upcoming,
    Past,
}

/// View state of the clients page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    pub view_mode: ClientsViewMode,
    pub search_query: String,
    pub status_filter: ClientStatusFilter,
    pub selected_entity_id: Option<i64>,
}

/// View state of the photo bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhotoBankView {
    pub selected_folder_id: Option<i64>,
    pub selection_mode: bool,
}
