//! Photo bank resources, messages and background tasks.

use bevy::prelude::*;
use bevy::tasks::Task;
use std::collections::HashMap;

use super::api::{PhotoFolder, PhotoRecord};
use crate::clock::system_clock;
use crate::navigation::{
    DebouncedNavigationHistory, NAVIGATION_DEBOUNCE_MS, NAVIGATION_HISTORY_CAPACITY, PhotoBankView,
};
use crate::photo_cache::{FolderId, PhotoUrlCache};

/// What the photo bank is currently showing
#[derive(Resource, Default)]
pub struct PhotoBankState {
    /// Folders of the signed-in user
    pub folders: Vec<PhotoFolder>,
    /// Folder whose photos are shown
    pub selected_folder_id: Option<FolderId>,
    /// Whether photos are being picked for a bulk action
    pub selection_mode: bool,
    /// Photos of the selected folder
    pub photos: Vec<PhotoRecord>,
    /// Last photo list received for each folder
    pub known_photos: HashMap<FolderId, Vec<PhotoRecord>>,
    /// Folder whose photos are being fetched
    pub loading_folder: Option<FolderId>,
    /// Error from the last backend call
    pub error: Option<String>,
}

impl PhotoBankState {
    pub fn view(&self) -> PhotoBankView {
        PhotoBankView {
            selected_folder_id: self.selected_folder_id,
            selection_mode: self.selection_mode,
        }
    }

    pub fn folder(&self, folder_id: FolderId) -> Option<&PhotoFolder> {
        self.folders.iter().find(|f| f.id == folder_id)
    }

    pub fn selected_folder(&self) -> Option<&PhotoFolder> {
        self.selected_folder_id.and_then(|id| self.folder(id))
    }

    /// Whether the shown folder has RAW photos still waiting for a preview
    pub fn awaiting_thumbnails(&self) -> bool {
        self.photos.iter().any(PhotoRecord::awaiting_thumbnail)
    }
}

/// Back/forward history of photo bank views
#[derive(Resource)]
pub struct PhotoBankNavigation(pub DebouncedNavigationHistory<PhotoBankView>);

impl Default for PhotoBankNavigation {
    fn default() -> Self {
        Self(DebouncedNavigationHistory::new(
            NAVIGATION_HISTORY_CAPACITY,
            chrono::Duration::milliseconds(NAVIGATION_DEBOUNCE_MS),
            system_clock(),
        ))
    }
}

/// Signed URL cache for photo bank folders
#[derive(Resource)]
pub struct PhotoCache(pub PhotoUrlCache);

impl Default for PhotoCache {
    fn default() -> Self {
        Self(PhotoUrlCache::with_default_window(system_clock()))
    }
}

/// Repeating timer driving the RAW thumbnail refresh
#[derive(Resource)]
pub struct RawRefreshTimer(pub Timer);

/// Show a folder (or the folder list when `folder_id` is `None`)
#[derive(Message)]
pub struct OpenFolderRequest {
    pub folder_id: Option<FolderId>,
}

#[derive(Message)]
pub struct SetSelectionModeRequest(pub bool);

/// Drop a folder's cached URLs and fetch it again
#[derive(Message)]
pub struct RefreshFolderRequest {
    pub folder_id: FolderId,
}

#[derive(Message)]
pub struct NavigateBackRequest;

#[derive(Message)]
pub struct NavigateForwardRequest;

/// Background fetch of a folder's photos
#[derive(Component)]
pub struct FetchPhotosTask {
    pub folder_id: FolderId,
    pub task: Task<Result<Vec<PhotoRecord>, String>>,
}

/// Background fetch of the folder list
#[derive(Component)]
pub struct FetchFoldersTask(pub Task<Result<Vec<PhotoFolder>, String>>);
