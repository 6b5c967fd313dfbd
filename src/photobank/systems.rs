//! Photo bank systems: folder loading, navigation and thumbnail refresh.

use bevy::prelude::*;
use bevy::tasks::AsyncComputeTaskPool;
use chrono::TimeDelta;
use futures_lite::future;

use super::api::{PhotoRecord, fetch_folder_photos, fetch_folders};
use super::state::{
    FetchFoldersTask, FetchPhotosTask, NavigateBackRequest, NavigateForwardRequest,
    OpenFolderRequest, PhotoBankNavigation, PhotoBankState, PhotoCache, RawRefreshTimer,
    RefreshFolderRequest, SetSelectionModeRequest,
};
use crate::clock::StudioClock;
use crate::config::{AppConfig, UpdateLastFolderRequest};
use crate::navigation::{DebouncedNavigationHistory, NAVIGATION_DEBOUNCE_MS, PhotoBankView};
use crate::photo_cache::{CachedPhoto, FolderId, PHOTO_CACHE_DURATION_MINUTES, PhotoUrlCache};

/// Startup system rebuilding the navigation history and cache from config
pub fn configure_photobank(
    config: Res<AppConfig>,
    clock: Res<StudioClock>,
    mut navigation: ResMut<PhotoBankNavigation>,
    mut cache: ResMut<PhotoCache>,
) {
    let data = &config.data;
    let debounce = TimeDelta::try_milliseconds(data.navigation_debounce_ms)
        .unwrap_or_else(|| TimeDelta::milliseconds(NAVIGATION_DEBOUNCE_MS));
    let freshness = TimeDelta::try_minutes(data.photo_cache_minutes)
        .unwrap_or_else(|| TimeDelta::minutes(PHOTO_CACHE_DURATION_MINUTES));

    navigation.0 =
        DebouncedNavigationHistory::new(data.navigation_capacity, debounce, clock.0.clone());
    cache.0 = PhotoUrlCache::new(freshness, clock.0.clone());
}

/// Startup system requesting the folder list
pub fn start_folder_fetch(mut commands: Commands, config: Res<AppConfig>) {
    let Some(user_id) = config.data.user_id else {
        info!("No user configured, photo bank stays empty");
        return;
    };

    let base_url = config.data.api_base_url.clone();
    let task = AsyncComputeTaskPool::get().spawn(async move { fetch_folders(&base_url, user_id) });
    commands.spawn(FetchFoldersTask(task));
}

/// System to poll the folder list task
pub fn poll_folder_fetch(
    mut commands: Commands,
    mut state: ResMut<PhotoBankState>,
    mut tasks: Query<(Entity, &mut FetchFoldersTask)>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            match result {
                Ok(folders) => {
                    info!("Loaded {} photo bank folders", folders.len());
                    state.folders = folders;
                    state.error = None;
                }
                Err(e) => {
                    warn!("Failed to load folders: {}", e);
                    state.error = Some(e);
                }
            }
            commands.entity(entity).despawn();
        }
    }
}

/// Start fetching a folder's photos unless a fetch for it is already running
fn spawn_photo_fetch(
    commands: &mut Commands,
    config: &AppConfig,
    state: &mut PhotoBankState,
    folder_id: FolderId,
) {
    if state.loading_folder == Some(folder_id) {
        return;
    }
    let Some(user_id) = config.data.user_id else {
        state.error = Some("Not signed in".to_string());
        return;
    };

    debug!("Fetching photos for folder {}", folder_id);
    let base_url = config.data.api_base_url.clone();
    let task = AsyncComputeTaskPool::get()
        .spawn(async move { fetch_folder_photos(&base_url, user_id, folder_id) });
    commands.spawn(FetchPhotosTask { folder_id, task });
    state.loading_folder = Some(folder_id);
}

/// Show a folder from cache, or fetch it when the cached URLs are unusable
fn show_folder(
    commands: &mut Commands,
    config: &AppConfig,
    state: &mut PhotoBankState,
    cache: &mut PhotoUrlCache,
    folder_id: FolderId,
) {
    if let Some(cached) = cache.get(folder_id)
        && let Some(known) = state.known_photos.get(&folder_id)
    {
        state.photos = known
            .iter()
            .map(|photo| with_cached_urls(photo, cached))
            .collect();
        return;
    }
    state.photos.clear();
    spawn_photo_fetch(commands, config, state, folder_id);
}

/// Copy of a photo carrying the signed URLs held by the cache
fn with_cached_urls(photo: &PhotoRecord, cached: &[CachedPhoto]) -> PhotoRecord {
    let mut photo = photo.clone();
    if let Some(entry) = cached.iter().find(|entry| entry.id == photo.id) {
        photo.s3_url = entry.url.clone();
        photo.thumbnail_s3_url = entry.thumbnail_url.clone();
    }
    photo
}

pub fn handle_open_folder(
    mut commands: Commands,
    mut events: MessageReader<OpenFolderRequest>,
    config: Res<AppConfig>,
    mut state: ResMut<PhotoBankState>,
    mut cache: ResMut<PhotoCache>,
    mut last_folder_events: MessageWriter<UpdateLastFolderRequest>,
) {
    for event in events.read() {
        match event.folder_id {
            Some(id) if state.folder(id).is_none() => {
                warn!("Cannot open folder {}: not in the folder list", id);
                continue;
            }
            Some(id) => {
                state.selected_folder_id = Some(id);
                show_folder(&mut commands, &config, &mut state, &mut cache.0, id);
            }
            None => {
                state.selected_folder_id = None;
                state.photos.clear();
            }
        }
        last_folder_events.write(UpdateLastFolderRequest {
            folder_id: event.folder_id,
        });
    }
}

pub fn handle_selection_mode(
    mut events: MessageReader<SetSelectionModeRequest>,
    mut state: ResMut<PhotoBankState>,
) {
    for SetSelectionModeRequest(enabled) in events.read() {
        if state.selection_mode != *enabled {
            state.selection_mode = *enabled;
        }
    }
}

pub fn handle_refresh_folder(
    mut commands: Commands,
    mut events: MessageReader<RefreshFolderRequest>,
    config: Res<AppConfig>,
    mut state: ResMut<PhotoBankState>,
    mut cache: ResMut<PhotoCache>,
) {
    for event in events.read() {
        cache.0.clear(Some(event.folder_id));
        spawn_photo_fetch(&mut commands, &config, &mut state, event.folder_id);
    }
}

/// System to poll photo fetch tasks and fill the cache
pub fn poll_photo_fetch(
    mut commands: Commands,
    mut state: ResMut<PhotoBankState>,
    mut cache: ResMut<PhotoCache>,
    mut tasks: Query<(Entity, &mut FetchPhotosTask)>,
) {
    for (entity, mut fetch) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut fetch.task)) else {
            continue;
        };
        let folder_id = fetch.folder_id;
        commands.entity(entity).despawn();

        if state.loading_folder == Some(folder_id) {
            state.loading_folder = None;
        }

        match result {
            Ok(photos) => {
                cache.0.set(folder_id, &photos);
                debug!("Photo cache now {:?}", cache.0.stats());
                store_folder_photos(&mut state, folder_id, photos);
                state.error = None;
            }
            Err(e) => {
                warn!("Failed to load photos for folder {}: {}", folder_id, e);
                state.error = Some(e);
            }
        }
    }
}

/// Record a fetched photo list and update the view if the folder is shown
pub(super) fn store_folder_photos(
    state: &mut PhotoBankState,
    folder_id: FolderId,
    photos: Vec<PhotoRecord>,
) {
    if state.selected_folder_id == Some(folder_id) {
        // Empty reject folders close themselves
        if photos.is_empty() && state.selected_folder().is_some_and(|f| f.is_tech_rejects()) {
            info!("Tech rejects folder {} is empty, closing it", folder_id);
            state.selected_folder_id = None;
            state.photos.clear();
        } else {
            state.photos = photos.clone();
        }
    }
    state.known_photos.insert(folder_id, photos);
}

/// Alt+Left goes back, Alt+Right goes forward
pub fn handle_navigation_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut back_events: MessageWriter<NavigateBackRequest>,
    mut forward_events: MessageWriter<NavigateForwardRequest>,
) {
    if !keyboard.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]) {
        return;
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        back_events.write(NavigateBackRequest);
    } else if keyboard.just_pressed(KeyCode::ArrowRight) {
        forward_events.write(NavigateForwardRequest);
    }
}

/// Apply back/forward snapshots onto the photo bank
pub fn apply_navigation(
    mut back_events: MessageReader<NavigateBackRequest>,
    mut forward_events: MessageReader<NavigateForwardRequest>,
    mut navigation: ResMut<PhotoBankNavigation>,
    mut state: ResMut<PhotoBankState>,
    mut open_events: MessageWriter<OpenFolderRequest>,
) {
    let mut target: Option<PhotoBankView> = None;
    for _ in back_events.read() {
        target = navigation.0.go_back().or(target);
    }
    for _ in forward_events.read() {
        target = navigation.0.go_forward().or(target);
    }
    let Some(view) = target else {
        return;
    };

    // Folders deleted since the snapshot was taken fall back to the folder list
    let folder_id = view
        .selected_folder_id
        .filter(|id| state.folder(*id).is_some());
    state.selection_mode = view.selection_mode;
    if folder_id != state.selected_folder_id {
        open_events.write(OpenFolderRequest { folder_id });
    }
}

/// Push the current view whenever the photo bank state changes
pub fn record_navigation(state: Res<PhotoBankState>, mut navigation: ResMut<PhotoBankNavigation>) {
    if !state.is_changed() || state.folders.is_empty() {
        return;
    }
    if navigation.0.push_state(state.view()) {
        trace!("Recorded photo bank view {:?}", state.view());
    }
}

/// Refetch the shown folder while RAW previews are still being generated
pub fn refresh_raw_thumbnails(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<AppConfig>,
    mut timer: ResMut<RawRefreshTimer>,
    mut state: ResMut<PhotoBankState>,
    mut cache: ResMut<PhotoCache>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    let Some(folder_id) = state.selected_folder_id else {
        return;
    };
    if state.loading_folder.is_some() || !state.awaiting_thumbnails() {
        return;
    }

    debug!("Refreshing folder {} for RAW thumbnails", folder_id);
    cache.0.clear(Some(folder_id));
    spawn_photo_fetch(&mut commands, &config, &mut state, folder_id);
}
