//! Photo bank: folders, photos and back/forward navigation between them.
//!
//! Photo lists come from the backend with signed URLs. Opening a folder serves
//! it from the [`PhotoCache`] while its URLs are still valid and fetches it in
//! the background otherwise.
//!
//! ## Usage
//!
//! - **Alt+Left**: Previous view
//! - **Alt+Right**: Next view
//!
//! ## Module Structure
//!
//! - [`api`] - Backend requests and response types
//! - [`state`] - Resources, messages and task components
//! - [`systems`] - Loading, navigation and refresh systems

mod api;
mod state;
mod systems;


use bevy::prelude::*;

use crate::clock::StudioClock;
use crate::config::{ConfigLoaded, UpdateLastFolderRequest};
use crate::constants::RAW_THUMBNAIL_REFRESH_SECS;

pub use api::{PhotoFolder, PhotoRecord};
pub use state::{
    NavigateBackRequest, NavigateForwardRequest, OpenFolderRequest, PhotoBankNavigation,
    PhotoBankState, PhotoCache, RawRefreshTimer, RefreshFolderRequest, SetSelectionModeRequest,
};

pub struct PhotoBankPlugin;

impl Plugin for PhotoBankPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StudioClock>()
            .init_resource::<PhotoBankState>()
            .init_resource::<PhotoBankNavigation>()
            .init_resource::<PhotoCache>()
            .insert_resource(RawRefreshTimer(Timer::from_seconds(
                RAW_THUMBNAIL_REFRESH_SECS,
                TimerMode::Repeating,
            )))
            .add_message::<OpenFolderRequest>()
            .add_message::<SetSelectionModeRequest>()
            .add_message::<RefreshFolderRequest>()
            .add_message::<NavigateBackRequest>()
            .add_message::<NavigateForwardRequest>()
            .add_message::<UpdateLastFolderRequest>()
            .add_systems(
                Startup,
                (systems::configure_photobank, systems::start_folder_fetch)
                    .chain()
                    .after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    systems::poll_folder_fetch,
                    systems::handle_navigation_shortcuts,
                    systems::apply_navigation,
                    systems::handle_open_folder,
                    systems::handle_selection_mode,
                    systems::handle_refresh_folder,
                    systems::poll_photo_fetch,
                    systems::refresh_raw_thumbnails,
                    systems::record_navigation,
                )
                    .chain(),
            );
    }
}
