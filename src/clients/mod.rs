//! Clients page view state and its back/forward history.
//!
//! Every view change (layout, search, status filter, selected client) is
//! recorded in [`ClientsNavigation`], so back/forward walks through earlier
//! views of the page.

use bevy::prelude::*;

use crate::clock::StudioClock;
use crate::config::{AppConfig, ConfigLoaded};
use crate::navigation::{NAVIGATION_HISTORY_CAPACITY, NavigationHistory, NavigationSnapshot};

/// The view currently shown on the clients page
#[derive(Resource, Default)]
pub struct ClientsViewState(pub NavigationSnapshot);

/// Back/forward history of clients page views
#[derive(Resource)]
pub struct ClientsNavigation(pub NavigationHistory<NavigationSnapshot>);

impl Default for ClientsNavigation {
    fn default() -> Self {
        Self(NavigationHistory::new(
            NAVIGATION_HISTORY_CAPACITY,
            crate::clock::system_clock(),
        ))
    }
}

/// Show a different view of the clients page
#[derive(Message)]
pub struct ChangeClientsView(pub NavigationSnapshot);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Back,
    Forward,
}

#[derive(Message)]
pub struct ClientsNavigateRequest(pub NavigationDirection);

/// Startup system sizing the history and recording the initial view
fn configure_clients_navigation(
    config: Res<AppConfig>,
    clock: Res<StudioClock>,
    view: Res<ClientsViewState>,
    mut navigation: ResMut<ClientsNavigation>,
) {
    navigation.0 = NavigationHistory::new(config.data.navigation_capacity, clock.0.clone());
    navigation.0.push_state(view.0.clone());
}

fn apply_view_changes(
    mut events: MessageReader<ChangeClientsView>,
    mut view: ResMut<ClientsViewState>,
    mut navigation: ResMut<ClientsNavigation>,
) {
    for ChangeClientsView(snapshot) in events.read() {
        view.0 = snapshot.clone();
        navigation.0.push_state(snapshot.clone());
    }
}

fn apply_clients_navigation(
    mut events: MessageReader<ClientsNavigateRequest>,
    mut view: ResMut<ClientsViewState>,
    mut navigation: ResMut<ClientsNavigation>,
) {
    for ClientsNavigateRequest(direction) in events.read() {
        let snapshot = match direction {
            NavigationDirection::Back => navigation.0.go_back(),
            NavigationDirection::Forward => navigation.0.go_forward(),
        };
        match snapshot {
            Some(snapshot) => view.0 = snapshot,
            None => debug!("Clients navigation: nothing to go {:?} to", direction),
        }
    }
}

pub struct ClientsPlugin;

impl Plugin for ClientsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StudioClock>()
            .init_resource::<ClientsViewState>()
            .init_resource::<ClientsNavigation>()
            .add_message::<ChangeClientsView>()
            .add_message::<ClientsNavigateRequest>()
            .add_systems(Startup, configure_clients_navigation.after(ConfigLoaded))
            .add_systems(
                Update,
                (apply_view_changes, apply_clients_navigation).chain(),
            );
    }
}
