use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_API_BASE_URL, PHOTOBOOK_HISTORY_SIZE};
use crate::navigation::{NAVIGATION_DEBOUNCE_MS, NAVIGATION_HISTORY_CAPACITY};
use crate::photo_cache::PHOTO_CACHE_DURATION_MINUTES;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_photobook_history_size() -> usize {
    PHOTOBOOK_HISTORY_SIZE
}

fn default_navigation_capacity() -> usize {
    NAVIGATION_HISTORY_CAPACITY
}

fn default_navigation_debounce_ms() -> i64 {
    NAVIGATION_DEBOUNCE_MS
}

fn default_photo_cache_minutes() -> i64 {
    PHOTO_CACHE_DURATION_MINUTES
}

/// Longest accepted photo cache window (one week)
pub const MAX_PHOTO_CACHE_MINUTES: i64 = 7 * 24 * 60;

/// Longest accepted navigation debounce
pub const MAX_NAVIGATION_DEBOUNCE_MS: i64 = 60_000;

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioConfigData {
    /// Photo bank backend endpoint
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Account the backend requests are made for (sent as `X-User-Id`)
    #[serde(default)]
    pub user_id: Option<i64>,

    /// Undo depth of the photobook editor
    #[serde(default = "default_photobook_history_size")]
    pub photobook_history_size: usize,

    /// Maximum entries in each navigation history
    #[serde(default = "default_navigation_capacity")]
    pub navigation_capacity: usize,

    /// Minimum spacing between recorded photo bank navigations
    #[serde(default = "default_navigation_debounce_ms")]
    pub navigation_debounce_ms: i64,

    /// Freshness window of the photo URL cache
    #[serde(default = "default_photo_cache_minutes")]
    pub photo_cache_minutes: i64,

    /// Folder that was open when the app last ran (remembered, not auto-opened)
    #[serde(default)]
    pub last_folder_id: Option<i64>,
}

impl Default for StudioConfigData {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            user_id: None,
            photobook_history_size: default_photobook_history_size(),
            navigation_capacity: default_navigation_capacity(),
            navigation_debounce_ms: default_navigation_debounce_ms(),
            photo_cache_minutes: default_photo_cache_minutes(),
            last_folder_id: None,
        }
    }
}

impl StudioConfigData {
    /// Reset out-of-range values to their defaults.
    ///
    /// Returns one message per field that was reset.
    pub fn sanitize(&mut self) -> Vec<String> {
        let defaults = Self::default();
        let mut resets = Vec::new();

        if !(1..=MAX_PHOTO_CACHE_MINUTES).contains(&self.photo_cache_minutes) {
            resets.push(format!(
                "photo_cache_minutes {} is outside 1..={}, using {}",
                self.photo_cache_minutes, MAX_PHOTO_CACHE_MINUTES, defaults.photo_cache_minutes
            ));
            self.photo_cache_minutes = defaults.photo_cache_minutes;
        }
        if !(0..=MAX_NAVIGATION_DEBOUNCE_MS).contains(&self.navigation_debounce_ms) {
            resets.push(format!(
                "navigation_debounce_ms {} is outside 0..={}, using {}",
                self.navigation_debounce_ms,
                MAX_NAVIGATION_DEBOUNCE_MS,
                defaults.navigation_debounce_ms
            ));
            self.navigation_debounce_ms = defaults.navigation_debounce_ms;
        }
        resets
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: StudioConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: StudioConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to remember the folder the user opened last
#[derive(Message)]
pub struct UpdateLastFolderRequest {
    pub folder_id: Option<i64>,
}

/// Result of loading config from disk
struct LoadConfigResult {
    data: StudioConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from the given path
fn load_config(config_path: &std::path::Path) -> LoadConfigResult {
    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(config_path) {
            Ok(json) => match serde_json::from_str::<StudioConfigData>(&json) {
                Ok(mut data) => {
                    info!("Loaded config from {:?}", config_path);
                    let resets = data.sanitize();
                    for reset in &resets {
                        warn!("Config value reset: {}", reset);
                    }
                    let reason = (!resets.is_empty())
                        .then(|| format!("Some settings were reset: {}", resets.join("; ")));
                    (data, reason)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        StudioConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    StudioConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (StudioConfigData::default(), None)
    };

    LoadConfigResult { data, reset_reason }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&config.data)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(&config.config_path, json)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    info!("Config saved to {:?}", config.config_path);
    Ok(())
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;
    config.dirty = false;

    if let Some(reason) = result.reset_reason {
        warn!("Configuration reset to defaults: {}", reason);
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            match save_config(&config) {
                Ok(()) => config.dirty = false,
                Err(e) => error!("{}", e),
            }
        }
    }
}

/// System to update the remembered folder
fn update_last_folder_system(
    mut events: MessageReader<UpdateLastFolderRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if config.data.last_folder_id == event.folder_id {
            continue;
        }
        config.data.last_folder_id = event.folder_id;
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<UpdateLastFolderRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    update_last_folder_system.run_if(on_message::<UpdateLastFolderRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "photostudio-config-test-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("config.json")
    }

    #[test]
    fn test_config_data_default() {
        let data = StudioConfigData::default();
        assert!(data.user_id.is_none());
        assert!(data.last_folder_id.is_none());
        assert_eq!(data.photobook_history_size, PHOTOBOOK_HISTORY_SIZE);
        assert_eq!(data.navigation_capacity, 50);
        assert_eq!(data.navigation_debounce_ms, 500);
        assert_eq!(data.photo_cache_minutes, 50);
    }

    #[test]
    fn test_config_data_serialization() {
        let data = StudioConfigData {
            api_base_url: "https://studio.example.com/api".to_string(),
            user_id: Some(17),
            last_folder_id: Some(3),
            ..Default::default()
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: StudioConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, data);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: StudioConfigData = serde_json::from_str(r#"{ "user_id": 5 }"#).unwrap();

        assert_eq!(parsed.user_id, Some(5));
        assert_eq!(parsed.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(parsed.navigation_capacity, NAVIGATION_HISTORY_CAPACITY);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = temp_config_path("missing");
        let _ = std::fs::remove_file(&path);

        let result = load_config(&path);

        assert_eq!(result.data, StudioConfigData::default());
        assert!(result.reset_reason.is_none());
    }

    #[test]
    fn test_load_corrupt_file_reports_reset() {
        let path = temp_config_path("corrupt");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_config(&path);

        assert_eq!(result.data, StudioConfigData::default());
        assert!(result.reset_reason.unwrap().contains("corrupted"));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip");
        let config = AppConfig {
            data: StudioConfigData {
                user_id: Some(99),
                ..Default::default()
            },
            config_path: path.clone(),
            dirty: true,
        };

        save_config(&config).unwrap();
        let loaded = load_config(&path);

        assert_eq!(loaded.data.user_id, Some(99));
    }

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let mut data = StudioConfigData {
            photo_cache_minutes: 30,
            navigation_debounce_ms: 0,
            ..Default::default()
        };

        assert!(data.sanitize().is_empty());
        assert_eq!(data.photo_cache_minutes, 30);
        assert_eq!(data.navigation_debounce_ms, 0);
    }

    #[test]
    fn test_sanitize_resets_out_of_range_durations() {
        for minutes in [i64::MAX, 1_000_000_000_000, 0, -5] {
            let mut data = StudioConfigData {
                photo_cache_minutes: minutes,
                ..Default::default()
            };
            assert_eq!(data.sanitize().len(), 1, "minutes = {minutes}");
            assert_eq!(data.photo_cache_minutes, PHOTO_CACHE_DURATION_MINUTES);
        }

        let mut data = StudioConfigData {
            navigation_debounce_ms: -1,
            ..Default::default()
        };
        assert_eq!(data.sanitize().len(), 1);
        assert_eq!(data.navigation_debounce_ms, NAVIGATION_DEBOUNCE_MS);
    }

    #[test]
    fn test_load_out_of_range_values_reports_reset() {
        let path = temp_config_path("out-of-range");
        std::fs::write(
            &path,
            r#"{ "user_id": 4, "photo_cache_minutes": 9223372036854775807, "navigation_debounce_ms": -200 }"#,
        )
        .unwrap();

        let result = load_config(&path);

        assert_eq!(result.data.user_id, Some(4));
        assert_eq!(result.data.photo_cache_minutes, PHOTO_CACHE_DURATION_MINUTES);
        assert_eq!(result.data.navigation_debounce_ms, NAVIGATION_DEBOUNCE_MS);
        let reason = result.reset_reason.unwrap();
        assert!(reason.contains("photo_cache_minutes"));
        assert!(reason.contains("navigation_debounce_ms"));
    }
}
