//! Centralized constants used across the application.
//!
//! Values that several plugins share, or that configuration falls back to
//! when a setting is missing.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1440.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Undo depth of the photobook editor
pub const PHOTOBOOK_HISTORY_SIZE: usize = 100;

/// Seconds between refetches of a folder whose RAW photos still lack thumbnails
pub const RAW_THUMBNAIL_REFRESH_SECS: f32 = 10.0;

/// Backend endpoint used when the config does not name one
pub const DEFAULT_API_BASE_URL: &str = "https://api.photostudio.example/photobank";
