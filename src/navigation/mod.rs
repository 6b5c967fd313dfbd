//! Browser-style back/forward history for UI views.
//!
//! A navigation history is a linear log of view snapshots with a movable read
//! head. Pushing while the head is not at the end truncates the forward part,
//! and the log never holds more than its capacity (oldest entries go first).
//!
//! ## Module Structure
//!
//! - [`snapshot`] - Snapshot payloads recorded by the clients page and the photo bank
//! - [`history_stack`] - `NavigationHistory<S>`, the plain stack
//! - [`debounced`] - `DebouncedNavigationHistory<S>`, which drops rapid and duplicate pushes

mod debounced;
mod history_stack;
mod snapshot;


pub use debounced::DebouncedNavigationHistory;
pub use history_stack::{NavigationEntry, NavigationHistory};
pub use snapshot::{ClientStatusFilter, ClientsViewMode, NavigationSnapshot, PhotoBankView};

/// Maximum number of snapshots kept in a navigation history
pub const NAVIGATION_HISTORY_CAPACITY: usize = 50;

/// Pushes closer together than this are ignored by the debounced history
pub const NAVIGATION_DEBOUNCE_MS: i64 = 500;
