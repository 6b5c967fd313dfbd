//! Time source shared by the history and cache structures.
//!
//! Structures that compare timestamps (navigation debounce, cache expiry) read
//! the time through [`Clock`] instead of calling `Utc::now()` directly, so tests
//! can drive them with a [`ManualClock`].

use bevy::prelude::Resource;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock handle that can be cloned into every structure that needs one
pub type SharedClock = Arc<dyn Clock>;

/// The real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Shared handle to the system clock
pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

/// The clock plugins hand to the structures they build.
///
/// Inserted before the plugins are added, it replaces the system clock.
#[derive(Resource, Clone)]
pub struct StudioClock(pub SharedClock);

impl Default for StudioClock {
    fn default() -> Self {
        Self(system_clock())
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<std::sync::Mutex<DateTime<Utc>>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(std::sync::Mutex::new(start)),
        }
    }

    /// Clock starting at a fixed, arbitrary instant
    pub fn at_epoch_offset(secs: i64) -> Self {
        Self::new(DateTime::from_timestamp(secs, 0).unwrap())
    }

    pub fn advance(&self, by: chrono::Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn advance_millis(&self, ms: i64) {
        self.advance(chrono::Duration::milliseconds(ms));
    }

    pub fn shared(&self) -> SharedClock {
        Arc::new(self.clone())
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
