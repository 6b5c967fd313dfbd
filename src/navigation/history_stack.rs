//! Bounded navigation log with a read head.

use bevy::log::debug;
use chrono::{DateTime, Utc};

use crate::clock::SharedClock;

/// A snapshot together with the time it was recorded
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationEntry<S> {
    pub state: S,
    pub timestamp: DateTime<Utc>,
}

/// Back/forward history over snapshots of type `S`
pub struct NavigationHistory<S> {
    entries: Vec<NavigationEntry<S>>,
    /// `None` only while the history is empty
    current_index: Option<usize>,
    capacity: usize,
    clock: SharedClock,
}

impl<S: Clone> NavigationHistory<S> {
    pub fn new(capacity: usize, clock: SharedClock) -> Self {
        Self {
            entries: Vec::new(),
            current_index: None,
            // A zero capacity could not even hold the current view
            capacity: capacity.max(1),
            clock,
        }
    }

    /// Record a new snapshot after the current one.
    ///
    /// Entries ahead of the read head are discarded. When the log is over
    /// capacity the oldest entries are evicted, and the read head always ends
    /// on the entry just pushed.
    pub fn push_state(&mut self, state: S) {
        let keep = self.current_index.map_or(0, |index| index + 1);
        self.entries.truncate(keep);

        self.entries.push(NavigationEntry {
            state,
            timestamp: self.clock.now(),
        });

        if self.entries.len() > self.capacity {
            let overflow = self.entries.len() - self.capacity;
            self.entries.drain(..overflow);
            debug!("Navigation history full, evicted {} oldest entries", overflow);
        }

        self.current_index = Some(self.entries.len() - 1);
    }

    /// Move the read head back one entry and return the snapshot there
    pub fn go_back(&mut self) -> Option<S> {
        let index = self.current_index.filter(|&i| i > 0)? - 1;
        self.current_index = Some(index);
        Some(self.entries[index].state.clone())
    }

    /// Move the read head forward one entry and return the snapshot there
    pub fn go_forward(&mut self) -> Option<S> {
        let index = self.current_index? + 1;
        if index >= self.entries.len() {
            return None;
        }
        self.current_index = Some(index);
        Some(self.entries[index].state.clone())
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index.is_some_and(|i| i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index
            .is_some_and(|i| i + 1 < self.entries.len())
    }

    /// The entry under the read head
    pub fn current(&self) -> Option<&NavigationEntry<S>> {
        self.current_index.map(|i| &self.entries[i])
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn entries(&self) -> &[NavigationEntry<S>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_index = None;
    }

    pub(super) fn clock(&self) -> &SharedClock {
        &self.clock
    }
}
