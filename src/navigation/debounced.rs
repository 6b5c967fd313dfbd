//! Navigation history that ignores bursts and repeats.
//!
//! View changes are often reported more than once for a single user action
//! (several state fields settle one after another). This wrapper accepts a
//! push only if enough time has passed since the last accepted one and the
//! snapshot differs from the one under the read head.

use bevy::log::trace;
use chrono::{DateTime, Duration, Utc};

use super::history_stack::{NavigationEntry, NavigationHistory};
use crate::clock::SharedClock;

pub struct DebouncedNavigationHistory<S> {
    inner: NavigationHistory<S>,
    debounce: Duration,
    last_accepted: Option<DateTime<Utc>>,
}

impl<S: Clone + PartialEq> DebouncedNavigationHistory<S> {
    pub fn new(capacity: usize, debounce: Duration, clock: SharedClock) -> Self {
        Self {
            inner: NavigationHistory::new(capacity, clock),
            debounce,
            last_accepted: None,
        }
    }

    /// Push a snapshot unless it comes too soon after the previous accepted
    /// push or repeats the current entry. Returns whether it was recorded.
    ///
    /// Repeats are checked against the entry under the read head, not the
    /// newest one, so re-reporting the view reached by `go_back` keeps the
    /// forward entries.
    pub fn push_state(&mut self, state: S) -> bool {
        let now = self.inner.clock().now();

        if let Some(last) = self.last_accepted
            && now - last < self.debounce
        {
            trace!("Navigation push ignored: within debounce window");
            return false;
        }

        if self
            .inner
            .current()
            .is_some_and(|entry| entry.state == state)
        {
            trace!("Navigation push ignored: same as current entry");
            return false;
        }

        self.inner.push_state(state);
        self.last_accepted = Some(now);
        true
    }

    pub fn go_back(&mut self) -> Option<S> {
        self.inner.go_back()
    }

    pub fn go_forward(&mut self) -> Option<S> {
        self.inner.go_forward()
    }

    pub fn can_go_back(&self) -> bool {
        self.inner.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.inner.can_go_forward()
    }

    pub fn current(&self) -> Option<&NavigationEntry<S>> {
        self.inner.current()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.inner.current_index()
    }

    pub fn entries(&self) -> &[NavigationEntry<S>] {
        self.inner.entries()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.last_accepted = None;
    }
}
