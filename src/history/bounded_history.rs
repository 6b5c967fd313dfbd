//! Past/present/future history with a capped past.

use std::collections::VecDeque;

/// The three partitions of an undo/redo history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryState<T> {
    /// Earlier states, oldest first
    pub past: VecDeque<T>,
    /// The current value
    pub present: T,
    /// Undone states, nearest first
    pub future: VecDeque<T>,
}

impl<T> HistoryState<T> {
    fn fresh(present: T) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: VecDeque::new(),
        }
    }
}

/// Undo/redo history whose past never grows beyond `max_history_size`
#[derive(Debug, Clone)]
pub struct BoundedHistory<T> {
    state: HistoryState<T>,
    max_history_size: usize,
}

impl<T> BoundedHistory<T> {
    pub fn new(initial: T, max_history_size: usize) -> Self {
        Self {
            state: HistoryState::fresh(initial),
            max_history_size,
        }
    }

    /// Record a new present. The old present moves into the past and the
    /// redo branch is discarded.
    pub fn push(&mut self, value: T) {
        let previous = std::mem::replace(&mut self.state.present, value);
        self.state.past.push_back(previous);
        while self.state.past.len() > self.max_history_size {
            self.state.past.pop_front();
        }
        self.state.future.clear();
    }

    /// Record a new present computed from the current one
    pub fn push_with(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.state.present);
        self.push(next);
    }

    /// Step back one state. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.state.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.state.present, previous);
        self.state.future.push_front(current);
        true
    }

    /// Step forward one state. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.state.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.state.present, next);
        self.state.past.push_back(current);
        true
    }

    /// Replace everything with a single present and no history
    pub fn reset(&mut self, value: T) {
        self.state = HistoryState::fresh(value);
    }

    /// Forget past and future, keeping the present
    pub fn clear_history(&mut self) {
        self.state.past.clear();
        self.state.future.clear();
    }

    pub fn present(&self) -> &T {
        &self.state.present
    }

    pub fn state(&self) -> &HistoryState<T> {
        &self.state
    }

    pub fn max_history_size(&self) -> usize {
        self.max_history_size
    }

    pub fn can_undo(&self) -> bool {
        !self.state.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.state.future.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.state.past.len()
    }

    pub fn redo_count(&self) -> usize {
        self.state.future.len()
    }

    /// Total number of recorded states, present included
    pub fn history_size(&self) -> usize {
        self.state.past.len() + 1 + self.state.future.len()
    }

    /// Position of the present within all recorded states
    pub fn current_index(&self) -> usize {
        self.state.past.len()
    }
}

impl<T: Default> Default for BoundedHistory<T> {
    fn default() -> Self {
        Self::new(T::default(), super::DEFAULT_MAX_HISTORY_SIZE)
    }
}
