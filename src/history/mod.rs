//! Bounded undo/redo history.
//!
//! Keeps a value split into past, present and future. Editing pushes a new
//! present and drops any redo branch; undo and redo move the present along the
//! recorded states.
//!
//! ## Module Structure
//!
//! - [`bounded_history`] - `BoundedHistory<T>` and its `HistoryState<T>` partitions

mod bounded_history;

#[cfg(test)]
mod tests;

pub use bounded_history::{BoundedHistory, HistoryState};

/// Default number of past states kept for generic editable lists
pub const DEFAULT_MAX_HISTORY_SIZE: usize = 50;
