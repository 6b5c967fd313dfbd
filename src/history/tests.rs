//! Unit tests for the history module.

use super::{BoundedHistory, DEFAULT_MAX_HISTORY_SIZE};

#[test]
fn test_bounded_history_push() {
    let mut history = BoundedHistory::new(0, 10);
    assert!(!history.can_undo());

    history.push(1);
    assert!(history.can_undo());
    assert_eq!(history.undo_count(), 1);
    assert_eq!(*history.present(), 1);
}

#[test]
fn test_bounded_history_max_size_drops_oldest() {
    let mut history = BoundedHistory::new(0, 5);

    for value in 1..=20 {
        history.push(value);
        assert!(history.undo_count() <= 5);
    }

    let past: Vec<i32> = history.state().past.iter().copied().collect();
    assert_eq!(past, vec![15, 16, 17, 18, 19]);
    assert_eq!(*history.present(), 20);
}

#[test]
fn test_bounded_history_zero_size_keeps_no_past() {
    let mut history = BoundedHistory::new("a", 0);
    history.push("b");

    assert!(!history.can_undo());
    assert_eq!(*history.present(), "b");
}

#[test]
fn test_undo_then_redo_restores_present() {
    let mut history = BoundedHistory::new(vec![1], 10);
    history.push(vec![1, 2]);
    history.push(vec![1, 2, 3]);

    let before = history.present().clone();
    assert!(history.undo());
    assert_eq!(*history.present(), vec![1, 2]);
    assert!(history.redo());
    assert_eq!(*history.present(), before);
}

#[test]
fn test_undo_moves_present_to_front_of_future() {
    let mut history = BoundedHistory::new(1, 10);
    history.push(2);
    history.push(3);

    history.undo();
    history.undo();

    let future: Vec<i32> = history.state().future.iter().copied().collect();
    assert_eq!(future, vec![2, 3]);
    assert_eq!(*history.present(), 1);
}

#[test]
fn test_push_clears_redo_branch() {
    let mut history = BoundedHistory::new(1, 10);
    history.push(2);
    history.undo();
    assert!(history.can_redo());

    history.push(5);
    assert!(!history.can_redo());
    assert!(history.state().future.is_empty());
}

#[test]
fn test_undo_redo_at_boundaries_are_noops() {
    let mut history = BoundedHistory::new(7, 10);

    assert!(!history.undo());
    assert!(!history.redo());
    assert!(!history.undo());
    assert_eq!(*history.present(), 7);
    assert_eq!(history.history_size(), 1);
}

#[test]
fn test_push_with_derives_from_present() {
    let mut history = BoundedHistory::new(vec!["cover".to_string()], 10);
    history.push_with(|spreads| {
        let mut next = spreads.clone();
        next.push("page 1".to_string());
        next
    });

    assert_eq!(history.present().len(), 2);
    assert_eq!(history.undo_count(), 1);
}

#[test]
fn test_reset_wipes_history_at_any_depth() {
    let mut history = BoundedHistory::new(0, 100);
    for value in 1..50 {
        history.push(value);
    }
    for _ in 0..10 {
        history.undo();
    }
    assert!(history.can_undo());
    assert!(history.can_redo());

    history.reset(1000);

    assert_eq!(*history.present(), 1000);
    assert_eq!(history.undo_count(), 0);
    assert_eq!(history.redo_count(), 0);
}

#[test]
fn test_clear_history_preserves_present() {
    let mut history = BoundedHistory::new(String::from("a"), 10);
    history.push(String::from("b"));
    history.push(String::from("c"));
    history.undo();

    history.clear_history();

    assert_eq!(history.present(), "b");
    assert!(history.state().past.is_empty());
    assert!(history.state().future.is_empty());
}

#[test]
fn test_history_counters() {
    let mut history = BoundedHistory::new(0, 10);
    history.push(1);
    history.push(2);
    history.push(3);
    history.undo();

    assert_eq!(history.history_size(), 4);
    assert_eq!(history.current_index(), 2);
    assert_eq!(history.redo_count(), 1);
}

#[test]
fn test_default_uses_default_size() {
    let history: BoundedHistory<Vec<u8>> = BoundedHistory::default();
    assert_eq!(history.max_history_size(), DEFAULT_MAX_HISTORY_SIZE);
    assert!(history.present().is_empty());
}
