//! Schedule domain: tests for deferred action ordering.

use bevy::prelude::Entity;
use std::time::Duration;

use super::{DeferredAction, DeferredQueue};

fn despawn(n: u64) -> DeferredAction {
    DeferredAction::DespawnCorpse {
        corpse: Entity::from_bits(n),
    }
}

fn rearm(n: u64) -> DeferredAction {
    DeferredAction::RearmGroundCheck {
        player: Entity::from_bits(n),
    }
}

#[test]
fn test_queue_starts_empty() {
    let mut queue = DeferredQueue::default();
    assert!(queue.is_empty());
    assert!(queue.advance(Duration::from_secs(10)).is_empty());
    assert_eq!(queue.now(), Duration::from_secs(10));
}

#[test]
fn test_action_not_due_before_delay() {
    let mut queue = DeferredQueue::default();
    queue.schedule(Duration::from_millis(100), despawn(1));

    assert!(queue.advance(Duration::from_millis(60)).is_empty());
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.advance(Duration::from_millis(40)), vec![despawn(1)]);
    assert!(queue.is_empty());
}

#[test]
fn test_actions_returned_in_due_order() {
    let mut queue = DeferredQueue::default();
    queue.schedule(Duration::from_millis(100), despawn(1));
    queue.schedule(Duration::from_millis(20), rearm(2));
    queue.schedule(Duration::from_millis(50), despawn(3));

    let due = queue.advance(Duration::from_millis(200));
    assert_eq!(due, vec![rearm(2), despawn(3), despawn(1)]);
}

#[test]
fn test_equal_due_times_are_fifo() {
    let mut queue = DeferredQueue::default();
    for n in 1..=4 {
        queue.schedule(Duration::from_millis(100), despawn(n));
    }

    let due = queue.advance(Duration::from_millis(100));
    assert_eq!(due, vec![despawn(1), despawn(2), despawn(3), despawn(4)]);
}

#[test]
fn test_delay_is_relative_to_queue_clock() {
    let mut queue = DeferredQueue::default();
    queue.advance(Duration::from_secs(5));
    queue.schedule(Duration::from_millis(100), despawn(1));

    assert!(queue.advance(Duration::from_millis(50)).is_empty());
    assert_eq!(queue.advance(Duration::from_millis(50)), vec![despawn(1)]);
}

#[test]
fn test_negative_delay_runs_on_next_advance() {
    let mut queue = DeferredQueue::default();
    queue.schedule_secs(-1.0, rearm(1));
    assert_eq!(queue.advance(Duration::ZERO), vec![rearm(1)]);
}

#[test]
fn test_flush_returns_everything_in_due_order() {
    let mut queue = DeferredQueue::default();
    queue.schedule_secs(5.0, despawn(1));
    queue.schedule_secs(0.02, rearm(2));

    assert_eq!(queue.flush(), vec![rearm(2), despawn(1)]);
    assert!(queue.is_empty());
    assert!(queue.advance(Duration::from_secs(10)).is_empty());
}
