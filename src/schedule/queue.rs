//! Schedule domain: min-heap of one-shot actions driven by frame time.

use bevy::prelude::*;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

/// A deferred one-shot action. Runs once when its delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Let the grounded check refill jump charges again
    RearmGroundCheck { player: Entity },
    /// Despawn an evicted corpse marker
    DespawnCorpse { corpse: Entity },
}

#[derive(Debug)]
struct Scheduled {
    due: Duration,
    seq: u64,
    action: DeferredAction,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Pending deferred actions, ordered by due time then insertion order.
#[derive(Resource, Debug, Default)]
pub struct DeferredQueue {
    now: Duration,
    next_seq: u64,
    heap: BinaryHeap<Reverse<Scheduled>>,
}

impl DeferredQueue {
    /// Schedule `action` to run once `delay` has elapsed from now.
    pub fn schedule(&mut self, delay: Duration, action: DeferredAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Scheduled {
            due: self.now + delay,
            seq,
            action,
        }));
    }

    /// Same as `schedule`, with the delay in seconds. Negative delays run next advance.
    pub fn schedule_secs(&mut self, delay_secs: f32, action: DeferredAction) {
        self.schedule(Duration::from_secs_f32(delay_secs.max(0.0)), action);
    }

    /// Advance the clock and return every action that became due, in due order.
    pub fn advance(&mut self, delta: Duration) -> Vec<DeferredAction> {
        self.now += delta;

        let mut due = Vec::new();
        while let Some(Reverse(next)) = self.heap.peek() {
            if next.due > self.now {
                break;
            }
            if let Some(Reverse(scheduled)) = self.heap.pop() {
                due.push(scheduled.action);
            }
        }
        due
    }

    /// Remove and return every pending action regardless of due time, in due order.
    pub fn flush(&mut self) -> Vec<DeferredAction> {
        let mut pending = Vec::with_capacity(self.heap.len());
        while let Some(Reverse(scheduled)) = self.heap.pop() {
            pending.push(scheduled.action);
        }
        pending
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Elapsed time seen by the queue.
    pub fn now(&self) -> Duration {
        self.now
    }
}
