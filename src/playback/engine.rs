//! Playback Engine
//!
//! Single scheduler for every timed sequence. Time is virtual: nothing
//! happens until the owner calls `advance`, which makes the engine equally
//! usable under a real timer loop and under a fake clock in tests.
//!
//! Sequences are never cancelled and may overlap; events that fall due on
//! the same instant come out in the order they were scheduled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::output::OutputEvent;
use super::types::PlaybackSequence;

#[derive(Debug)]
struct Pending {
    due: Duration,
    order: u64,
    label: &'static str,
    event: OutputEvent,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.order == other.order
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.order).cmp(&(other.due, other.order))
    }
}

#[derive(Debug, Default)]
pub struct PlaybackEngine {
    now: Duration,
    next_order: u64,
    queue: BinaryHeap<Reverse<Pending>>,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the engine was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue every step of `seq`, offsets counted from now.
    pub fn schedule(&mut self, seq: PlaybackSequence) {
        log::debug!(
            "scheduling {} ({} steps over {:?}) at {:?}",
            seq.label(),
            seq.len(),
            seq.duration(),
            self.now
        );
        let label = seq.label();
        for step in seq.steps() {
            self.queue.push(Reverse(Pending {
                due: self.now + step.offset,
                order: self.next_order,
                label,
                event: step.event.clone(),
            }));
            self.next_order += 1;
        }
    }

    /// Move the clock forward by `elapsed` and return every event that fell due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<OutputEvent> {
        let target = self.now + elapsed;
        let mut due = Vec::new();
        while let Some(Reverse(next)) = self.queue.peek() {
            if next.due > target {
                break;
            }
            let Some(Reverse(pending)) = self.queue.pop() else {
                break;
            };
            self.now = pending.due;
            log::trace!("{} emits at {:?}: {:?}", pending.label, pending.due, pending.event);
            due.push(pending.event);
        }
        self.now = target;
        due
    }

    /// Time left until the next event, if any are pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue
            .peek()
            .map(|Reverse(next)| next.due.saturating_sub(self.now))
    }

    /// Jump straight to the last pending event.
    pub fn drain(&mut self) -> Vec<OutputEvent> {
        let mut events = Vec::new();
        while let Some(wait) = self.next_deadline() {
            events.extend(self.advance(wait));
        }
        events
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}
