//! Playback Types

use std::time::Duration;

use crate::output::OutputEvent;

/// Shorthand for a millisecond duration.
pub const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// One timed event, offset from the moment its sequence was scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub offset: Duration,
    pub event: OutputEvent,
}

/// An ordered list of timed output events.
///
/// Built either from fixed offsets (`at`) or relative to the previous step
/// (`after`, `with`, `every`). Offsets never decrease.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSequence {
    label: &'static str,
    steps: Vec<Step>,
    cursor: Duration,
}

impl PlaybackSequence {
    pub fn new(label: &'static str) -> Self {
        Self { label, steps: Vec::new(), cursor: Duration::ZERO }
    }

    /// Name used in log lines.
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Offset of the last step.
    pub fn duration(&self) -> Duration {
        self.cursor
    }

    /// Event at a fixed offset from the start of the sequence.
    pub fn at(mut self, offset: Duration, event: OutputEvent) -> Self {
        let offset = offset.max(self.cursor);
        self.push(offset, event);
        self
    }

    /// Event `delay` after the previous step.
    pub fn after(mut self, delay: Duration, event: OutputEvent) -> Self {
        let offset = self.cursor + delay;
        self.push(offset, event);
        self
    }

    /// Event on the same tick as the previous step.
    pub fn with(mut self, event: OutputEvent) -> Self {
        let offset = self.cursor;
        self.push(offset, event);
        self
    }

    /// `count` ticks spaced `period` apart; `make` builds the events for tick `i`
    /// (starting at 0). Every event of a tick shares its offset.
    pub fn every<F>(mut self, period: Duration, count: usize, mut make: F) -> Self
    where
        F: FnMut(usize) -> Vec<OutputEvent>,
    {
        for i in 0..count {
            let offset = self.cursor + period;
            self.cursor = offset;
            for event in make(i) {
                self.push(offset, event);
            }
        }
        self
    }

    fn push(&mut self, offset: Duration, event: OutputEvent) {
        self.cursor = offset;
        self.steps.push(Step { offset, event });
    }
}
