// SPDX-License-Identifier: MPL-2.0
//! Interaction diagnostics.
//!
//! Keeps a memory-bounded history of comparison widget events together with
//! running totals, so a session can be summarized in the log on exit.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`InteractionEvent`]: Timestamped gesture or commit event
//! - [`InteractionLog`]: Buffer plus totals, fed from engine effects

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{InteractionEvent, InteractionKind};

use crate::reveal::Effect;

/// Running totals over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionSummary {
    pub gestures: u64,
    pub cancelled: u64,
    pub commits: u64,
    /// Commits that landed on either edge of the track.
    pub saturated: u64,
}

/// Recent interaction history plus session totals.
#[derive(Debug, Clone)]
pub struct InteractionLog {
    events: CircularBuffer<InteractionEvent>,
    summary: InteractionSummary,
}

impl Default for InteractionLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl InteractionLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
            summary: InteractionSummary::default(),
        }
    }

    /// Records the event carried by an engine effect.
    ///
    /// Returns the recorded kind, or `None` for effects that carry nothing.
    pub fn record(&mut self, effect: Effect) -> Option<InteractionKind> {
        let kind = InteractionKind::from_effect(effect)?;
        match kind {
            InteractionKind::GestureStarted { .. } => self.summary.gestures += 1,
            InteractionKind::GestureEnded { cancelled, .. } => {
                if cancelled {
                    self.summary.cancelled += 1;
                }
            }
            InteractionKind::PositionCommitted { percent } => {
                self.summary.commits += 1;
                if percent.is_min() || percent.is_max() {
                    self.summary.saturated += 1;
                }
            }
        }
        self.events.push(InteractionEvent::now(kind));
        Some(kind)
    }

    /// Events in chronological order (oldest first).
    pub fn events(&self) -> impl Iterator<Item = &InteractionEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn summary(&self) -> InteractionSummary {
        self.summary
    }
}
