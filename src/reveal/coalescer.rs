// SPDX-License-Identifier: MPL-2.0
//! Render coalescer.
//!
//! Decouples input arrival rate from render rate: any number of coordinates
//! submitted between two ticks collapse into the last one, and at most one
//! tick is outstanding at any time.

use super::scheduler::FrameScheduler;
use super::slot::PendingSlot;

/// Buffers the latest raw coordinate until the next render tick.
#[derive(Debug, Clone, Default)]
pub struct Coalescer {
    pending: PendingSlot<f32>,
    tick_scheduled: bool,
}

impl Coalescer {
    /// Creates a coalescer with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the pending coordinate and requests a tick if none is
    /// outstanding.
    ///
    /// Returns `true` if this call scheduled a new tick.
    pub fn submit<S: FrameScheduler>(&mut self, raw_x: f32, scheduler: &mut S) -> bool {
        self.pending.put(raw_x);
        if self.tick_scheduled {
            return false;
        }
        self.tick_scheduled = true;
        scheduler.request_frame();
        true
    }

    /// Consumes the pending coordinate for the current tick.
    ///
    /// Clears the scheduled flag whether or not a coordinate was pending.
    pub fn on_tick<S: FrameScheduler>(&mut self, scheduler: &mut S) -> Option<f32> {
        self.tick_scheduled = false;
        scheduler.frame_delivered();
        self.pending.take()
    }

    /// Returns true while a tick is outstanding.
    #[must_use]
    pub fn is_tick_scheduled(&self) -> bool {
        self.tick_scheduled
    }

    /// Returns the coordinate waiting for the next tick, if any.
    #[must_use]
    pub fn pending(&self) -> Option<f32> {
        self.pending.peek().copied()
    }

    /// Number of coordinates dropped in favor of a newer one.
    #[must_use]
    pub fn coalesced(&self) -> u64 {
        self.pending.overwritten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::scheduler::ManualScheduler;

    #[test]
    fn first_submit_schedules_one_tick() {
        let mut coalescer = Coalescer::new();
        let mut scheduler = ManualScheduler::new();

        assert!(coalescer.submit(10.0, &mut scheduler));
        assert!(coalescer.is_tick_scheduled());
        assert_eq!(scheduler.requests(), 1);
    }

    #[test]
    fn burst_of_submits_schedules_once_and_keeps_last() {
        let mut coalescer = Coalescer::new();
        let mut scheduler = ManualScheduler::new();

        for i in 0..50 {
            coalescer.submit(i as f32, &mut scheduler);
        }

        assert_eq!(scheduler.requests(), 1);
        assert_eq!(coalescer.pending(), Some(49.0));
        assert_eq!(coalescer.coalesced(), 49);
        assert_eq!(coalescer.on_tick(&mut scheduler), Some(49.0));
    }

    #[test]
    fn tick_clears_slot_and_flag() {
        let mut coalescer = Coalescer::new();
        let mut scheduler = ManualScheduler::new();
        coalescer.submit(5.0, &mut scheduler);

        assert_eq!(coalescer.on_tick(&mut scheduler), Some(5.0));
        assert!(!coalescer.is_tick_scheduled());
        assert!(!scheduler.is_requested());
        assert!(coalescer.pending().is_none());
    }

    #[test]
    fn tick_without_pending_is_noop() {
        let mut coalescer = Coalescer::new();
        let mut scheduler = ManualScheduler::new();

        assert_eq!(coalescer.on_tick(&mut scheduler), None);
        assert_eq!(coalescer.on_tick(&mut scheduler), None);
        assert!(!coalescer.is_tick_scheduled());
    }

    #[test]
    fn submit_after_tick_schedules_again() {
        let mut coalescer = Coalescer::new();
        let mut scheduler = ManualScheduler::new();

        coalescer.submit(1.0, &mut scheduler);
        coalescer.on_tick(&mut scheduler);
        assert!(coalescer.submit(2.0, &mut scheduler));
        assert_eq!(scheduler.requests(), 2);
    }
}
