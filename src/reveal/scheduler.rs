// SPDX-License-Identifier: MPL-2.0
//! Render tick scheduling.
//!
//! The coalescer asks for "one tick at the next paint opportunity" through
//! [`FrameScheduler`]. In the application this is [`NextFrame`], which the
//! component turns into an `iced::window::frames()` subscription. Tests and
//! benches drive ticks by hand with [`ManualScheduler`].

/// Source of render ticks aligned to the display refresh.
pub trait FrameScheduler {
    /// Requests one render tick. Repeated requests before delivery collapse
    /// into the same tick.
    fn request_frame(&mut self);

    /// Marks the requested tick as delivered.
    fn frame_delivered(&mut self);

    /// Returns true while a requested tick has not been delivered yet.
    fn is_requested(&self) -> bool;
}

/// Scheduler backed by the windowing system's frame clock.
///
/// Holds only the request flag; the owning component subscribes to
/// `iced::window::frames()` while it is set.
#[derive(Debug, Clone, Default)]
pub struct NextFrame {
    requested: bool,
}

impl NextFrame {
    /// Creates a scheduler with no tick requested.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for NextFrame {
    fn request_frame(&mut self) {
        self.requested = true;
    }

    fn frame_delivered(&mut self) {
        self.requested = false;
    }

    fn is_requested(&self) -> bool {
        self.requested
    }
}

/// Deterministic scheduler for tests: ticks happen only when the caller
/// delivers them.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    requested: bool,
    requests: usize,
    delivered: usize,
}

impl ManualScheduler {
    /// Creates a scheduler with no tick requested.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times a tick was requested while none was outstanding.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Number of ticks delivered so far.
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        if !self.requested {
            self.requests += 1;
        }
        self.requested = true;
    }

    fn frame_delivered(&mut self) {
        if self.requested {
            self.delivered += 1;
        }
        self.requested = false;
    }

    fn is_requested(&self) -> bool {
        self.requested
    }
}
