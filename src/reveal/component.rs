// SPDX-License-Identifier: MPL-2.0
//! Comparison widget orchestrator.
//!
//! Wires the gesture machine, the coalescer and the geometry resolver into a
//! single per-instance state. Every message goes through [`State::handle`], so
//! gesture input, layout refreshes and render ticks are serialized by the
//! host's update loop.

use super::coalescer::Coalescer;
use super::geometry::{self, RevealOutput};
use super::gesture;
use super::scheduler::{FrameScheduler, NextFrame};
use crate::domain::reveal::{PointerId, RevealPercent, TrackBounds};
use iced::{window, Subscription};
use std::time::Instant;

/// The two stacked surfaces controlled by the widget.
#[derive(Debug, Clone)]
pub struct Layers<L> {
    /// Lower surface, visible left of the divider.
    pub before: L,
    /// Upper surface, revealed right of the divider.
    pub after: L,
}

/// Messages for the comparison widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer input together with the track bounds at the time of the event.
    Gesture {
        input: gesture::Message,
        track: TrackBounds,
    },
    /// The track was laid out again (resize, reflow).
    TrackLaidOut(TrackBounds),
    /// A render tick from the frame scheduler.
    FrameTick(Instant),
}

/// Effects produced for the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// A gesture captured `PointerId`.
    GestureStarted(PointerId),
    /// The captured pointer was released.
    GestureEnded { pointer: PointerId, cancelled: bool },
    /// A render tick committed a new divider position.
    Committed(RevealPercent),
}

/// Comparison widget state, one per attached instance.
#[derive(Debug, Clone)]
pub struct State<L, S = NextFrame> {
    layers: Layers<L>,
    gesture: gesture::State,
    coalescer: Coalescer,
    scheduler: S,
    track: Option<TrackBounds>,
    percent: RevealPercent,
    commits: u64,
}

impl<L, S: FrameScheduler + Default> State<L, S> {
    /// Attaches the widget to its two layers.
    ///
    /// Returns `None` if either layer is missing: the widget then stays
    /// inactive and nothing is wired.
    #[must_use]
    pub fn attach(before: Option<L>, after: Option<L>) -> Option<Self> {
        Self::attach_with(before, after, S::default())
    }
}

impl<L, S: FrameScheduler> State<L, S> {
    /// Attaches the widget with an explicit scheduler.
    #[must_use]
    pub fn attach_with(before: Option<L>, after: Option<L>, scheduler: S) -> Option<Self> {
        let layers = Layers {
            before: before?,
            after: after?,
        };

        Some(Self {
            layers,
            gesture: gesture::State::default(),
            coalescer: Coalescer::new(),
            scheduler,
            track: None,
            percent: RevealPercent::default(),
            commits: 0,
        })
    }

    /// Handle a comparison widget message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Gesture { input, track } => {
                self.track = Some(track);
                match self.gesture.handle(input) {
                    gesture::Effect::Captured { pointer, x } => {
                        self.coalescer.submit(x, &mut self.scheduler);
                        Effect::GestureStarted(pointer)
                    }
                    gesture::Effect::Track(x) => {
                        self.coalescer.submit(x, &mut self.scheduler);
                        Effect::None
                    }
                    gesture::Effect::Released { pointer, cancelled } => {
                        Effect::GestureEnded { pointer, cancelled }
                    }
                    gesture::Effect::None => Effect::None,
                }
            }
            // The divider is stored as a fraction of the track, so a reflow
            // rescales it without touching `percent`.
            Message::TrackLaidOut(track) => {
                self.track = Some(track);
                Effect::None
            }
            Message::FrameTick(_) => self.commit(),
        }
    }

    fn commit(&mut self) -> Effect {
        let Some(raw_x) = self.coalescer.on_tick(&mut self.scheduler) else {
            return Effect::None;
        };
        let Some(track) = self.track else {
            return Effect::None;
        };

        self.percent = geometry::resolve(raw_x, track, self.percent);
        self.commits += 1;
        Effect::Committed(self.percent)
    }

    /// Current divider position.
    #[must_use]
    pub fn percent(&self) -> RevealPercent {
        self.percent
    }

    /// Clip boundary and handle offset for a track of `width` units.
    #[must_use]
    pub fn output(&self, width: f32) -> RevealOutput {
        RevealOutput::at(self.percent, width)
    }

    /// The attached layers.
    #[must_use]
    pub fn layers(&self) -> &Layers<L> {
        &self.layers
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// The pointer owned by the current gesture, if any.
    #[must_use]
    pub fn captured(&self) -> Option<PointerId> {
        self.gesture.captured()
    }

    /// Last known track bounds.
    #[must_use]
    pub fn track(&self) -> Option<TrackBounds> {
        self.track
    }

    /// Number of positions committed since attach.
    #[must_use]
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    /// Number of coordinates dropped in favor of a newer one.
    #[must_use]
    pub fn coalesced_count(&self) -> u64 {
        self.coalescer.coalesced()
    }

    /// The frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<L> State<L, NextFrame> {
    /// Frame ticks, only while one is requested.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.scheduler.is_requested() {
            window::frames().map(Message::FrameTick)
        } else {
            Subscription::none()
        }
    }
}
