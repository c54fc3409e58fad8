// SPDX-License-Identifier: MPL-2.0
//! Interaction event types recorded by the diagnostics buffer.

use crate::domain::reveal::{PointerId, RevealPercent};
use crate::reveal::Effect;
use std::time::Instant;

/// What happened to the comparison widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionKind {
    /// A pointer was captured by a press on the track or handle.
    GestureStarted { pointer: PointerId },
    /// The captured pointer was released or cancelled.
    GestureEnded { pointer: PointerId, cancelled: bool },
    /// A render tick committed a divider position.
    PositionCommitted { percent: RevealPercent },
}

impl InteractionKind {
    /// Maps an engine effect to the event it records, if any.
    #[must_use]
    pub fn from_effect(effect: Effect) -> Option<Self> {
        match effect {
            Effect::None => None,
            Effect::GestureStarted(pointer) => Some(Self::GestureStarted { pointer }),
            Effect::GestureEnded { pointer, cancelled } => {
                Some(Self::GestureEnded { pointer, cancelled })
            }
            Effect::Committed(percent) => Some(Self::PositionCommitted { percent }),
        }
    }
}

/// A timestamped interaction event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionEvent {
    pub at: Instant,
    pub kind: InteractionKind,
}

impl InteractionEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn now(kind: InteractionKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}
