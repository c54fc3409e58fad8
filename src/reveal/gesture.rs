// SPDX-License-Identifier: MPL-2.0
//! Drag gesture sub-component.
//!
//! Two states only: a press on the track already produces a position, so
//! click-to-position and drag-to-position behave the same.

use crate::domain::reveal::PointerId;

/// What a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The track area itself.
    Track,
    /// The divider line.
    Line,
    /// The draggable handle knob.
    Handle,
    /// Anything else (unrelated UI keeps its click-through).
    Outside,
}

impl HitTarget {
    /// Returns true if a press on this target starts a gesture.
    #[must_use]
    pub fn starts_gesture(self) -> bool {
        !matches!(self, HitTarget::Outside)
    }
}

/// Gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Idle,
    /// A pointer is captured until it is released or cancelled.
    Dragging { pointer: PointerId },
}

/// Raw pointer input, already reduced to the horizontal coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Pressed {
        pointer: PointerId,
        x: f32,
        target: HitTarget,
    },
    Moved {
        pointer: PointerId,
        x: f32,
    },
    Released {
        pointer: PointerId,
    },
    Cancelled {
        pointer: PointerId,
    },
}

/// Effects produced by the gesture machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Gesture started: the pointer is now owned and `x` must be resolved.
    Captured { pointer: PointerId, x: f32 },
    /// Coordinate to resolve for the ongoing gesture.
    Track(f32),
    /// Gesture ended and the pointer was released.
    Released { pointer: PointerId, cancelled: bool },
}

impl State {
    /// Handle a gesture message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match (*self, msg) {
            (State::Idle, Message::Pressed { pointer, x, target }) => {
                if !target.starts_gesture() {
                    return Effect::None;
                }
                *self = State::Dragging { pointer };
                Effect::Captured { pointer, x }
            }
            (State::Dragging { pointer: owner }, Message::Moved { pointer, x }) => {
                if pointer == owner {
                    Effect::Track(x)
                } else {
                    Effect::None
                }
            }
            // Release and cancel clear ownership regardless of their source.
            (State::Dragging { pointer }, Message::Released { .. }) => {
                *self = State::Idle;
                Effect::Released {
                    pointer,
                    cancelled: false,
                }
            }
            (State::Dragging { pointer }, Message::Cancelled { .. }) => {
                *self = State::Idle;
                Effect::Released {
                    pointer,
                    cancelled: true,
                }
            }
            // Idle moves and releases, and presses while another pointer is
            // captured.
            _ => Effect::None,
        }
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, State::Dragging { .. })
    }

    /// The captured pointer, if any.
    #[must_use]
    pub fn captured(&self) -> Option<PointerId> {
        match self {
            State::Dragging { pointer } => Some(*pointer),
            State::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(target: HitTarget) -> Message {
        Message::Pressed {
            pointer: PointerId::Mouse,
            x: 120.0,
            target,
        }
    }

    #[test]
    fn press_on_track_line_or_handle_captures() {
        for target in [HitTarget::Track, HitTarget::Line, HitTarget::Handle] {
            let mut state = State::default();
            let effect = state.handle(press(target));
            assert_eq!(
                effect,
                Effect::Captured {
                    pointer: PointerId::Mouse,
                    x: 120.0
                }
            );
            assert_eq!(state.captured(), Some(PointerId::Mouse));
        }
    }

    #[test]
    fn press_outside_does_not_transition() {
        let mut state = State::default();
        assert_eq!(state.handle(press(HitTarget::Outside)), Effect::None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut state = State::default();
        let effect = state.handle(Message::Moved {
            pointer: PointerId::Mouse,
            x: 10.0,
        });
        assert_eq!(effect, Effect::None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn move_while_dragging_tracks() {
        let mut state = State::default();
        state.handle(press(HitTarget::Track));
        let effect = state.handle(Message::Moved {
            pointer: PointerId::Mouse,
            x: 480.0,
        });
        assert_eq!(effect, Effect::Track(480.0));
    }

    #[test]
    fn move_from_other_pointer_is_ignored() {
        let mut state = State::default();
        state.handle(press(HitTarget::Track));
        let effect = state.handle(Message::Moved {
            pointer: PointerId::Finger(7),
            x: 480.0,
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn second_press_keeps_original_owner() {
        let mut state = State::default();
        state.handle(press(HitTarget::Track));
        let effect = state.handle(Message::Pressed {
            pointer: PointerId::Finger(1),
            x: 0.0,
            target: HitTarget::Handle,
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(state.captured(), Some(PointerId::Mouse));
    }

    #[test]
    fn release_from_any_source_ends_gesture() {
        let mut state = State::default();
        state.handle(press(HitTarget::Track));
        let effect = state.handle(Message::Released {
            pointer: PointerId::Finger(2),
        });
        assert_eq!(
            effect,
            Effect::Released {
                pointer: PointerId::Mouse,
                cancelled: false
            }
        );
        assert!(!state.is_dragging());
    }

    #[test]
    fn cancel_ends_gesture() {
        let mut state = State::default();
        state.handle(press(HitTarget::Handle));
        let effect = state.handle(Message::Cancelled {
            pointer: PointerId::Mouse,
        });
        assert!(matches!(effect, Effect::Released { cancelled: true, .. }));
        assert_eq!(state, State::Idle);
    }

    #[test]
    fn release_while_idle_is_noop() {
        let mut state = State::default();
        let effect = state.handle(Message::Released {
            pointer: PointerId::Mouse,
        });
        assert_eq!(effect, Effect::None);
    }
}
