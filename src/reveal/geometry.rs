// SPDX-License-Identifier: MPL-2.0
//! Projection of raw screen coordinates onto the divider track.

use crate::domain::reveal::{RevealPercent, TrackBounds};

/// Converts a raw horizontal screen coordinate into a divider position.
///
/// The coordinate is clamped into the track before the ratio is computed, so
/// input beyond either edge saturates at 0 or 100. When no ratio can be
/// computed (degenerate track or non-finite input) `previous` is returned
/// unchanged.
#[must_use]
pub fn resolve(raw_x: f32, bounds: TrackBounds, previous: RevealPercent) -> RevealPercent {
    if bounds.is_degenerate() || !raw_x.is_finite() {
        return previous;
    }

    let clamped = raw_x.clamp(bounds.left(), bounds.right());
    RevealPercent::new((clamped - bounds.left()) / bounds.width() * 100.0)
}

/// Visual output of one render pass, relative to the track's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOutput {
    /// Left edge of the visible part of the upper layer.
    pub clip_left: f32,
    /// Horizontal center of the handle.
    pub handle_x: f32,
}

impl RevealOutput {
    /// Derives clip boundary and handle offset from the same position.
    #[must_use]
    pub fn at(percent: RevealPercent, width: f32) -> Self {
        let x = percent.offset_in(width.max(0.0));
        Self {
            clip_left: x,
            handle_x: x,
        }
    }
}
