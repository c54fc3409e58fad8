// SPDX-License-Identifier: MPL-2.0
//! Reveal newtypes.
//!
//! This module provides type-safe wrappers for the comparison divider,
//! ensuring positions are always within valid ranges.

// =============================================================================
// Reveal Bounds
// =============================================================================

/// Divider position bounds (0% to 100%).
pub mod reveal_bounds {
    /// Leftmost divider position.
    pub const MIN_PERCENT: f32 = 0.0;
    /// Rightmost divider position.
    pub const MAX_PERCENT: f32 = 100.0;
    /// Position on attach (midpoint).
    pub const DEFAULT_PERCENT: f32 = 50.0;
}

// =============================================================================
// RevealPercent
// =============================================================================

/// Divider position as a percentage of the track width, guaranteed to be
/// within `[0, 100]`.
///
/// This is the only persistent state of a comparison widget. The clip
/// boundary of the upper layer and the handle offset are both derived from it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RevealPercent(f32);

impl RevealPercent {
    /// Divider at the left edge (upper layer fully visible).
    pub const MIN: Self = Self(reveal_bounds::MIN_PERCENT);
    /// Divider at the right edge (upper layer fully hidden).
    pub const MAX: Self = Self(reveal_bounds::MAX_PERCENT);

    /// Creates a new position, clamping the value to the valid range.
    ///
    /// `NaN` maps to the minimum so no unclamped value can ever be stored.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::MIN;
        }
        Self(percent.clamp(reveal_bounds::MIN_PERCENT, reveal_bounds::MAX_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the position as a fraction of the track (e.g., 50% → 0.5).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }

    /// Projects the position onto a span of `width` units starting at 0.
    #[must_use]
    pub fn offset_in(self, width: f32) -> f32 {
        width * self.as_fraction()
    }

    /// Returns whether the divider is at the left edge.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= reveal_bounds::MIN_PERCENT
    }

    /// Returns whether the divider is at the right edge.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= reveal_bounds::MAX_PERCENT
    }
}

impl Default for RevealPercent {
    fn default() -> Self {
        Self(reveal_bounds::DEFAULT_PERCENT)
    }
}

// =============================================================================
// TrackBounds
// =============================================================================

/// Horizontal extent of the track in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    left: f32,
    right: f32,
}

impl TrackBounds {
    /// Creates bounds from the left and right screen coordinates.
    #[must_use]
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Creates bounds from a left edge and a width.
    #[must_use]
    pub fn from_origin(left: f32, width: f32) -> Self {
        Self::new(left, left + width)
    }

    /// Left edge in screen coordinates.
    #[must_use]
    pub fn left(self) -> f32 {
        self.left
    }

    /// Right edge in screen coordinates.
    #[must_use]
    pub fn right(self) -> f32 {
        self.right
    }

    /// Width of the track (may be zero or negative for degenerate layouts).
    #[must_use]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    /// Returns true if no meaningful ratio can be computed on this track.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !self.left.is_finite() || !self.right.is_finite() || self.width() <= 0.0
    }

    /// Screen x coordinate of the given divider position.
    #[must_use]
    pub fn x_at(self, percent: RevealPercent) -> f32 {
        self.left + percent.offset_in(self.width())
    }
}

// =============================================================================
// PointerId
// =============================================================================

/// Identifies one input stream so a gesture can own it exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    /// The system mouse cursor.
    Mouse,
    /// A touch contact, keyed by the platform finger id.
    Finger(u64),
}

impl PointerId {
    /// Short label used in logs and diagnostics.
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            PointerId::Mouse => "mouse",
            PointerId::Finger(_) => "touch",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
