// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Handle**: Divider line and knob geometry
//! - **Display**: Caption visibility

use crate::ui::design_tokens::sizing;

// ==========================================================================
// Handle Defaults
// ==========================================================================

/// Default divider line width (logical pixels).
pub const DEFAULT_LINE_WIDTH: f32 = sizing::DIVIDER_LINE;

/// Minimum divider line width.
pub const MIN_LINE_WIDTH: f32 = 1.0;

/// Maximum divider line width.
pub const MAX_LINE_WIDTH: f32 = 12.0;

/// Default knob radius (logical pixels).
pub const DEFAULT_KNOB_RADIUS: f32 = sizing::HANDLE_KNOB_RADIUS;

/// Minimum knob radius.
pub const MIN_KNOB_RADIUS: f32 = 6.0;

/// Maximum knob radius.
pub const MAX_KNOB_RADIUS: f32 = 48.0;

/// Default extra grab distance around the line, on each side.
pub const DEFAULT_HIT_SLOP: f32 = sizing::HANDLE_HIT_SLOP;

/// Minimum grab distance.
pub const MIN_HIT_SLOP: f32 = 0.0;

/// Maximum grab distance.
pub const MAX_HIT_SLOP: f32 = 32.0;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Whether "Before"/"After" captions are shown by default.
pub const DEFAULT_SHOW_LABELS: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_LINE_WIDTH <= DEFAULT_LINE_WIDTH && DEFAULT_LINE_WIDTH <= MAX_LINE_WIDTH);
    assert!(MIN_KNOB_RADIUS <= DEFAULT_KNOB_RADIUS && DEFAULT_KNOB_RADIUS <= MAX_KNOB_RADIUS);
    assert!(MIN_HIT_SLOP <= DEFAULT_HIT_SLOP && DEFAULT_HIT_SLOP <= MAX_HIT_SLOP);
};
