// SPDX-License-Identifier: MPL-2.0
//! Comparison reveal domain types.
//!
//! This module contains the value objects shared by the reveal engine,
//! independent of any presentation framework.

pub mod newtypes;

pub use newtypes::{reveal_bounds, PointerId, RevealPercent, TrackBounds};
