// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`widgets`] - Custom Iced widgets (comparison canvas)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod widgets;
