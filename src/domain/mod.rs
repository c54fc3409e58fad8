// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`reveal`]: Comparison divider types ([`RevealPercent`](reveal::RevealPercent),
//!   [`TrackBounds`](reveal::TrackBounds), [`PointerId`](reveal::PointerId))

pub mod diagnostics;
pub mod reveal;
