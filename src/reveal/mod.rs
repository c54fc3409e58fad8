// SPDX-License-Identifier: MPL-2.0
//! Interaction engine for the before/after comparison widget.
//!
//! Each piece has a single job; data flows one way through them.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── gesture    - Idle/Dragging machine, pointer ownership
//!     ├── coalescer  - Latest-wins buffer, one tick outstanding
//!     │     ├── slot       - Capacity-1 pending value
//!     │     └── scheduler  - Frame tick source (iced frames / manual)
//!     └── geometry   - Raw x → clamped percent, visual output
//! ```

pub mod coalescer;
pub mod component;
pub mod geometry;
pub mod gesture;
pub mod scheduler;
pub mod slot;

pub use component::{Effect, Layers, Message, State};
pub use geometry::{resolve, RevealOutput};
pub use gesture::HitTarget;
pub use scheduler::{FrameScheduler, ManualScheduler, NextFrame};
