// SPDX-License-Identifier: MPL-2.0
pub mod compare_canvas;

pub use compare_canvas::{CompareCanvas, HandleStyle};
