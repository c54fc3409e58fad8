// SPDX-License-Identifier: MPL-2.0
//! `iced_compare` is an interactive before/after image comparison built with
//! the Iced GUI framework.
//!
//! The interaction engine lives in [`reveal`]: a gesture state machine, a
//! geometry resolver and a render coalescer that commits at most one divider
//! position per frame. [`ui::widgets::compare_canvas`] draws it and
//! [`app`] wires it to configuration, localization and logging.

pub mod app;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod reveal;
pub mod ui;
