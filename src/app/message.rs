// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::reveal;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Compare(reveal::Message),
    /// Both decode tasks finished.
    LayersLoaded {
        before: Result<ImageData, Error>,
        after: Result<ImageData, Error>,
    },
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_COMPARE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Image shown left of the divider.
    pub before: PathBuf,
    /// Image revealed right of the divider.
    pub after: PathBuf,
}
