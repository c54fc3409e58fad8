// SPDX-License-Identifier: MPL-2.0
//! Media loading for the comparison layers.

pub mod image;

pub use image::{load_layer, ImageData};

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Which side of the comparison a layer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSide {
    Before,
    After,
}

/// Decodes both layers off the update loop.
///
/// Each side is decoded on its own blocking task so one failure does not
/// hide the other layer.
pub async fn load_pair(before: PathBuf, after: PathBuf) -> (Result<ImageData>, Result<ImageData>) {
    let before = tokio::task::spawn_blocking(move || load_layer(&before));
    let after = tokio::task::spawn_blocking(move || load_layer(&after));

    let before = before.await.map_err(|e| Error::Io(e.to_string())).and_then(|r| r);
    let after = after.await.map_err(|e| Error::Io(e.to_string())).and_then(|r| r);
    (before, after)
}
