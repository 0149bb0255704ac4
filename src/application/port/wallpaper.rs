// SPDX-License-Identifier: MPL-2.0
//! Wallpaper sink port.

use crate::domain::image::RawImage;
use crate::error::WallpaperError;
use std::path::PathBuf;

/// Installs a bitmap as the desktop wallpaper.
pub trait WallpaperSink: Send + Sync {
    /// Sets `image` as the wallpaper. Returns where the image was stored.
    ///
    /// # Errors
    ///
    /// Returns a [`WallpaperError`] if the image could not be stored or the
    /// desktop rejected it.
    fn set_wallpaper(&self, image: &RawImage) -> Result<PathBuf, WallpaperError>;
}
