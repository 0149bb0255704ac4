// SPDX-License-Identifier: MPL-2.0
//! Image provider port.

use crate::domain::image::RawImage;
use crate::domain::wallpaper::{Wallpaper, WallpaperId};
use crate::error::GalleryError;

/// Source of the fixed set of wallpapers offered in the gallery.
pub trait ImageProvider: Send + Sync {
    /// Lists the wallpapers, in display order.
    fn wallpapers(&self) -> Vec<Wallpaper>;

    /// Loads a wallpaper at its native size.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::UnknownWallpaper`] for ids not listed by
    /// [`wallpapers`](Self::wallpapers).
    fn load(&self, id: WallpaperId) -> Result<RawImage, GalleryError>;

    /// Loads a wallpaper scaled down for the gallery grid.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    fn thumbnail(&self, id: WallpaperId, width: u32, height: u32)
        -> Result<RawImage, GalleryError>;
}
