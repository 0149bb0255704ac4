// SPDX-License-Identifier: MPL-2.0
//! Gallery entries.

use std::fmt;

/// Identifier of a bundled wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallpaperId(u32);

impl WallpaperId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WallpaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A wallpaper offered by the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallpaper {
    pub id: WallpaperId,
    /// Display name shown under the thumbnail.
    pub name: String,
    /// Native size in pixels.
    pub width: u32,
    pub height: u32,
}
