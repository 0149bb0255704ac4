// SPDX-License-Identifier: MPL-2.0
//! Desktop wallpaper sink.
//!
//! The captured image is written as a timestamped PNG, then handed to the
//! `wallpaper` crate, which knows how each desktop (GNOME, KDE, XFCE, MATE,
//! LXDE, Deepin, macOS, Windows, ...) sets its background. The PNG is kept
//! even when the desktop refuses it, so the user can set it by hand.

use crate::application::port::WallpaperSink;
use crate::domain::image::RawImage;
use crate::error::WallpaperError;
use image_rs::{ImageFormat, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Displays an image file as the desktop background.
pub type DesktopBackend = fn(&Path) -> Result<(), String>;

/// Asks the running desktop to display `path`.
pub fn set_desktop_wallpaper(path: &Path) -> Result<(), String> {
    let path = path.to_str().ok_or_else(|| "path is not valid UTF-8".to_string())?;
    wallpaper::set_from_path(path).map_err(|err| err.to_string())
}

/// Name of the PNG written for an apply at `now`.
#[must_use]
pub fn wallpaper_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!("liquid-glass-{}.png", now.format("%Y%m%d-%H%M%S-%3f"))
}

/// [`WallpaperSink`] writing PNG files and installing them on the desktop.
#[derive(Debug, Clone)]
pub struct DesktopWallpaperSink {
    output_dir: PathBuf,
    backend: DesktopBackend,
}

impl DesktopWallpaperSink {
    /// Creates a sink for the running desktop.
    #[must_use]
    pub fn new(output_dir: PathBuf) -> Self {
        Self::with_backend(output_dir, set_desktop_wallpaper)
    }

    #[must_use]
    pub fn with_backend(output_dir: PathBuf, backend: DesktopBackend) -> Self {
        Self {
            output_dir,
            backend,
        }
    }

    /// Encodes `image` as PNG in the output directory.
    ///
    /// # Errors
    ///
    /// Returns [`WallpaperError::Io`] or [`WallpaperError::Encode`].
    pub fn save_png(&self, image: &RawImage) -> Result<PathBuf, WallpaperError> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self
            .output_dir
            .join(wallpaper_file_name(chrono::Local::now()));

        let buffer =
            RgbaImage::from_raw(image.width(), image.height(), image.rgba_bytes().to_vec())
                .ok_or_else(|| {
                    WallpaperError::Encode("RGBA buffer does not match its size".to_string())
                })?;
        buffer
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|err| WallpaperError::Encode(err.to_string()))?;

        // Desktop tools resolve relative paths against their own cwd.
        Ok(fs::canonicalize(&path).unwrap_or(path))
    }
}

impl WallpaperSink for DesktopWallpaperSink {
    fn set_wallpaper(&self, image: &RawImage) -> Result<PathBuf, WallpaperError> {
        let path = self.save_png(image)?;
        tracing::info!(path = %path.display(), "setting wallpaper");
        (self.backend)(&path).map_err(|message| WallpaperError::CommandFailed {
            path: path.clone(),
            message,
        })?;
        Ok(path)
    }
}
