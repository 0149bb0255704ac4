// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error types.
//!
//! All variants are `Clone` so they can travel inside iced messages.

use crate::domain::capture::CaptureError;
use crate::domain::wallpaper::WallpaperId;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Image Error: {0}")]
    Image(String),

    #[error("Gallery Error: {0}")]
    Gallery(#[from] GalleryError),

    #[error("Capture Error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Wallpaper Error: {0}")]
    Wallpaper(#[from] WallpaperError),
}

/// Failures of the bundled image provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("Unknown wallpaper {0}")]
    UnknownWallpaper(WallpaperId),

    #[error("Failed to render wallpaper: {0}")]
    Render(String),
}

impl GalleryError {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        "notification-wallpaper-load-error"
    }
}

/// Failures of the wallpaper sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WallpaperError {
    /// The image could not be encoded to PNG.
    #[error("Failed to encode wallpaper: {0}")]
    Encode(String),

    /// The image file could not be written.
    #[error("Failed to write wallpaper: {0}")]
    Io(String),

    /// The PNG was written but the desktop refused to display it.
    #[error("Desktop rejected {}: {message}", path.display())]
    CommandFailed { path: PathBuf, message: String },
}

impl WallpaperError {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            WallpaperError::CommandFailed { .. } => "notification-wallpaper-rejected",
            _ => "notification-wallpaper-error",
        }
    }

    /// Where the image was kept when only the desktop step failed.
    #[must_use]
    pub fn saved_path(&self) -> Option<&Path> {
        match self {
            WallpaperError::CommandFailed { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WallpaperError {
    fn from(err: std::io::Error) -> Self {
        WallpaperError::Io(err.to_string())
    }
}

impl Error {
    /// Returns the i18n message key shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) | Error::Image(_) => "notification-unexpected-error",
            Error::Config(_) => "notification-config-load-error",
            Error::Gallery(err) => err.i18n_key(),
            Error::Capture(err) => err.i18n_key(),
            Error::Wallpaper(err) => err.i18n_key(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
