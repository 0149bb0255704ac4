// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::apply::{ApplyError, ApplyToken};
use crate::domain::image::RawImage;
use crate::domain::wallpaper::WallpaperId;
use crate::error::Error;
use crate::ui::editor;
use crate::ui::gallery;
use crate::ui::notifications;
use iced::{window, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Editor(editor::Message),
    Notification(notifications::NotificationMessage),
    /// A gallery thumbnail finished rendering.
    ThumbnailLoaded {
        id: WallpaperId,
        result: Result<RawImage, Error>,
    },
    /// The full resolution wallpaper for the editor is ready.
    WallpaperLoaded {
        id: WallpaperId,
        result: Result<RawImage, Error>,
    },
    /// The settle delay elapsed; the chrome-free frame can be captured.
    CaptureRequested(ApplyToken),
    /// The window screenshot for an apply attempt arrived.
    ScreenshotTaken {
        token: ApplyToken,
        screenshot: window::Screenshot,
    },
    /// The capture timeout of an apply attempt fired.
    CaptureTimedOut(ApplyToken),
    /// The wallpaper sink finished.
    WallpaperInstalled {
        token: ApplyToken,
        result: Result<PathBuf, ApplyError>,
    },
    WindowResized(Size),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for saved wallpapers).
    /// Takes precedence over `LIQUID_GLASS_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LIQUID_GLASS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
