// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The apply workflow lives here: it spans several messages (settle delay,
//! screenshot, timeout, sink result) tied together by an [`ApplyToken`].

use super::config::{Config, THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
use super::{Message, Screen};
use crate::application::apply::{
    install_region, physical_region, ApplyError, ApplyPhase, ApplySession, ApplyToken,
};
use crate::application::port::ImageProvider;
use crate::domain::capture::CaptureError;
use crate::domain::image::RawImage;
use crate::domain::wallpaper::{Wallpaper, WallpaperId};
use crate::error::{Error, WallpaperError};
use crate::infrastructure::{DesktopWallpaperSink, ScreenshotCapture};
use crate::ui::editor::{self, Event as EditorEvent, State as EditorState};
use crate::ui::gallery::{self, Event as GalleryEvent, State as GalleryState};
use crate::ui::notifications::{self, Notification};
use iced::{window, Size, Task};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Toasts carrying a file path stay up long enough to read it.
const SAVED_PATH_LIFETIME: Duration = Duration::from_secs(8);

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub gallery: &'a mut GalleryState,
    pub editor: &'a mut Option<EditorState>,
    /// Wallpaper whose full resolution image is being loaded for the editor.
    pub pending_wallpaper: &'a mut Option<WallpaperId>,
    pub apply: &'a mut ApplySession,
    pub notifications: &'a mut notifications::Manager,
    pub window_size: &'a mut Size,
    pub provider: &'a Arc<dyn ImageProvider>,
    pub config: &'a Config,
}

/// Renders every gallery thumbnail on the blocking pool.
pub fn load_thumbnails(
    provider: &Arc<dyn ImageProvider>,
    wallpapers: &[Wallpaper],
) -> Task<Message> {
    Task::batch(wallpapers.iter().map(|wallpaper| {
        let id = wallpaper.id;
        let provider = Arc::clone(provider);
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    provider
                        .thumbnail(id, THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT)
                        .map_err(Error::from)
                })
                .await
                .map_err(|e| Error::Io(e.to_string()))?
            },
            move |result| Message::ThumbnailLoaded { id, result },
        )
    }))
}

fn load_wallpaper(provider: &Arc<dyn ImageProvider>, id: WallpaperId) -> Task<Message> {
    let provider = Arc::clone(provider);
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || provider.load(id).map_err(Error::from))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
        },
        move |result| Message::WallpaperLoaded { id, result },
    )
}

pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    id: WallpaperId,
    result: Result<RawImage, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            ctx.gallery.set_thumbnail(id, &image);
        }
        Err(err) => {
            tracing::warn!(%id, %err, "thumbnail failed");
            ctx.notifications.push(Notification::error(err.i18n_key()));
        }
    }
    Task::none()
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: &gallery::Message,
) -> Task<Message> {
    match ctx.gallery.update(message) {
        GalleryEvent::OpenEditor(id) => {
            *ctx.screen = Screen::Editor;
            *ctx.editor = None;
            *ctx.pending_wallpaper = Some(id);
            load_wallpaper(ctx.provider, id)
        }
    }
}

pub fn handle_wallpaper_loaded(
    ctx: &mut UpdateContext<'_>,
    id: WallpaperId,
    result: Result<RawImage, Error>,
) -> Task<Message> {
    if *ctx.pending_wallpaper != Some(id) {
        tracing::debug!(%id, "discarding wallpaper for a closed editor");
        return Task::none();
    }
    *ctx.pending_wallpaper = None;

    let wallpaper = ctx.gallery.wallpaper(id).cloned();
    match (result, wallpaper) {
        (Ok(image), Some(wallpaper)) => {
            *ctx.editor = Some(EditorState::new(wallpaper, image, ctx.config.glass.style()));
        }
        (Err(err), _) => {
            tracing::warn!(%id, %err, "wallpaper failed to load");
            ctx.notifications.push(Notification::error(err.i18n_key()));
            return_to_gallery(ctx);
        }
        (Ok(_), None) => {
            ctx.notifications
                .push(Notification::error("notification-wallpaper-load-error"));
            return_to_gallery(ctx);
        }
    }
    Task::none()
}

pub fn handle_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: editor::Message,
) -> Task<Message> {
    let Some(editor_state) = ctx.editor.as_mut() else {
        return Task::none();
    };

    match editor_state.update(message) {
        EditorEvent::None => Task::none(),
        EditorEvent::BackToGallery => {
            if !ctx.apply.is_pending() {
                return_to_gallery(ctx);
            }
            Task::none()
        }
        EditorEvent::ApplyRequested => start_apply(ctx),
        EditorEvent::RenderFailed(err) => {
            ctx.notifications.push(Notification::error(err.i18n_key()));
            Task::none()
        }
    }
}

fn return_to_gallery(ctx: &mut UpdateContext<'_>) {
    *ctx.screen = Screen::Gallery;
    *ctx.editor = None;
    *ctx.pending_wallpaper = None;
}

/// Starts an apply attempt: hide the chrome, wait for a clean frame, and arm
/// the capture timeout.
pub fn start_apply(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let token = match ctx.apply.begin() {
        Ok(token) => token,
        Err(err) => {
            ctx.notifications.push(Notification::warning(err.i18n_key()));
            return Task::none();
        }
    };
    tracing::info!(?token, "applying wallpaper");

    let settle = ctx.config.capture.settle_delay();
    let timeout = ctx.config.capture.timeout();
    Task::batch([
        Task::perform(async move { tokio::time::sleep(settle).await }, move |()| {
            Message::CaptureRequested(token)
        }),
        Task::perform(async move { tokio::time::sleep(timeout).await }, move |()| {
            Message::CaptureTimedOut(token)
        }),
    ])
}

pub fn handle_capture_requested(ctx: &mut UpdateContext<'_>, token: ApplyToken) -> Task<Message> {
    if ctx.apply.phase() != ApplyPhase::Capturing(token) {
        return Task::none();
    }
    window::latest()
        .and_then(window::screenshot)
        .map(move |screenshot| Message::ScreenshotTaken { token, screenshot })
}

pub fn handle_screenshot_taken(
    ctx: &mut UpdateContext<'_>,
    token: ApplyToken,
    screenshot: &window::Screenshot,
) -> Task<Message> {
    if !ctx.apply.captured(token) {
        tracing::debug!(?token, "discarding late screenshot");
        return Task::none();
    }

    let (width, height) = (screenshot.size.width, screenshot.size.height);
    let canvas = ctx.editor.as_ref().and_then(EditorState::canvas_rect);
    let window_size = (ctx.window_size.width, ctx.window_size.height);

    let region = match physical_region(canvas, window_size, width, height) {
        Ok(region) => region,
        Err(err) => return fail(ctx, token, err.into()),
    };
    let capture = match ScreenshotCapture::new(width, height, screenshot.rgba.to_vec()) {
        Ok(capture) => capture,
        Err(err) => return fail(ctx, token, err.into()),
    };
    let sink = DesktopWallpaperSink::new(output_dir(ctx.config));

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || install_region(&capture, &sink, region))
                .await
                .map_err(|e| ApplyError::Wallpaper(WallpaperError::Io(e.to_string())))?
        },
        move |result| Message::WallpaperInstalled { token, result },
    )
}

pub fn handle_capture_timed_out(ctx: &mut UpdateContext<'_>, token: ApplyToken) -> Task<Message> {
    if ctx.apply.timed_out(token) {
        report_failure(ctx, &ApplyError::Capture(CaptureError::TimedOut));
    }
    Task::none()
}

pub fn handle_wallpaper_installed(
    ctx: &mut UpdateContext<'_>,
    token: ApplyToken,
    result: Result<PathBuf, ApplyError>,
) -> Task<Message> {
    if !ctx.apply.finish(token) {
        return Task::none();
    }

    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "wallpaper set");
            ctx.notifications.clear_errors();
            ctx.notifications
                .push(Notification::success("notification-wallpaper-set"));
            ctx.notifications.push(
                Notification::info("notification-wallpaper-saved")
                    .with_arg("path", path.display().to_string())
                    .auto_dismiss(SAVED_PATH_LIFETIME),
            );
            return_to_gallery(ctx);
        }
        Err(err) => report_failure(ctx, &err),
    }
    Task::none()
}

fn fail(ctx: &mut UpdateContext<'_>, token: ApplyToken, err: ApplyError) -> Task<Message> {
    ctx.apply.finish(token);
    report_failure(ctx, &err);
    Task::none()
}

fn report_failure(ctx: &mut UpdateContext<'_>, err: &ApplyError) {
    tracing::warn!(%err, "apply failed");
    let mut notification = Notification::error(err.i18n_key());
    if let Some(path) = err.saved_path() {
        notification = notification
            .with_arg("path", path.display().to_string())
            .auto_dismiss(SAVED_PATH_LIFETIME);
    }
    ctx.notifications.push(notification);
}

fn output_dir(config: &Config) -> PathBuf {
    config
        .wallpaper
        .resolved_output_dir()
        .unwrap_or_else(std::env::temp_dir)
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}
