// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and editor.
//!
//! The `App` struct wires together the screens, localization, settings and the
//! apply workflow, and translates messages into side effects like wallpaper
//! loading or screen capture.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::apply::ApplySession;
use crate::application::port::ImageProvider;
use crate::domain::wallpaper::WallpaperId;
use crate::i18n::I18n;
use crate::infrastructure::BundledGallery;
use crate::ui::editor::State as EditorState;
use crate::ui::gallery::State as GalleryState;
use crate::ui::notifications;
use crate::ui::theming::AppTheme;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    theme: AppTheme,
    provider: Arc<dyn ImageProvider>,
    gallery: GalleryState,
    editor: Option<EditorState>,
    pending_wallpaper: Option<WallpaperId>,
    apply: ApplySession,
    /// Logical window size, tracked for mapping the canvas onto screenshots.
    window_size: Size,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("apply", &self.apply.phase())
            .field("window_size", &self.window_size)
            .finish()
    }
}

pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Builds the window settings. The window is portrait, like a phone screen.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(mut flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.take(), flags.config_dir.take());

    // iced requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and starts rendering the gallery
    /// thumbnails.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let first_run = config_warning.is_none() && !config::exists();

        let mut app = Self::with_provider(flags.lang, config, Arc::new(BundledGallery::new()));

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if first_run {
            // Write the defaults so the settings file can be discovered and edited.
            if let Err(err) = config::save(&app.config) {
                tracing::warn!(%err, "could not write default settings");
                app.notifications.push(notifications::Notification::warning(
                    "notification-config-save-error",
                ));
            }
        }

        let wallpapers = app.provider.wallpapers();
        let task = update::load_thumbnails(&app.provider, &wallpapers);
        (app, task)
    }

    /// Builds the application around an image provider, without touching
    /// the filesystem.
    fn with_provider(
        lang: Option<String>,
        config: Config,
        provider: Arc<dyn ImageProvider>,
    ) -> Self {
        let i18n = I18n::new(lang, &config);
        let gallery = GalleryState::new(provider.wallpapers());
        let window_size = Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT);
        tracing::info!(wallpapers = gallery.len(), locale = %i18n.current_locale(), "starting");

        Self {
            i18n,
            screen: Screen::Gallery,
            theme: AppTheme::new(config.general.theme_mode),
            config,
            provider,
            gallery,
            editor: None,
            pending_wallpaper: None,
            apply: ApplySession::new(),
            window_size,
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match (&self.screen, &self.editor) {
            (Screen::Editor, Some(editor)) => format!("{} - {app_name}", editor.wallpaper().name),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.to_iced()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            gallery: &mut self.gallery,
            editor: &mut self.editor,
            pending_wallpaper: &mut self.pending_wallpaper,
            apply: &mut self.apply,
            notifications: &mut self.notifications,
            window_size: &mut self.window_size,
            provider: &self.provider,
            config: &self.config,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, &gallery_message)
            }
            Message::Editor(editor_message) => {
                update::handle_editor_message(&mut ctx, editor_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::ThumbnailLoaded { id, result } => {
                update::handle_thumbnail_loaded(&mut ctx, id, result)
            }
            Message::WallpaperLoaded { id, result } => {
                update::handle_wallpaper_loaded(&mut ctx, id, result)
            }
            Message::CaptureRequested(token) => update::handle_capture_requested(&mut ctx, token),
            Message::ScreenshotTaken { token, screenshot } => {
                update::handle_screenshot_taken(&mut ctx, token, &screenshot)
            }
            Message::CaptureTimedOut(token) => update::handle_capture_timed_out(&mut ctx, token),
            Message::WallpaperInstalled { token, result } => {
                update::handle_wallpaper_installed(&mut ctx, token, result)
            }
            Message::WindowResized(size) => {
                *ctx.window_size = size;
                Task::none()
            }
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            gallery: &self.gallery,
            editor: self.editor.as_ref(),
            notifications: &self.notifications,
            apply_pending: self.apply.is_pending(),
            capturing: self.apply.hides_chrome(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::apply::{ApplyError, ApplyPhase, ApplyToken};
    use crate::domain::image::RawImage;
    use crate::error::WallpaperError;
    use crate::ui::editor::{self, CanvasMessage, ToolbarMessage};
    use crate::ui::gallery;
    use iced::{Point, Rectangle};
    use std::path::PathBuf;

    fn app() -> App {
        App::with_provider(
            Some("en-US".to_string()),
            Config::default(),
            Arc::new(BundledGallery::new()),
        )
    }

    fn tiny() -> RawImage {
        RawImage::try_from_rgba(9, 16, vec![200; 9 * 16 * 4]).expect("valid buffer")
    }

    /// Opens the editor on wallpaper 1 with a laid-out canvas.
    fn app_in_editor() -> App {
        let mut app = app();
        let id = WallpaperId::new(1);
        let _ = app.update(Message::Gallery(gallery::Message::Open(id)));
        let _ = app.update(Message::WallpaperLoaded {
            id,
            result: Ok(tiny()),
        });
        let _ = app.update(Message::Editor(editor::Message::Canvas(
            CanvasMessage::BoundsObserved(Rectangle::new(Point::ORIGIN, Size::new(270.0, 480.0))),
        )));
        app
    }

    fn toast_keys(app: &App) -> Vec<&str> {
        app.notifications.visible().map(|n| n.message_key()).collect()
    }

    fn saved_path_arg(app: &App) -> Option<&str> {
        app.notifications
            .visible()
            .flat_map(|n| n.message_args())
            .find(|(name, _)| name == "path")
            .map(|(_, value)| value.as_str())
    }

    /// A screenshot of the default 540x960 window at scale 1.
    fn screenshot(rgba: Vec<u8>) -> window::Screenshot {
        window::Screenshot::new(rgba, Size::new(540, 960), 1.0)
    }

    fn full_frame() -> Vec<u8> {
        vec![255; 540 * 960 * 4]
    }

    fn start_apply(app: &mut App) -> ApplyToken {
        let _ = app.update(Message::Editor(editor::Message::Toolbar(ToolbarMessage::Apply)));
        match app.apply.phase() {
            ApplyPhase::Capturing(token) => token,
            other => panic!("expected capturing phase, got {other:?}"),
        }
    }

    #[test]
    fn starts_on_gallery_with_all_wallpapers() {
        let app = app();
        assert_eq!(app.screen, Screen::Gallery);
        assert_eq!(app.gallery.len(), 5);
        assert!(app.gallery.is_loading());
        assert_eq!(app.title(), "Liquid Glass Wallpapers");
    }

    #[test]
    fn thumbnails_fill_the_gallery() {
        let mut app = app();
        for id in 1..=5 {
            let _ = app.update(Message::ThumbnailLoaded {
                id: WallpaperId::new(id),
                result: Ok(tiny()),
            });
        }
        assert!(!app.gallery.is_loading());
    }

    #[test]
    fn opening_a_wallpaper_shows_the_editor() {
        let app = app_in_editor();
        assert_eq!(app.screen, Screen::Editor);
        let editor = app.editor.as_ref().expect("editor open");
        assert!(editor.selection().rect().is_some());
        assert!(app.title().starts_with("Aurora"));
    }

    #[test]
    fn superseded_wallpaper_load_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery::Message::Open(WallpaperId::new(2))));
        let _ = app.update(Message::Gallery(gallery::Message::Open(WallpaperId::new(4))));

        let _ = app.update(Message::WallpaperLoaded {
            id: WallpaperId::new(2),
            result: Ok(tiny()),
        });
        assert!(app.editor.is_none());
        assert_eq!(app.pending_wallpaper, Some(WallpaperId::new(4)));
    }

    #[test]
    fn failed_wallpaper_load_returns_to_gallery() {
        let mut app = app();
        let id = WallpaperId::new(3);
        let _ = app.update(Message::Gallery(gallery::Message::Open(id)));
        let _ = app.update(Message::WallpaperLoaded {
            id,
            result: Err(crate::error::Error::Image("broken".into())),
        });
        assert_eq!(app.screen, Screen::Gallery);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn apply_hides_chrome_and_rejects_second_request() {
        let mut app = app_in_editor();
        let _token = start_apply(&mut app);
        assert!(app.apply.hides_chrome());

        let _ = app.update(Message::Editor(editor::Message::Toolbar(ToolbarMessage::Apply)));
        assert_eq!(toast_keys(&app), vec!["notification-apply-pending"]);
    }

    #[test]
    fn capture_timeout_aborts_and_keeps_editor_open() {
        let mut app = app_in_editor();
        let token = start_apply(&mut app);

        let _ = app.update(Message::CaptureTimedOut(token));

        assert!(!app.apply.is_pending());
        assert_eq!(app.screen, Screen::Editor);
        assert_eq!(toast_keys(&app), vec!["notification-capture-timeout"]);
    }

    #[test]
    fn successful_install_returns_to_gallery() {
        let mut app = app_in_editor();
        let token = start_apply(&mut app);
        assert!(app.apply.captured(token));

        let _ = app.update(Message::WallpaperInstalled {
            token,
            result: Ok(PathBuf::from("/tmp/liquid-glass.png")),
        });

        assert_eq!(app.screen, Screen::Gallery);
        assert!(app.editor.is_none());
        assert!(!app.apply.is_pending());
        assert_eq!(
            toast_keys(&app),
            vec!["notification-wallpaper-saved", "notification-wallpaper-set"]
        );
        assert_eq!(saved_path_arg(&app), Some("/tmp/liquid-glass.png"));
    }

    #[test]
    fn failed_install_keeps_selection() {
        let mut app = app_in_editor();
        let before = app.editor.as_ref().and_then(|e| e.selection().rect());
        let token = start_apply(&mut app);
        assert!(app.apply.captured(token));

        let _ = app.update(Message::WallpaperInstalled {
            token,
            result: Err(ApplyError::Wallpaper(WallpaperError::CommandFailed {
                path: PathBuf::from("/tmp/liquid-glass.png"),
                message: "exit status 1".into(),
            })),
        });

        assert_eq!(app.screen, Screen::Editor);
        assert_eq!(app.editor.as_ref().and_then(|e| e.selection().rect()), before);
        assert!(!app.apply.is_pending());
        assert_eq!(toast_keys(&app), vec!["notification-wallpaper-rejected"]);
        assert_eq!(saved_path_arg(&app), Some("/tmp/liquid-glass.png"));
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut app = app_in_editor();
        let token = start_apply(&mut app);
        let _ = app.update(Message::CaptureTimedOut(token));
        app.notifications.clear();

        let _ = app.update(Message::WallpaperInstalled {
            token,
            result: Ok(PathBuf::from("/tmp/late.png")),
        });

        assert_eq!(app.screen, Screen::Editor);
        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn late_screenshot_does_not_hijack_next_attempt() {
        let mut app = app_in_editor();
        let first = start_apply(&mut app);
        let _ = app.update(Message::CaptureTimedOut(first));
        let second = start_apply(&mut app);
        app.notifications.clear();

        let _ = app.update(Message::ScreenshotTaken {
            token: first,
            screenshot: screenshot(full_frame()),
        });

        assert_eq!(app.apply.phase(), ApplyPhase::Capturing(second));
        assert_eq!(app.screen, Screen::Editor);
        assert!(toast_keys(&app).is_empty());
    }

    #[test]
    fn canvas_outside_screenshot_fails_the_capture() {
        let mut app = app_in_editor();
        let _ = app.update(Message::Editor(editor::Message::Canvas(
            CanvasMessage::BoundsObserved(Rectangle::new(
                Point::new(600.0, 0.0),
                Size::new(270.0, 480.0),
            )),
        )));
        let token = start_apply(&mut app);

        let _ = app.update(Message::ScreenshotTaken {
            token,
            screenshot: screenshot(full_frame()),
        });

        assert!(!app.apply.is_pending());
        assert_eq!(app.screen, Screen::Editor);
        assert_eq!(toast_keys(&app), vec!["notification-capture-error"]);
    }

    #[test]
    fn truncated_screenshot_fails_the_capture() {
        let mut app = app_in_editor();
        let token = start_apply(&mut app);

        let _ = app.update(Message::ScreenshotTaken {
            token,
            screenshot: screenshot(vec![255; 64]),
        });

        assert!(!app.apply.is_pending());
        assert_eq!(app.screen, Screen::Editor);
        assert!(app.editor.is_some());
        assert_eq!(toast_keys(&app), vec!["notification-capture-error"]);
    }

    #[test]
    fn window_resize_is_tracked() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(400.0, 700.0)));
        assert_eq!(app.window_size, Size::new(400.0, 700.0));
    }
}
