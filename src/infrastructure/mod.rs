// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, plus the CPU glass renderer.
//!
//! # Available Adapters
//!
//! - [`gallery`]: Procedurally painted wallpapers (implements [`ImageProvider`])
//! - [`screenshot_capture`]: Regions of a window screenshot (implements [`ScreenCapture`])
//! - [`wallpaper`]: PNG output handed to the desktop (implements [`WallpaperSink`])
//! - [`compositor`]: Glass panel preview rendering
//!
//! [`ImageProvider`]: crate::application::port::ImageProvider
//! [`ScreenCapture`]: crate::application::port::ScreenCapture
//! [`WallpaperSink`]: crate::application::port::WallpaperSink

pub mod compositor;
pub mod gallery;
pub mod screenshot_capture;
pub mod wallpaper;

pub use compositor::GlassCompositor;
pub use gallery::BundledGallery;
pub use screenshot_capture::ScreenshotCapture;
pub use wallpaper::DesktopWallpaperSink;
