// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These are the three platform collaborators of the apply workflow.
//! Infrastructure adapters implement them; tests substitute fakes.
//!
//! # Available Ports
//!
//! - [`gallery`]: Bundled wallpaper images
//! - [`capture`]: Pixels of the rendered window
//! - [`wallpaper`]: Installing a bitmap as the desktop wallpaper
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `image` buffers)
//! - Methods are blocking; callers wrap them in an Iced `Task`
//!   (or `spawn_blocking`) rather than using `async fn`

pub mod capture;
pub mod gallery;
pub mod wallpaper;

pub use capture::ScreenCapture;
pub use gallery::ImageProvider;
pub use wallpaper::WallpaperSink;
