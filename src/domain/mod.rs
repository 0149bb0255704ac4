// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so that every
//! rule can be tested without a window or a desktop session.
//!
//! # Modules
//!
//! - [`geometry`]: Coordinate types ([`Rect`](geometry::Rect),
//!   [`CanvasBounds`](geometry::CanvasBounds), [`PixelRect`](geometry::PixelRect))
//! - [`selection`]: Selection drag rules and [`SelectionState`](selection::SelectionState)
//! - [`style`]: Glass style parameters ([`GlassStyle`](style::GlassStyle))
//! - [`capture`]: Capture region mapping and [`CaptureError`](capture::CaptureError)
//! - [`image`]: RGBA bitmaps ([`RawImage`](image::RawImage))
//! - [`wallpaper`]: Gallery entries ([`Wallpaper`](wallpaper::Wallpaper))

pub mod capture;
pub mod geometry;
pub mod image;
pub mod selection;
pub mod style;
pub mod wallpaper;
