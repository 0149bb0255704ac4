// SPDX-License-Identifier: MPL-2.0
//! `liquid_glass` is a wallpaper gallery built with the Iced GUI framework.
//!
//! A wallpaper is opened in an editor where a rounded "liquid glass" pane can
//! be dragged and resized over it. Applying captures the composed canvas and
//! installs it as the desktop wallpaper.
//!
//! Layers:
//!
//! - [`domain`] - selection geometry, glass style and capture rules
//! - [`application`] - ports and the apply use case
//! - [`infrastructure`] - bundled images, compositing, screenshot cropping and
//!   desktop integration
//! - [`ui`] and [`app`] - Iced screens and the application loop

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;
