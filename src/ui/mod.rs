// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Grid of wallpaper thumbnails
//! - [`editor`] - Wallpaper with the draggable glass pane and its controls
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod editor;
pub mod gallery;
pub mod notifications;
pub mod styles;
pub mod theming;
