// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Glass style bounds live next to their newtypes in
//! [`crate::domain::style::newtypes`]; this module covers the rest.

// ==========================================================================
// Capture Defaults
// ==========================================================================

/// Delay between hiding the editor chrome and taking the screenshot.
///
/// Leaves time for at least two frames without chrome to be presented.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 50;

/// Minimum settle delay.
pub const MIN_SETTLE_DELAY_MS: u64 = 0;

/// Maximum settle delay.
pub const MAX_SETTLE_DELAY_MS: u64 = 1000;

/// Default time allowed for a capture before it is abandoned.
pub const DEFAULT_CAPTURE_TIMEOUT_SECS: u64 = 10;

/// Minimum capture timeout.
pub const MIN_CAPTURE_TIMEOUT_SECS: u64 = 1;

/// Maximum capture timeout.
pub const MAX_CAPTURE_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window size, a portrait phone-like aspect.
pub const DEFAULT_WINDOW_WIDTH: f32 = 540.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 960.0;

/// Size at which the gallery is rendered as thumbnails.
pub const THUMBNAIL_WIDTH: u32 = 216;
pub const THUMBNAIL_HEIGHT: u32 = 384;
