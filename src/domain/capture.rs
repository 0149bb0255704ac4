// SPDX-License-Identifier: MPL-2.0
//! Capture region mapping.
//!
//! The editing canvas is captured by intersecting its on-screen rectangle
//! with the window rectangle. A region without area is a capture failure:
//! there are no pixels to hand to the wallpaper backend.

use crate::domain::geometry::PixelRect;
use crate::domain::image::InvalidBuffer;
use thiserror::Error;

/// Reasons a screen capture can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// The canvas and the window do not overlap.
    #[error("Capture region is empty")]
    EmptyRegion,
    /// The requested region is not fully inside the captured frame.
    #[error("Capture region {region:?} exceeds frame {frame_width}x{frame_height}")]
    OutOfBounds {
        region: PixelRect,
        frame_width: u32,
        frame_height: u32,
    },
    /// The frame buffer does not match its declared dimensions.
    #[error("Frame buffer has {actual} bytes, expected {expected}")]
    BufferMismatch { expected: usize, actual: usize },
    /// The capture did not complete in time.
    #[error("Capture timed out")]
    TimedOut,
}

impl CaptureError {
    /// Returns the i18n message key shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CaptureError::TimedOut => "notification-capture-timeout",
            _ => "notification-capture-error",
        }
    }
}

impl From<InvalidBuffer> for CaptureError {
    fn from(err: InvalidBuffer) -> Self {
        CaptureError::BufferMismatch {
            expected: err.expected,
            actual: err.actual,
        }
    }
}

/// Axis-aligned intersection of two rectangles.
///
/// The result may be empty (see [`PixelRect::is_empty`]) when the inputs do
/// not overlap.
#[must_use]
pub fn intersect(a: PixelRect, b: PixelRect) -> PixelRect {
    PixelRect {
        left: a.left.max(b.left),
        top: a.top.max(b.top),
        right: a.right.min(b.right),
        bottom: a.bottom.min(b.bottom),
    }
}

/// Computes the region to capture.
///
/// Without a measured canvas the whole window is captured.
///
/// # Errors
///
/// Returns [`CaptureError::EmptyRegion`] when the resulting region has no area.
pub fn capture_region(
    canvas: Option<PixelRect>,
    window: PixelRect,
) -> Result<PixelRect, CaptureError> {
    let region = canvas.map_or(window, |canvas| intersect(canvas, window));
    if region.is_empty() {
        Err(CaptureError::EmptyRegion)
    } else {
        Ok(region)
    }
}
