// SPDX-License-Identifier: MPL-2.0
//! Screen capture port.

use crate::domain::capture::CaptureError;
use crate::domain::geometry::PixelRect;
use crate::domain::image::RawImage;

/// Produces the pixels currently rendered inside a window region.
pub trait ScreenCapture {
    /// Captures `region`, given in physical window pixels.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] if the region cannot be read.
    fn capture(&self, region: PixelRect) -> Result<RawImage, CaptureError>;
}
