// SPDX-License-Identifier: MPL-2.0
//! Screen capture backed by a window screenshot.
//!
//! Iced delivers the whole window as an RGBA buffer; this adapter owns that
//! buffer and serves regions of it.

use crate::application::port::ScreenCapture;
use crate::domain::capture::CaptureError;
use crate::domain::geometry::PixelRect;
use crate::domain::image::RawImage;

#[derive(Debug, Clone)]
pub struct ScreenshotCapture {
    frame: RawImage,
}

impl ScreenshotCapture {
    /// Wraps a screenshot buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::BufferMismatch`] if `rgba` is not
    /// `width * height * 4` bytes long.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, CaptureError> {
        Ok(Self {
            frame: RawImage::try_from_rgba(width, height, rgba)?,
        })
    }
}

impl ScreenCapture for ScreenshotCapture {
    fn capture(&self, region: PixelRect) -> Result<RawImage, CaptureError> {
        if region.is_empty() {
            return Err(CaptureError::EmptyRegion);
        }
        self.frame
            .crop(region)
            .ok_or(CaptureError::OutOfBounds {
                region,
                frame_width: self.frame.width(),
                frame_height: self.frame.height(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(width: u32, height: u32) -> ScreenshotCapture {
        ScreenshotCapture::new(width, height, vec![7; (width * height * 4) as usize]).unwrap()
    }

    #[test]
    fn short_buffer_is_rejected() {
        let err = ScreenshotCapture::new(10, 10, vec![0; 12]).unwrap_err();
        assert_eq!(
            err,
            CaptureError::BufferMismatch {
                expected: 400,
                actual: 12
            }
        );
    }

    #[test]
    fn region_inside_frame_is_cropped() {
        let image = capture(100, 50).capture(PixelRect::new(10, 5, 60, 45)).unwrap();
        assert_eq!((image.width(), image.height()), (50, 40));
    }

    #[test]
    fn region_leaving_frame_is_out_of_bounds() {
        let err = capture(100, 50).capture(PixelRect::new(90, 0, 110, 10)).unwrap_err();
        assert!(matches!(err, CaptureError::OutOfBounds { frame_width: 100, .. }));
    }

    #[test]
    fn empty_region_is_rejected() {
        assert_eq!(
            capture(10, 10).capture(PixelRect::new(5, 5, 5, 9)),
            Err(CaptureError::EmptyRegion)
        );
    }
}
