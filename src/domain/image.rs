// SPDX-License-Identifier: MPL-2.0
//! Framework-independent RGBA bitmaps.

use crate::domain::geometry::PixelRect;
use std::sync::Arc;
use thiserror::Error;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Buffer length does not match the declared dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("RGBA data length mismatch: expected {expected}, got {actual}")]
pub struct InvalidBuffer {
    pub expected: usize,
    pub actual: usize,
}

/// Raw RGBA image data.
///
/// The presentation layer converts this to `iced::widget::image::Handle`;
/// infrastructure converts it to `image::RgbaImage` for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Wraps owned RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBuffer`] if the length is not `width * height * 4`.
    pub fn try_from_rgba(
        width: u32,
        height: u32,
        rgba_bytes: Vec<u8>,
    ) -> Result<Self, InvalidBuffer> {
        let expected = expected_len(width, height);
        if rgba_bytes.len() != expected {
            return Err(InvalidBuffer {
                expected,
                actual: rgba_bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Shared handle to the pixel data, for cheap hand-off to renderers.
    #[must_use]
    pub fn rgba_bytes_arc(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.rgba_bytes)
    }

    #[must_use]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::from_size(self.width, self.height)
    }

    /// Copies the pixels of `region`.
    ///
    /// Returns `None` when the region is empty or not fully inside the image.
    #[must_use]
    pub fn crop(&self, region: PixelRect) -> Option<RawImage> {
        let frame = self.bounds();
        if region.is_empty()
            || region.left < frame.left
            || region.top < frame.top
            || region.right > frame.right
            || region.bottom > frame.bottom
        {
            return None;
        }

        let width = u32::try_from(region.width()).ok()?;
        let height = u32::try_from(region.height()).ok()?;
        let left = usize::try_from(region.left).ok()?;
        let top = usize::try_from(region.top).ok()?;
        let stride = self.width as usize * BYTES_PER_PIXEL;
        let row_len = width as usize * BYTES_PER_PIXEL;

        let mut out = Vec::with_capacity(expected_len(width, height));
        for row in top..top + height as usize {
            let start = row * stride + left * BYTES_PER_PIXEL;
            out.extend_from_slice(&self.rgba_bytes[start..start + row_len]);
        }
        RawImage::try_from_rgba(width, height, out).ok()
    }
}

fn expected_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x3 image whose red channel encodes the pixel index.
    fn indexed() -> RawImage {
        let bytes = (0u8..12).flat_map(|i| [i, 0, 0, 255]).collect();
        RawImage::try_from_rgba(4, 3, bytes).unwrap()
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let err = RawImage::try_from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            InvalidBuffer {
                expected: 16,
                actual: 15
            }
        );
        assert_eq!(
            err.to_string(),
            "RGBA data length mismatch: expected 16, got 15"
        );
    }

    #[test]
    fn crop_copies_rows() {
        let cropped = indexed().crop(PixelRect::new(1, 1, 3, 3)).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (2, 2));
        let reds: Vec<u8> = cropped.rgba_bytes().chunks(4).map(|p| p[0]).collect();
        assert_eq!(reds, vec![5, 6, 9, 10]);
    }

    #[test]
    fn crop_of_full_frame_is_identity() {
        let image = indexed();
        assert_eq!(image.crop(image.bounds()), Some(image));
    }

    #[test]
    fn crop_rejects_outside_or_empty_regions() {
        let image = indexed();
        assert!(image.crop(PixelRect::new(-1, 0, 2, 2)).is_none());
        assert!(image.crop(PixelRect::new(0, 0, 5, 2)).is_none());
        assert!(image.crop(PixelRect::new(2, 2, 2, 3)).is_none());
    }
}
