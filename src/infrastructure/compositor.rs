// SPDX-License-Identifier: MPL-2.0
//! CPU rendering of the glass panel preview.
//!
//! The wallpaper is fitted to the canvas once per canvas size; the glass
//! patch is re-rendered whenever the selection or the style changes:
//!
//! 1. the fitted background is blurred (cached per blur radius),
//! 2. samples near the panel edges are displaced to fake refraction,
//! 3. a white tint is blended in,
//! 4. pixels outside the rounded rectangle are made transparent.

use crate::domain::geometry::Rect;
use crate::domain::image::RawImage;
use crate::domain::style::GlassStyle;
use crate::error::{Error, Result};
use image_rs::imageops::{self, FilterType};
use image_rs::{Rgba, RgbaImage};
use std::collections::HashMap;

/// Fraction of the opacity parameter turned into white tint alpha.
pub const GLASS_TINT_STRENGTH: f32 = 0.5;

/// Blur images kept in memory, one per radius.
const BLUR_CACHE_CAPACITY: usize = 4;

/// Resizes `image` to exactly `width` x `height`, scaling it to cover the
/// target and cropping the overflow around the centre.
///
/// # Errors
///
/// Returns [`Error::Image`] if the source buffer is inconsistent.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fit_cover(image: &RawImage, width: u32, height: u32) -> Result<RgbaImage> {
    let source = to_rgba_image(image)?;
    let (width, height) = (width.max(1), height.max(1));
    let scale = (width as f32 / source.width() as f32).max(height as f32 / source.height() as f32);
    let scaled_width = ((source.width() as f32 * scale).ceil() as u32).max(width);
    let scaled_height = ((source.height() as f32 * scale).ceil() as u32).max(height);

    let scaled = imageops::resize(&source, scaled_width, scaled_height, FilterType::Triangle);
    let x = (scaled_width - width) / 2;
    let y = (scaled_height - height) / 2;
    Ok(imageops::crop_imm(&scaled, x, y, width, height).to_image())
}

fn to_rgba_image(image: &RawImage) -> Result<RgbaImage> {
    RgbaImage::from_raw(image.width(), image.height(), image.rgba_bytes().to_vec())
        .ok_or_else(|| Error::Image("RGBA buffer does not match its size".to_string()))
}

/// Renders glass patches over one fitted background.
#[derive(Debug)]
pub struct GlassCompositor {
    background: RgbaImage,
    blurred: HashMap<u32, RgbaImage>,
}

impl GlassCompositor {
    /// Fits `wallpaper` to a canvas of `width` x `height`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the wallpaper buffer is inconsistent.
    pub fn new(wallpaper: &RawImage, width: u32, height: u32) -> Result<Self> {
        Ok(Self::from_background(fit_cover(wallpaper, width, height)?))
    }

    #[must_use]
    pub fn from_background(background: RgbaImage) -> Self {
        Self {
            background,
            blurred: HashMap::new(),
        }
    }

    /// The fitted background, canvas sized.
    #[must_use]
    pub fn background(&self) -> &RgbaImage {
        &self.background
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.background.dimensions()
    }

    /// Renders the glass patch covering `selection` (canvas coordinates).
    ///
    /// The patch has the selection's size, rounded to whole pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the patch buffer cannot be wrapped.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render_patch(&mut self, selection: Rect, style: &GlassStyle) -> Result<RawImage> {
        let width = selection.width.round().max(1.0) as u32;
        let height = selection.height.round().max(1.0) as u32;
        let origin_x = selection.x;
        let origin_y = selection.y;

        let refraction_height = style.refraction_height.value();
        let refraction_amount = style.refraction_amount.value();
        let tint = style.opacity.value() * GLASS_TINT_STRENGTH;
        let mask = RoundedMask::new(width as f32, height as f32, style.corner_radius.value());

        let source = self.blurred(style.blur_radius.value());
        let max_x = source.width().saturating_sub(1) as f32;
        let max_y = source.height().saturating_sub(1) as f32;

        let patch = RgbaImage::from_fn(width, height, |px, py| {
            let fx = px as f32 + 0.5;
            let fy = py as f32 + 0.5;
            let coverage = mask.coverage(fx, fy);
            if coverage <= 0.0 {
                return Rgba([0, 0, 0, 0]);
            }

            let (dx, dy) = refraction_offset(
                fx,
                fy,
                width as f32,
                height as f32,
                refraction_height,
                refraction_amount,
            );
            let sx = (origin_x + fx + dx).clamp(0.0, max_x) as u32;
            let sy = (origin_y + fy + dy).clamp(0.0, max_y) as u32;
            let Rgba([r, g, b, _]) = *source.get_pixel(sx, sy);

            let tinted = |c: u8| (f32::from(c) * (1.0 - tint) + 255.0 * tint).round() as u8;
            Rgba([
                tinted(r),
                tinted(g),
                tinted(b),
                (coverage * 255.0).round() as u8,
            ])
        });

        let (w, h) = patch.dimensions();
        RawImage::try_from_rgba(w, h, patch.into_raw()).map_err(|err| Error::Image(err.to_string()))
    }

    /// Background blurred with `radius`, computed on first use.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn blurred(&mut self, radius: f32) -> &RgbaImage {
        // Half-pixel steps are enough resolution for the slider.
        let key = (radius.max(0.0) * 2.0).round() as u32;
        if key == 0 {
            return &self.background;
        }
        if !self.blurred.contains_key(&key) && self.blurred.len() >= BLUR_CACHE_CAPACITY {
            self.blurred.clear();
        }
        let background = &self.background;
        self.blurred.entry(key).or_insert_with(|| {
            tracing::trace!(radius, "blurring background");
            imageops::fast_blur(background, key as f32 / 4.0)
        })
    }
}

/// Displacement of the sample for a patch point, along the inward normal of
/// the nearest edge. Zero outside the refraction band.
fn refraction_offset(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    band: f32,
    amount: f32,
) -> (f32, f32) {
    if band <= 0.0 || amount == 0.0 {
        return (0.0, 0.0);
    }
    let candidates = [
        (x, (1.0, 0.0)),
        (width - x, (-1.0, 0.0)),
        (y, (0.0, 1.0)),
        (height - y, (0.0, -1.0)),
    ];
    let (distance, (nx, ny)) = candidates
        .into_iter()
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .unwrap_or((f32::MAX, (0.0, 0.0)));
    if distance >= band {
        return (0.0, 0.0);
    }
    let falloff = 1.0 - distance / band;
    let offset = amount * falloff * falloff;
    (nx * offset, ny * offset)
}

/// Anti-aliased rounded rectangle covering `[0, width] x [0, height]`.
struct RoundedMask {
    width: f32,
    height: f32,
    radius: f32,
}

impl RoundedMask {
    fn new(width: f32, height: f32, radius: f32) -> Self {
        Self {
            width,
            height,
            radius: radius.clamp(0.0, width.min(height) / 2.0),
        }
    }

    /// Coverage of the pixel centred on `(x, y)`, from 0.0 to 1.0.
    fn coverage(&self, x: f32, y: f32) -> f32 {
        let r = self.radius;
        if r <= 0.0 {
            return 1.0;
        }
        let cx = x.clamp(r, self.width - r);
        let cy = y.clamp(r, self.height - r);
        let distance = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
        (r - distance + 0.5).clamp(0.0, 1.0)
    }
}
