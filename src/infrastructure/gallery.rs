// SPDX-License-Identifier: MPL-2.0
//! Bundled wallpapers.
//!
//! The five gallery wallpapers are painted procedurally (a vertical gradient
//! with soft light blobs), so they are resolution independent and the binary
//! carries no image files. Painting is deterministic.

use crate::application::port::ImageProvider;
use crate::domain::image::RawImage;
use crate::domain::wallpaper::{Wallpaper, WallpaperId};
use crate::error::GalleryError;
use image_rs::{Rgba, RgbaImage};

/// Native size of the bundled wallpapers.
pub const NATIVE_WIDTH: u32 = 1080;
pub const NATIVE_HEIGHT: u32 = 1920;

type Rgb = [f32; 3];

/// Soft radial highlight, in normalized coordinates.
struct Blob {
    cx: f32,
    cy: f32,
    radius: f32,
    color: Rgb,
    strength: f32,
}

struct Palette {
    name: &'static str,
    top: Rgb,
    bottom: Rgb,
    blobs: &'static [Blob],
}

const PALETTES: [Palette; 5] = [
    Palette {
        name: "Aurora",
        top: [0.04, 0.09, 0.22],
        bottom: [0.02, 0.35, 0.38],
        blobs: &[
            Blob { cx: 0.25, cy: 0.30, radius: 0.45, color: [0.30, 0.95, 0.70], strength: 0.55 },
            Blob { cx: 0.80, cy: 0.55, radius: 0.35, color: [0.55, 0.40, 1.00], strength: 0.45 },
        ],
    },
    Palette {
        name: "Sunset",
        top: [0.98, 0.55, 0.25],
        bottom: [0.45, 0.10, 0.35],
        blobs: &[
            Blob { cx: 0.50, cy: 0.62, radius: 0.30, color: [1.00, 0.90, 0.55], strength: 0.70 },
            Blob { cx: 0.15, cy: 0.20, radius: 0.40, color: [1.00, 0.35, 0.45], strength: 0.35 },
        ],
    },
    Palette {
        name: "Lagoon",
        top: [0.55, 0.90, 0.95],
        bottom: [0.00, 0.40, 0.60],
        blobs: &[
            Blob { cx: 0.70, cy: 0.25, radius: 0.35, color: [1.00, 1.00, 1.00], strength: 0.45 },
            Blob { cx: 0.30, cy: 0.80, radius: 0.45, color: [0.00, 0.75, 0.65], strength: 0.50 },
        ],
    },
    Palette {
        name: "Dune",
        top: [0.95, 0.85, 0.65],
        bottom: [0.70, 0.42, 0.25],
        blobs: &[
            Blob { cx: 0.20, cy: 0.70, radius: 0.50, color: [0.85, 0.55, 0.30], strength: 0.50 },
            Blob { cx: 0.85, cy: 0.15, radius: 0.25, color: [1.00, 0.97, 0.85], strength: 0.60 },
        ],
    },
    Palette {
        name: "Nebula",
        top: [0.08, 0.02, 0.15],
        bottom: [0.20, 0.05, 0.30],
        blobs: &[
            Blob { cx: 0.60, cy: 0.40, radius: 0.40, color: [0.95, 0.30, 0.70], strength: 0.55 },
            Blob { cx: 0.25, cy: 0.65, radius: 0.30, color: [0.30, 0.50, 1.00], strength: 0.50 },
            Blob { cx: 0.80, cy: 0.85, radius: 0.20, color: [1.00, 0.80, 0.40], strength: 0.40 },
        ],
    },
];

/// Gallery of the built-in wallpapers, ids 1 to 5.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledGallery;

impl BundledGallery {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn palette(id: WallpaperId) -> Result<&'static Palette, GalleryError> {
        usize::try_from(id.value())
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| PALETTES.get(index))
            .ok_or(GalleryError::UnknownWallpaper(id))
    }
}

impl ImageProvider for BundledGallery {
    fn wallpapers(&self) -> Vec<Wallpaper> {
        (1u32..)
            .zip(PALETTES.iter())
            .map(|(id, palette)| Wallpaper {
                id: WallpaperId::new(id),
                name: palette.name.to_string(),
                width: NATIVE_WIDTH,
                height: NATIVE_HEIGHT,
            })
            .collect()
    }

    fn load(&self, id: WallpaperId) -> Result<RawImage, GalleryError> {
        self.thumbnail(id, NATIVE_WIDTH, NATIVE_HEIGHT)
    }

    fn thumbnail(
        &self,
        id: WallpaperId,
        width: u32,
        height: u32,
    ) -> Result<RawImage, GalleryError> {
        let palette = Self::palette(id)?;
        let painted = paint(palette, width.max(1), height.max(1));
        let (w, h) = painted.dimensions();
        RawImage::try_from_rgba(w, h, painted.into_raw())
            .map_err(|err| GalleryError::Render(err.to_string()))
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn paint(palette: &Palette, width: u32, height: u32) -> RgbaImage {
    let aspect = width as f32 / height as f32;
    RgbaImage::from_fn(width, height, |x, y| {
        let u = (x as f32 + 0.5) / width as f32;
        let v = (y as f32 + 0.5) / height as f32;

        let mut color = lerp(palette.top, palette.bottom, smoothstep(v));
        for blob in palette.blobs {
            // Distances measured in height units keep blobs round.
            let dx = (u - blob.cx) * aspect;
            let dy = v - blob.cy;
            let falloff = (1.0 - (dx * dx + dy * dy).sqrt() / blob.radius).max(0.0);
            let weight = falloff * falloff * blob.strength;
            color = lerp(color, blob.color, weight);
        }

        let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        Rgba([r, g, b, 255])
    })
}

fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
