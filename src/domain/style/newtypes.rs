// SPDX-License-Identifier: MPL-2.0
//! Glass style newtypes.
//!
//! Each parameter of the glass effect is a value object that is always within
//! its valid range. Clamping happens on construction, which is the input
//! boundary (slider values, config files).

// =============================================================================
// Bounds
// =============================================================================

/// Blur radius bounds (0 to 50 logical pixels).
pub mod blur_bounds {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 50.0;
    pub const DEFAULT: f32 = 24.0;
}

/// Tint opacity bounds (0.0 to 1.0).
pub mod opacity_bounds {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 1.0;
    pub const DEFAULT: f32 = 0.45;
}

/// Refraction band height bounds (0 to 50 logical pixels).
pub mod refraction_height_bounds {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 50.0;
    pub const DEFAULT: f32 = 32.0;
}

/// Refraction displacement bounds (-50 to 0 logical pixels).
///
/// Negative values pull content from outside the panel inwards.
pub mod refraction_amount_bounds {
    pub const MIN: f32 = -50.0;
    pub const MAX: f32 = 0.0;
    pub const DEFAULT: f32 = -40.0;
}

/// Corner radius bounds (0 to 50 logical pixels).
pub mod corner_radius_bounds {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 50.0;
    pub const DEFAULT: f32 = 24.0;
}

/// Clamps and maps NaN to the default so a bad config cannot poison rendering.
fn sanitize(value: f32, min: f32, max: f32, default: f32) -> f32 {
    if value.is_nan() {
        default
    } else {
        value.clamp(min, max)
    }
}

macro_rules! style_newtype {
    ($(#[$meta:meta])* $name:ident, $bounds:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            /// Creates the value, clamping it to the valid range.
            #[must_use]
            pub fn new(value: f32) -> Self {
                Self(sanitize(
                    value,
                    $bounds::MIN,
                    $bounds::MAX,
                    $bounds::DEFAULT,
                ))
            }

            /// Returns the raw value.
            #[must_use]
            pub fn value(self) -> f32 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($bounds::DEFAULT)
            }
        }
    };
}

style_newtype!(
    /// Gaussian-like blur radius applied under the glass, in logical pixels.
    BlurRadius,
    blur_bounds
);

style_newtype!(
    /// Opacity of the white tint layer drawn on the glass.
    GlassOpacity,
    opacity_bounds
);

style_newtype!(
    /// Width of the band along the edges where light is refracted.
    RefractionHeight,
    refraction_height_bounds
);

style_newtype!(
    /// Displacement applied at the outer edge of the refraction band.
    RefractionAmount,
    refraction_amount_bounds
);

style_newtype!(
    /// Radius of the rounded corners of the glass panel.
    CornerRadius,
    corner_radius_bounds
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        assert_eq!(BlurRadius::default().value(), 24.0);
        assert_eq!(GlassOpacity::default().value(), 0.45);
        assert_eq!(RefractionHeight::default().value(), 32.0);
        assert_eq!(RefractionAmount::default().value(), -40.0);
        assert_eq!(CornerRadius::default().value(), 24.0);
    }

    #[test]
    fn values_are_clamped_to_range() {
        assert_eq!(BlurRadius::new(80.0).value(), blur_bounds::MAX);
        assert_eq!(GlassOpacity::new(-0.5).value(), opacity_bounds::MIN);
        assert_eq!(RefractionHeight::new(12.5).value(), 12.5);
        assert_eq!(RefractionAmount::new(10.0).value(), refraction_amount_bounds::MAX);
        assert_eq!(RefractionAmount::new(-99.0).value(), refraction_amount_bounds::MIN);
        assert_eq!(CornerRadius::new(51.0).value(), corner_radius_bounds::MAX);
    }

    #[test]
    fn nan_falls_back_to_default() {
        assert_eq!(GlassOpacity::new(f32::NAN), GlassOpacity::default());
    }
}
