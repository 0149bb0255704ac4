// SPDX-License-Identifier: MPL-2.0
//! Glass effect style parameters.
//!
//! [`GlassStyle`] bundles the five independent knobs of the effect. Each knob
//! is also addressable through [`StyleParameter`], which lets the controls
//! panel render and route all sliders from a single table.

pub mod newtypes;

pub use newtypes::{BlurRadius, CornerRadius, GlassOpacity, RefractionAmount, RefractionHeight};

use newtypes::{
    blur_bounds, corner_radius_bounds, opacity_bounds, refraction_amount_bounds,
    refraction_height_bounds,
};
use std::ops::RangeInclusive;

/// Complete style of the glass panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlassStyle {
    pub blur_radius: BlurRadius,
    pub opacity: GlassOpacity,
    pub refraction_height: RefractionHeight,
    pub refraction_amount: RefractionAmount,
    pub corner_radius: CornerRadius,
}

impl GlassStyle {
    /// Reads one parameter as a raw value.
    #[must_use]
    pub fn get(&self, parameter: StyleParameter) -> f32 {
        match parameter {
            StyleParameter::BlurRadius => self.blur_radius.value(),
            StyleParameter::Opacity => self.opacity.value(),
            StyleParameter::RefractionHeight => self.refraction_height.value(),
            StyleParameter::RefractionAmount => self.refraction_amount.value(),
            StyleParameter::CornerRadius => self.corner_radius.value(),
        }
    }

    /// Writes one parameter, clamping it to its range.
    pub fn set(&mut self, parameter: StyleParameter, value: f32) {
        match parameter {
            StyleParameter::BlurRadius => self.blur_radius = BlurRadius::new(value),
            StyleParameter::Opacity => self.opacity = GlassOpacity::new(value),
            StyleParameter::RefractionHeight => {
                self.refraction_height = RefractionHeight::new(value);
            }
            StyleParameter::RefractionAmount => {
                self.refraction_amount = RefractionAmount::new(value);
            }
            StyleParameter::CornerRadius => self.corner_radius = CornerRadius::new(value),
        }
    }

    /// Returns a copy with one parameter changed.
    #[must_use]
    pub fn with(mut self, parameter: StyleParameter, value: f32) -> Self {
        self.set(parameter, value);
        self
    }
}

/// Identifies one of the five style parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleParameter {
    BlurRadius,
    Opacity,
    RefractionHeight,
    RefractionAmount,
    CornerRadius,
}

/// How a parameter value is rendered next to its slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Whole logical pixels, e.g. "24 dp".
    WholePixels,
    /// Two decimals, e.g. "0.45".
    Fraction,
    /// One decimal, e.g. "-40.0".
    OneDecimal,
}

impl StyleParameter {
    /// All parameters, in panel order.
    pub const ALL: [StyleParameter; 5] = [
        StyleParameter::BlurRadius,
        StyleParameter::Opacity,
        StyleParameter::RefractionHeight,
        StyleParameter::RefractionAmount,
        StyleParameter::CornerRadius,
    ];

    /// Valid range of the parameter.
    #[must_use]
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            StyleParameter::BlurRadius => blur_bounds::MIN..=blur_bounds::MAX,
            StyleParameter::Opacity => opacity_bounds::MIN..=opacity_bounds::MAX,
            StyleParameter::RefractionHeight => {
                refraction_height_bounds::MIN..=refraction_height_bounds::MAX
            }
            StyleParameter::RefractionAmount => {
                refraction_amount_bounds::MIN..=refraction_amount_bounds::MAX
            }
            StyleParameter::CornerRadius => corner_radius_bounds::MIN..=corner_radius_bounds::MAX,
        }
    }

    /// Slider step.
    #[must_use]
    pub fn step(self) -> f32 {
        match self {
            StyleParameter::Opacity => 0.01,
            _ => 0.5,
        }
    }

    /// Position of `value` within the range, from 0.0 to 1.0.
    #[must_use]
    pub fn progress(self, value: f32) -> f32 {
        let range = self.range();
        let span = range.end() - range.start();
        if span <= 0.0 {
            return 0.0;
        }
        ((value - range.start()) / span).clamp(0.0, 1.0)
    }

    /// i18n key of the slider label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            StyleParameter::BlurRadius => "glass-blur-radius",
            StyleParameter::Opacity => "glass-opacity",
            StyleParameter::RefractionHeight => "glass-refraction-height",
            StyleParameter::RefractionAmount => "glass-refraction-amount",
            StyleParameter::CornerRadius => "glass-corner-radius",
        }
    }

    #[must_use]
    pub fn value_format(self) -> ValueFormat {
        match self {
            StyleParameter::BlurRadius | StyleParameter::CornerRadius => ValueFormat::WholePixels,
            StyleParameter::Opacity => ValueFormat::Fraction,
            StyleParameter::RefractionHeight | StyleParameter::RefractionAmount => {
                ValueFormat::OneDecimal
            }
        }
    }

    /// Renders a value the way the controls panel shows it.
    #[must_use]
    pub fn format_value(self, value: f32) -> String {
        match self.value_format() {
            ValueFormat::WholePixels => format!("{value:.0} dp"),
            ValueFormat::Fraction => format!("{value:.2}"),
            ValueFormat::OneDecimal => format!("{value:.1}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clamps_each_parameter_independently() {
        let mut style = GlassStyle::default();
        style.set(StyleParameter::Opacity, 3.0);
        style.set(StyleParameter::RefractionAmount, 12.0);

        assert_eq!(style.get(StyleParameter::Opacity), 1.0);
        assert_eq!(style.get(StyleParameter::RefractionAmount), 0.0);
        assert_eq!(style.get(StyleParameter::BlurRadius), 24.0);
    }

    #[test]
    fn defaults_lie_inside_ranges() {
        let style = GlassStyle::default();
        for parameter in StyleParameter::ALL {
            assert!(parameter.range().contains(&style.get(parameter)));
        }
    }

    #[test]
    fn progress_maps_range_to_unit_interval() {
        assert_eq!(StyleParameter::RefractionAmount.progress(-50.0), 0.0);
        assert_eq!(StyleParameter::RefractionAmount.progress(0.0), 1.0);
        assert_eq!(StyleParameter::RefractionAmount.progress(-25.0), 0.5);
        assert_eq!(StyleParameter::BlurRadius.progress(99.0), 1.0);
    }

    #[test]
    fn values_format_like_panel_labels() {
        assert_eq!(StyleParameter::BlurRadius.format_value(24.0), "24 dp");
        assert_eq!(StyleParameter::Opacity.format_value(0.45), "0.45");
        assert_eq!(StyleParameter::RefractionHeight.format_value(32.0), "32.0");
        assert_eq!(StyleParameter::RefractionAmount.format_value(-40.0), "-40.0");
    }

    #[test]
    fn with_returns_modified_copy() {
        let style = GlassStyle::default().with(StyleParameter::CornerRadius, 8.0);
        assert_eq!(style.corner_radius.value(), 8.0);
        assert_eq!(GlassStyle::default().corner_radius.value(), 24.0);
    }
}
