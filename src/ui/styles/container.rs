// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Bottom sheet holding the style controls.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so the sheet stays readable over any wallpaper.
pub fn sheet(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Pill behind the editor title and hint text.
pub fn chrome_label(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder shown while a thumbnail renders.
pub fn placeholder(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.strong;
    container::Style {
        background: Some(Background::Color(weak.color)),
        text_color: Some(weak.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_is_mostly_opaque() {
        match sheet(&Theme::Light).background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::SURFACE),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
