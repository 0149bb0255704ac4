// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (apply).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::XL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::XL.into(),
            },
            shadow: shadow::LG,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::XL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Translucent buttons floating over the wallpaper.
pub fn chrome(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::SURFACE,
        button::Status::Disabled => opacity::OVERLAY_SUBTLE,
        button::Status::Active => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::XL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Gallery thumbnail cards.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.weak;
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(base.color)),
        text_color: base.text,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_disabled_differs_from_active() {
        let active = primary(&Theme::Dark, button::Status::Active);
        let disabled = primary(&Theme::Dark, button::Status::Disabled);
        assert_ne!(active.background, disabled.background);
    }

    #[test]
    fn chrome_gets_stronger_on_hover() {
        let alpha = |status| match chrome(&Theme::Dark, status).background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(button::Status::Hovered) > alpha(button::Status::Active));
        assert!(alpha(button::Status::Disabled) < alpha(button::Status::Active));
    }

    #[test]
    fn thumbnail_highlights_on_hover() {
        let idle = thumbnail(&Theme::Light, button::Status::Active);
        let hovered = thumbnail(&Theme::Light, button::Status::Hovered);
        assert_eq!(idle.border.color, Color::TRANSPARENT);
        assert_eq!(hovered.border.color, palette::PRIMARY_400);
    }
}
