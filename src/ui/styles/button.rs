// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_600,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active | button::Status::Pressed => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Selected entry of a toggle group (kind or position picker).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = primary(theme, status);
    if status == button::Status::Active {
        style.border.color = palette::PRIMARY_600;
    }
    style
}

/// Unselected entry of a toggle group.
/// Adapts to light/dark theme.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_50, palette::GRAY_900)
    } else {
        (palette::GRAY_800, WHITE)
    };

    let (background, border_color) = match status {
        button::Status::Hovered => (
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            },
            palette::PRIMARY_500,
        ),
        button::Status::Pressed => (
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            },
            palette::PRIMARY_600,
        ),
        button::Status::Active | button::Status::Disabled => (bg_color, palette::GRAY_400),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_brand_color() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn unselected_follows_theme() {
        let light = unselected(&Theme::Light, button::Status::Active);
        let dark = unselected(&Theme::Dark, button::Status::Active);
        assert_eq!(light.text_color, palette::GRAY_900);
        assert_eq!(dark.text_color, WHITE);
    }

    #[test]
    fn unselected_hover_is_tinted() {
        let style = unselected(&Theme::Light, button::Status::Hovered);
        assert_eq!(style.border.color, palette::PRIMARY_500);
    }
}
