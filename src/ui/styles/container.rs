// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface of the demo control panel.
pub fn panel(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_secondary;
    let text = colors.text_primary;
    let outline = colors.text_secondary;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..outline
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Full-window page background.
pub fn page(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_uses_secondary_surface() {
        let colors = ColorScheme::dark();
        let style = panel(&colors)(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(colors.surface_secondary))
        );
    }

    #[test]
    fn page_uses_primary_surface() {
        let colors = ColorScheme::light();
        let style = page(&colors)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(colors.surface_primary))
        );
    }
}
