// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming and the per-kind toast color table.

use crate::ui::design_tokens::palette;
use crate::ui::notifications::ToastKind;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surface and text colors for the host window.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,
            brand_primary: palette::PRIMARY_500,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            brand_primary: palette::PRIMARY_600,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        })
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(crate::error::Error::Config(format!(
                "invalid theme_mode: {other}"
            ))),
        }
    }
}

/// Resolved theme for the host window.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    pub is_dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let is_dark = mode.is_dark();
        let colors = if is_dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self {
            colors,
            mode,
            is_dark,
        }
    }

    /// The built-in iced theme matching the resolved mode.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Colors of a toast card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub background: Color,
    pub border: Color,
    pub text: Color,
    /// Tint of the close button when hovered or pressed.
    pub ring: Color,
}

/// Looks up the card colors for a toast kind in light or dark mode.
#[must_use]
pub fn toast_style(kind: ToastKind, is_dark: bool) -> ToastStyle {
    use palette::*;

    let (light_bg, light_border, light_text, dark_border, dark_text, ring) = match kind {
        ToastKind::Success => (GREEN_50, GREEN_300, GREEN_800, GREEN_800, GREEN_400, GREEN_400),
        ToastKind::Error => (RED_50, RED_300, RED_800, RED_800, RED_400, RED_400),
        ToastKind::Info => (BLUE_50, BLUE_300, BLUE_800, BLUE_800, BLUE_400, BLUE_400),
        ToastKind::Warning => (
            YELLOW_50, YELLOW_300, YELLOW_800, YELLOW_800, YELLOW_300, YELLOW_400,
        ),
        ToastKind::Loading => (GRAY_50, GRAY_300, GRAY_800, GRAY_600, GRAY_300, GRAY_400),
    };

    if is_dark {
        ToastStyle {
            background: GRAY_800,
            border: dark_border,
            text: dark_text,
            ring,
        }
    } else {
        ToastStyle {
            background: light_bg,
            border: light_border,
            text: light_text,
            ring,
        }
    }
}
