// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by the toast cards and the playground window.

## Organization

- **Palette**: Base colors, one hue ramp per toast kind
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toasts::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let ring = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::GREEN_400
};

let gap = spacing::XS; // 8px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);

    // Success (green)
    pub const GREEN_50: Color = Color::from_rgb(0.941, 0.992, 0.957);
    pub const GREEN_300: Color = Color::from_rgb(0.525, 0.937, 0.675);
    pub const GREEN_400: Color = Color::from_rgb(0.290, 0.871, 0.502);
    pub const GREEN_800: Color = Color::from_rgb(0.086, 0.396, 0.204);

    // Error (red)
    pub const RED_50: Color = Color::from_rgb(0.996, 0.949, 0.949);
    pub const RED_300: Color = Color::from_rgb(0.988, 0.647, 0.647);
    pub const RED_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
    pub const RED_800: Color = Color::from_rgb(0.600, 0.106, 0.106);

    // Warning (yellow)
    pub const YELLOW_50: Color = Color::from_rgb(0.996, 0.988, 0.910);
    pub const YELLOW_300: Color = Color::from_rgb(0.992, 0.878, 0.278);
    pub const YELLOW_400: Color = Color::from_rgb(0.980, 0.800, 0.082);
    pub const YELLOW_800: Color = Color::from_rgb(0.522, 0.302, 0.055);

    // Info (blue)
    pub const BLUE_50: Color = Color::from_rgb(0.937, 0.965, 1.0);
    pub const BLUE_300: Color = Color::from_rgb(0.576, 0.773, 0.992);
    pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const BLUE_800: Color = Color::from_rgb(0.118, 0.251, 0.686);

    // Brand
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Card drop shadow.
    pub const SHADOW: f32 = 0.15;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
    pub const LG: f32 = 20.0; // 5 units
    pub const XL: f32 = 32.0; // 8 units

    /// Distance between a toast group and the window edge.
    pub const SCREEN_EDGE: f32 = LG;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_XS: f32 = 12.0;
    pub const ICON_MD: f32 = 20.0;

    /// Square close button hit area.
    pub const CLOSE_BUTTON: f32 = 32.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CONTROL_PANEL_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Window heading
    pub const TITLE_LG: f32 = 24.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Status line, hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_MD > sizing::ICON_XS);
    assert!(sizing::CLOSE_BUTTON > sizing::ICON_MD);
    assert!(sizing::TOAST_WIDTH > sizing::CLOSE_BUTTON);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn accent_ramps_darken_with_weight() {
        for (light, dark) in [
            (palette::GREEN_50, palette::GREEN_800),
            (palette::RED_50, palette::RED_800),
            (palette::YELLOW_50, palette::YELLOW_800),
            (palette::BLUE_50, palette::BLUE_800),
            (palette::GRAY_50, palette::GRAY_800),
        ] {
            assert!(light.r + light.g + light.b > dark.r + dark.g + dark.b);
        }
    }
}
