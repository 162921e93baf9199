// SPDX-License-Identifier: MPL-2.0
//! Centralized module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. They are drawn in a single color supplied by the
//! caller, so one asset serves both light and dark themes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let close = icons::tinted(icons::close(), palette::GRAY_800, sizing::ICON_XS);
//! ```

use crate::ui::notifications::ToastKind;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Element, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    check_circle,
    "success.svg",
    "Success icon: check mark in a filled circle."
);
define_icon!(
    cross_circle,
    "error.svg",
    "Error icon: cross in a filled circle."
);
define_icon!(
    triangle,
    "warning.svg",
    "Warning icon: exclamation mark in a triangle."
);
define_icon!(
    info_circle,
    "info.svg",
    "Info icon: lowercase i in a filled circle."
);
define_icon!(close, "close.svg", "Close icon: thin diagonal cross.");

/// Sizes an icon and paints it with a single color.
pub fn tinted(icon: Svg<'static>, color: Color, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

/// Returns the icon shown on a toast card of the given kind.
///
/// Loading toasts get a spinner turned by `rotation` radians; the other
/// kinds ignore it.
pub fn for_kind<Message: 'static>(
    kind: ToastKind,
    color: Color,
    size: f32,
    rotation: f32,
) -> Element<'static, Message> {
    let icon = match kind {
        ToastKind::Success => check_circle(),
        ToastKind::Error => cross_circle(),
        ToastKind::Warning => triangle(),
        ToastKind::Info => info_circle(),
        ToastKind::Loading => {
            return AnimatedSpinner::new(color, rotation)
                .with_size(size)
                .into_element();
        }
    };
    tinted(icon, color, size).into()
}
