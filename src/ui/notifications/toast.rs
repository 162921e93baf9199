// SPDX-License-Identifier: MPL-2.0
//! Toast widgets: single cards and the positioned overlay.
//!
//! The overlay is a pure projection of the manager: one full-window layer
//! per occupied anchor, each holding a column of cards aligned to that
//! anchor. Cards fade and scale with their enter/exit transition.

use super::manager::{Card, Manager, Message};
use super::notification::{Position, Toast, ToastId};
use super::transition::{self, Frame};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::{toast_style, ToastStyle};
use crate::ui::widgets::animated_spinner::rotation_at;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Stack, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Shadow, Theme};
use std::time::Instant;

/// Rendering inputs shared by every card.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
}

/// What the close button of a card does.
#[derive(Debug, Clone, PartialEq)]
enum CloseControl {
    /// No close button is rendered.
    Hidden,
    /// Rendered but inert, for cards playing their exit transition.
    Inert,
    Dismiss(ToastId),
}

fn close_control(toast: &Toast, interactive: bool) -> CloseControl {
    if !toast.kind().has_close_button() {
        CloseControl::Hidden
    } else if interactive {
        CloseControl::Dismiss(toast.id().clone())
    } else {
        CloseControl::Inert
    }
}

/// Toast widget functions.
pub struct ToastView;

impl ToastView {
    /// Renders a single toast card.
    ///
    /// `interactive` is false for cards playing their exit transition; their
    /// close button no longer emits messages.
    pub fn view<'a>(
        toast: &'a Toast,
        frame: Frame,
        now: Instant,
        interactive: bool,
        ctx: ViewContext<'a>,
    ) -> Element<'a, Message> {
        let palette = toast_style(toast.kind(), ctx.is_dark);
        let text_color = faded(palette.text, frame.opacity);

        let rotation = rotation_at(now.saturating_duration_since(toast.created_at()));
        let icon = icons::for_kind(toast.kind(), text_color, sizing::ICON_MD, rotation);

        let message = Text::new(toast.message())
            .size(typography::BODY)
            .color(text_color);

        // Layout: [icon] [message] [close]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        let control = close_control(toast, interactive);
        if control != CloseControl::Hidden {
            let glyph: Element<'a, Message> =
                icons::tinted(icons::close(), text_color, sizing::ICON_XS).into();
            let glyph = Container::new(glyph)
                .center_x(Length::Fill)
                .center_y(Length::Fill);
            let ring = palette.ring;
            let on_press = match control {
                CloseControl::Dismiss(id) => Some(Message::Dismiss(id)),
                CloseControl::Hidden | CloseControl::Inert => None,
            };
            let close = button(glyph)
                .on_press_maybe(on_press)
                .width(Length::Fixed(sizing::CLOSE_BUTTON))
                .height(Length::Fixed(sizing::CLOSE_BUTTON))
                .padding(0)
                .style(move |_theme: &Theme, status| close_button_style(ring, frame.opacity, status));

            let label = text(ctx.i18n.tr("toast-close")).size(typography::CAPTION);
            content = content.push(
                tooltip(close, label, tooltip::Position::Bottom)
                    .gap(spacing::XXS)
                    .style(container::rounded_box),
            );
        }

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH * frame.scale))
            .padding(spacing::MD)
            .style(move |_theme: &Theme| card_style(palette, frame.opacity))
            .into()
    }

    /// Renders every occupied anchor as a layer over the window.
    pub fn view_overlay<'a>(manager: &'a Manager, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let now = manager.now();

        let layers: Vec<Element<'a, Message>> = manager
            .occupied_positions()
            .into_iter()
            .map(|position| Self::view_group(position, manager.cards_at(position), now, ctx))
            .collect();

        if layers.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            Stack::with_children(layers)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }

    fn view_group<'a>(
        position: Position,
        cards: Vec<Card<'a>>,
        now: Instant,
        ctx: ViewContext<'a>,
    ) -> Element<'a, Message> {
        let cards: Vec<Element<'a, Message>> = cards
            .into_iter()
            .map(|card| match card {
                Card::Active(toast) => {
                    let frame = transition::enter(toast.created_at(), now);
                    Self::view(toast, frame, now, true, ctx)
                }
                Card::Leaving(leaving) => {
                    Self::view(&leaving.toast, leaving.frame(now), now, false, ctx)
                }
            })
            .collect();

        let column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(position.horizontal());

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(position.horizontal())
            .align_y(position.vertical())
            .padding(spacing::SCREEN_EDGE)
            .into()
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Style function for the toast card.
fn card_style(palette: ToastStyle, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(palette.background, opacity))),
        border: Border {
            color: faded(palette.border, opacity),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: faded(shadow::MD.color, opacity),
            ..shadow::MD
        },
        text_color: Some(faded(palette.text, opacity)),
        ..Default::default()
    }
}

/// Style function for the close button; `ring` tints hover and press.
fn close_button_style(ring: Color, opacity: f32, status: button::Status) -> button::Style {
    let tint = match status {
        button::Status::Hovered => Some(0.2),
        button::Status::Pressed => Some(0.35),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: tint.map(|alpha| Background::Color(faded(Color { a: alpha, ..ring }, opacity))),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}
