// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page holds the control panel; the toast overlay is stacked on top of
//! it so toasts float above every control.

use super::Message;
use crate::config::{Config, MAX_CLOSE_IN_SECS, MIN_CLOSE_IN_SECS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Change, Position, RemovalReason, ToastKind, ToastView};
use crate::ui::styles;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::widget::{button, slider, text, toggler, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub config: &'a Config,
    pub notifications: &'a notifications::Manager,
    pub selected_kind: ToastKind,
    pub last_change: Option<Change>,
}

/// Renders the control panel with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = Container::new(view_panel(&ctx))
        .width(Length::Fixed(sizing::CONTROL_PANEL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel(&ctx.theme.colors));

    let page = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::page(&ctx.theme.colors));

    let overlay = ToastView::view_overlay(
        ctx.notifications,
        notifications::ViewContext {
            i18n: ctx.i18n,
            is_dark: ctx.theme.is_dark,
        },
    )
    .map(Message::Notification);

    Stack::new()
        .push(page)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let settings = &ctx.config.notifications;

    let title = Text::new(i18n.tr("panel-title")).size(typography::TITLE_LG);

    let kinds = ToastKind::ALL.iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, &kind| {
            row.push(choice(
                kind.as_str(),
                kind == ctx.selected_kind,
                Message::KindSelected(kind),
            ))
        },
    );

    let positions = Position::ALL.chunks(3).fold(
        Column::new().spacing(spacing::XXS),
        |grid, line| {
            let row = line.iter().fold(Row::new().spacing(spacing::XXS), |row, &position| {
                row.push(choice(
                    position.as_str(),
                    position == settings.position,
                    Message::PositionSelected(position),
                ))
            });
            grid.push(row)
        },
    );

    let auto_close = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("panel-auto-close-label")).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            toggler(settings.auto_close)
                .on_toggle(Message::AutoCloseToggled)
                .size(sizing::ICON_MD),
        );

    let close_in_secs = settings.close_in().as_secs_f32();
    let seconds = format!("{close_in_secs:.1}");
    let close_in = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr_with_args("panel-close-in-label", &[("seconds", seconds.as_str())]))
                .size(typography::BODY),
        )
        .push(
            slider(
                MIN_CLOSE_IN_SECS..=MAX_CLOSE_IN_SECS,
                close_in_secs,
                Message::CloseInChanged,
            )
            .step(0.5)
            .on_release(Message::CloseInReleased),
        );

    let themes = ThemeMode::ALL.iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, &mode| {
            row.push(choice(
                mode_label(mode),
                mode == ctx.theme.mode,
                Message::ThemeSelected(mode),
            ))
        },
    );

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(action(i18n.tr("panel-show-button"), Message::ShowToast))
        .push(action(i18n.tr("panel-upload-button"), Message::SimulateUpload))
        .push(
            button(text(i18n.tr("panel-clear-button")).size(typography::BODY))
                .on_press_maybe((!ctx.notifications.is_empty()).then_some(Message::DismissAll))
                .style(styles::button::unselected),
        );

    let count = ctx.notifications.len().to_string();
    let footer = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr_with_args("panel-active-count", &[("count", count.as_str())]))
                .size(typography::CAPTION),
        )
        .push(Text::new(status_line(i18n, ctx.last_change.as_ref())).size(typography::CAPTION));

    Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(section(i18n.tr("panel-kind-label"), kinds.into()))
        .push(section(i18n.tr("panel-position-label"), positions.into()))
        .push(auto_close)
        .push(close_in)
        .push(section(i18n.tr("panel-theme-label"), themes.into()))
        .push(actions)
        .push(footer)
        .into()
}

fn section<'a>(label: String, content: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(label).size(typography::TITLE_SM))
        .push(content)
        .into()
}

/// Toggle-group entry.
fn choice<'a>(label: &'static str, selected: bool, on_press: Message) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if selected {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(style)
        .on_press(on_press)
        .into()
}

fn action<'a>(label: String, on_press: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .style(styles::button::primary)
        .on_press(on_press)
        .into()
}

fn mode_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
        ThemeMode::System => "system",
    }
}

/// Describes the most recent toast change.
fn status_line(i18n: &I18n, change: Option<&Change>) -> String {
    let Some(change) = change else {
        return i18n.tr("status-idle");
    };

    let key = match change {
        Change::Added(_) => "status-added",
        Change::Updated(_) => "status-updated",
        Change::Removed { reason, .. } => match reason {
            RemovalReason::Dismissed => "status-dismissed",
            RemovalReason::Expired => "status-expired",
            RemovalReason::Replaced => "status-replaced",
            RemovalReason::Cleared => "status-cleared",
        },
    };
    i18n.tr_with_args(key, &[("id", change.id().as_str())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::ToastId;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn status_line_is_idle_without_changes() {
        assert_eq!(status_line(&i18n(), None), "No recent activity");
    }

    #[test]
    fn status_line_names_removal_reason() {
        let change = Change::Removed {
            id: ToastId::new("a"),
            reason: RemovalReason::Expired,
        };
        assert_eq!(
            status_line(&i18n(), Some(&change)),
            "Toast a closed automatically"
        );
    }

    #[test]
    fn status_line_reports_updates() {
        let change = Change::Updated(ToastId::new("upload-1"));
        assert_eq!(status_line(&i18n(), Some(&change)), "Toast upload-1 updated");
    }

    #[test]
    fn view_renders_with_toasts() {
        let i18n = i18n();
        let theme = AppTheme::new(ThemeMode::Light);
        let config = Config::default();
        let mut manager = notifications::Manager::new();
        manager.add(
            "a",
            "Saved",
            ToastKind::Success,
            config.notifications.toast_options(),
        );

        let _ = view(ViewContext {
            i18n: &i18n,
            theme: &theme,
            config: &config,
            notifications: &manager,
            selected_kind: ToastKind::Info,
            last_change: Some(Change::Added(ToastId::new("a"))),
        });
    }
}
