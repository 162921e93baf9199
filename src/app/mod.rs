// SPDX-License-Identifier: MPL-2.0
//! Application root state for the toast playground.
//!
//! The `App` owns the toast [`Manager`](notifications::Manager) and a
//! [`ToastHandle`](notifications::ToastHandle) to it. Controls and async tasks
//! queue toast requests through the handle; `update` applies them after every
//! message so the overlay always renders the latest state.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{
    self, Change, ListenerId, ToastHandle, ToastId, ToastKind, ToastUpdate,
};
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long the simulated upload keeps its loading toast on screen.
const UPLOAD_DURATION: Duration = Duration::from_secs(2);

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Most recent change reported by the manager, shown in the status line.
type LastChange = Arc<Mutex<Option<Change>>>;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    config: Config,
    notifications: notifications::Manager,
    toasts: ToastHandle,
    last_change: LastChange,
    status_listener: ListenerId,
    /// Kind used by the "Show toast" button.
    selected_kind: ToastKind,
    /// Number of toasts shown from the panel, used for unique ids.
    shown: u32,
    /// Number of simulated uploads started, used for unique ids.
    uploads: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme.mode)
            .field("notifications", &self.notifications)
            .field("selected_kind", &self.selected_kind)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    config::paths::init_cli_override(flags.config_dir.clone());

    // iced 0.14 requires a `Fn` boot closure; later calls fall back to
    // default flags.
    let boot_state = std::cell::RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads `settings.toml` and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(config, flags);

        if let Some(key) = config_warning {
            let message = app.i18n.tr(&key);
            app.toasts.warning("config-warning", message);
            app.notifications.process_commands();
        }

        (app, Task::none())
    }

    /// Builds the state from an already loaded configuration.
    ///
    /// CLI flags take precedence over the matching settings.
    pub fn with_config(mut config: Config, flags: Flags) -> Self {
        if let Some(mode) = flags.theme {
            config.general.theme_mode = mode;
        }
        if let Some(position) = flags.position {
            config.notifications.position = position;
        }

        let i18n = I18n::new(flags.lang, &config);
        let theme = AppTheme::new(config.general.theme_mode);

        let mut notifications = notifications::Manager::new();
        let toasts = notifications.handle();

        let last_change: LastChange = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&last_change);
        let status_listener = notifications.subscribe(move |change| {
            if let Ok(mut last) = sink.lock() {
                *last = Some(change.clone());
            }
        });

        tracing::info!(
            locale = %i18n.current_locale(),
            theme = %theme.mode,
            position = %config.notifications.position,
            "playground ready"
        );

        Self {
            i18n,
            theme,
            config,
            notifications,
            toasts,
            last_change,
            status_listener,
            selected_kind: ToastKind::default(),
            shown: 0,
            uploads: 0,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.notifications.needs_tick(),
            self.config.notifications.tick_interval(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Notification(notification) => {
                self.notifications.handle_message(&notification);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
            Message::KindSelected(kind) => {
                self.selected_kind = kind;
                Task::none()
            }
            Message::PositionSelected(position) => {
                self.config.notifications.position = position;
                self.persist_config();
                Task::none()
            }
            Message::AutoCloseToggled(auto_close) => {
                self.config.notifications.auto_close = auto_close;
                self.persist_config();
                Task::none()
            }
            Message::CloseInChanged(secs) => {
                self.config.notifications.close_in_secs = secs;
                Task::none()
            }
            Message::CloseInReleased => {
                self.persist_config();
                Task::none()
            }
            Message::ThemeSelected(mode) => {
                self.theme = AppTheme::new(mode);
                self.config.general.theme_mode = mode;
                self.persist_config();
                Task::none()
            }
            Message::ShowToast => {
                self.show_selected_toast();
                Task::none()
            }
            Message::SimulateUpload => self.start_upload(),
            Message::UploadFinished(id) => {
                tracing::debug!(%id, "simulated upload finished");
                Task::none()
            }
            Message::DismissAll => {
                self.notifications.clear();
                Task::none()
            }
        };

        // Requests queued through the handle, from this message or from a
        // finished task, become visible in the same frame.
        self.notifications.process_commands();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            config: &self.config,
            notifications: &self.notifications,
            selected_kind: self.selected_kind,
            last_change: self.last_change(),
        })
    }

    fn show_selected_toast(&mut self) {
        self.shown += 1;
        let count = self.shown.to_string();
        let message = self.i18n.tr_with_args(
            "demo-toast-message",
            &[("kind", self.selected_kind.as_str()), ("count", count.as_str())],
        );
        self.toasts.add(
            format!("toast-{}", self.shown),
            message,
            self.selected_kind,
            self.config.notifications.toast_options(),
        );
    }

    /// Shows a loading toast and turns it into a success toast once the
    /// simulated work completes.
    fn start_upload(&mut self) -> Task<Message> {
        self.uploads += 1;
        let id = ToastId::new(format!("upload-{}", self.uploads));
        let options = self.config.notifications.toast_options();

        self.toasts.add(
            id.clone(),
            self.i18n.tr("demo-upload-started"),
            ToastKind::Loading,
            options,
        );

        let handle = self.toasts.clone();
        let finished = ToastUpdate::new(self.i18n.tr("demo-upload-finished"), ToastKind::Success)
            .auto_close(options.auto_close)
            .close_in(options.close_in);

        Task::perform(
            async move {
                tokio::time::sleep(UPLOAD_DURATION).await;
                handle.update(id.clone(), finished);
                id
            },
            Message::UploadFinished,
        )
    }

    fn persist_config(&mut self) {
        if let Err(err) = config::save(&self.config) {
            tracing::warn!(%err, "failed to save settings");
            let message = self.i18n.tr("notification-config-save-error");
            self.toasts.error("config-save-error", message);
        }
    }

    fn last_change(&self) -> Option<Change> {
        self.last_change.lock().ok().and_then(|last| last.clone())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.notifications.unsubscribe(self.status_listener);
        self.notifications.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{NotificationMessage, Position, RemovalReason};
    use crate::ui::theming::ThemeMode;

    fn app() -> App {
        App::with_config(
            Config::default(),
            Flags {
                lang: Some("en-US".to_string()),
                ..Flags::default()
            },
        )
    }

    #[test]
    fn flags_override_config() {
        let app = App::with_config(
            Config::default(),
            Flags {
                theme: Some(ThemeMode::Dark),
                position: Some(Position::BottomLeft),
                ..Flags::default()
            },
        );
        assert_eq!(app.theme.mode, ThemeMode::Dark);
        assert_eq!(app.config.notifications.position, Position::BottomLeft);
    }

    #[test]
    fn show_toast_adds_selected_kind_at_configured_position() {
        let mut app = app();
        app.config.notifications.position = Position::CenterCenter;
        let _ = app.update(Message::KindSelected(ToastKind::Warning));
        let _ = app.update(Message::ShowToast);

        let toast = app
            .notifications
            .get(&"toast-1".into())
            .expect("toast should be shown");
        assert_eq!(toast.kind(), ToastKind::Warning);
        assert_eq!(toast.position(), Position::CenterCenter);
        assert!(toast.message().contains("warning"));
        assert_eq!(
            app.last_change(),
            Some(Change::Added(ToastId::new("toast-1")))
        );
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let mut app = app();
        let _ = app.update(Message::ShowToast);
        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(
            "toast-1".into(),
        )));

        assert!(app.notifications.is_empty());
        assert_eq!(
            app.last_change(),
            Some(Change::Removed {
                id: ToastId::new("toast-1"),
                reason: RemovalReason::Dismissed,
            })
        );
    }

    #[test]
    fn dismiss_all_clears_every_toast() {
        let mut app = app();
        let _ = app.update(Message::ShowToast);
        let _ = app.update(Message::ShowToast);
        assert_eq!(app.notifications.len(), 2);

        let _ = app.update(Message::DismissAll);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn upload_starts_with_loading_toast() {
        let mut app = app();
        let _ = app.update(Message::SimulateUpload);

        let toast = app
            .notifications
            .get(&"upload-1".into())
            .expect("loading toast should be shown");
        assert_eq!(toast.kind(), ToastKind::Loading);
        assert!(toast.deadline().is_none());
        assert!(app.notifications.needs_tick());
    }

    #[test]
    fn kind_selection_does_not_touch_toasts() {
        let mut app = app();
        let _ = app.update(Message::KindSelected(ToastKind::Error));
        assert_eq!(app.selected_kind, ToastKind::Error);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn title_is_localized() {
        assert_eq!(app().title(), "Iced Toasts");
    }
}
