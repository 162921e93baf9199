// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::{self, Position, ToastId, ToastKind};
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast expiry and transitions.
    Tick(Instant),
    KindSelected(ToastKind),
    PositionSelected(Position),
    AutoCloseToggled(bool),
    CloseInChanged(f32),
    /// The close-in slider was released; persist the new value.
    CloseInReleased,
    ThemeSelected(ThemeMode),
    ShowToast,
    SimulateUpload,
    /// The simulated upload behind this loading toast completed.
    UploadFinished(ToastId),
    DismissAll,
}

/// Runtime flags passed from the CLI to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional theme override; takes precedence over `settings.toml`.
    pub theme: Option<ThemeMode>,
    /// Optional default anchor for new toasts.
    pub position: Option<Position>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
