// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record together with the closed sets it
//! is built from: `ToastKind` (what the toast means) and `Position` (where it
//! stacks on screen).

use crate::config::DEFAULT_CLOSE_IN_SECS;
use crate::error::Error;
use iced::alignment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Caller-supplied identifier for a toast.
///
/// Callers pick ids so they can later update or remove the same toast
/// (e.g. `"upload-42"`). The manager keeps at most one toast per id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToastId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Semantic category of a toast. Selects icon, colors, and whether the
/// toast can be auto-dismissed or closed by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastKind {
    /// Operation completed (green).
    Success,
    /// Operation failed (red).
    Error,
    /// Something needs attention (yellow).
    Warning,
    /// Neutral information (blue).
    #[default]
    Info,
    /// Work in progress (gray, spinner). Never auto-dismissed, no close button.
    Loading,
}

impl ToastKind {
    pub const ALL: [ToastKind; 5] = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Warning,
        ToastKind::Info,
        ToastKind::Loading,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
            ToastKind::Loading => "loading",
        }
    }

    /// Whether an `auto_close` request is honoured for this kind.
    #[must_use]
    pub fn can_auto_close(self) -> bool {
        self != ToastKind::Loading
    }

    /// Whether cards of this kind render a manual close control.
    #[must_use]
    pub fn has_close_button(self) -> bool {
        self != ToastKind::Loading
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToastKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidKind(s.to_string()))
    }
}

/// One of the nine screen anchors toasts stack at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    CenterLeft,
    CenterCenter,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// All anchors in canonical order (row by row, left to right).
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::CenterLeft,
        Position::CenterCenter,
        Position::CenterRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::CenterLeft => "center-left",
            Position::CenterCenter => "center-center",
            Position::CenterRight => "center-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Index of this anchor in [`Position::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Horizontal placement of the group, also used as the cross-axis
    /// alignment of the cards inside it.
    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            Position::TopLeft | Position::CenterLeft | Position::BottomLeft => {
                alignment::Horizontal::Left
            }
            Position::TopCenter | Position::CenterCenter | Position::BottomCenter => {
                alignment::Horizontal::Center
            }
            Position::TopRight | Position::CenterRight | Position::BottomRight => {
                alignment::Horizontal::Right
            }
        }
    }

    #[must_use]
    pub fn vertical(self) -> alignment::Vertical {
        match self {
            Position::TopLeft | Position::TopCenter | Position::TopRight => {
                alignment::Vertical::Top
            }
            Position::CenterLeft | Position::CenterCenter | Position::CenterRight => {
                alignment::Vertical::Center
            }
            Position::BottomLeft | Position::BottomCenter | Position::BottomRight => {
                alignment::Vertical::Bottom
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidPosition(s.to_string()))
    }
}

/// Options accepted when adding a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastOptions {
    /// Schedule removal after `close_in` (ignored for loading toasts).
    pub auto_close: bool,
    /// Delay before auto-removal.
    pub close_in: Duration,
    /// Anchor the toast stacks at. Fixed for the toast's lifetime.
    pub position: Position,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            auto_close: true,
            close_in: Duration::from_secs_f32(DEFAULT_CLOSE_IN_SECS),
            position: Position::default(),
        }
    }
}

impl ToastOptions {
    #[must_use]
    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    #[must_use]
    pub fn close_in(mut self, close_in: Duration) -> Self {
        self.close_in = close_in;
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// Replacement content for an existing toast.
///
/// `auto_close` and `close_in` fall back to their defaults when not set,
/// they are not inherited from the toast being updated.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastUpdate {
    pub message: String,
    pub kind: ToastKind,
    pub auto_close: bool,
    pub close_in: Duration,
}

impl ToastUpdate {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        let defaults = ToastOptions::default();
        Self {
            message: message.into(),
            kind,
            auto_close: defaults.auto_close,
            close_in: defaults.close_in,
        }
    }

    #[must_use]
    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    #[must_use]
    pub fn close_in(mut self, close_in: Duration) -> Self {
        self.close_in = close_in;
        self
    }
}

/// A toast currently held by the manager.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    message: String,
    kind: ToastKind,
    auto_close: bool,
    close_in: Duration,
    position: Position,
    /// When the pending auto-close fires. `None` means no timer is pending.
    deadline: Option<Instant>,
    created_at: Instant,
    /// Insertion sequence assigned by the manager; orders cards on screen.
    seq: u64,
}

impl Toast {
    pub(super) fn new(
        id: ToastId,
        message: String,
        kind: ToastKind,
        options: ToastOptions,
        now: Instant,
        seq: u64,
    ) -> Self {
        let mut toast = Self {
            id,
            message,
            kind,
            auto_close: options.auto_close,
            close_in: options.close_in,
            position: options.position,
            deadline: None,
            created_at: now,
            seq,
        };
        toast.schedule(now);
        toast
    }

    /// Replaces the mutable fields and reschedules the auto-close timer.
    /// `id` and `position` stay as they are.
    pub(super) fn apply(&mut self, update: ToastUpdate, now: Instant) {
        self.message = update.message;
        self.kind = update.kind;
        self.auto_close = update.auto_close;
        self.close_in = update.close_in;
        self.schedule(now);
    }

    /// A `close_in` too large to represent as an instant leaves no deadline.
    fn schedule(&mut self, now: Instant) {
        self.deadline = if self.auto_close && self.kind.can_auto_close() {
            now.checked_add(self.close_in)
        } else {
            None
        };
    }

    pub(super) fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    #[must_use]
    pub fn close_in(&self) -> Duration {
        self.close_in
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Whether the pending auto-close has fired by `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}
