// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification system for the Iced GUI framework.
//!
//! Toasts are short, transient messages stacked at one of nine screen
//! anchors. The [`ui::notifications::Manager`] owns them, expires them on a
//! deadline and emits change events; [`ui::notifications::ToastHandle`] lets
//! any part of an application queue toasts without owning the manager.
//!
//! The `iced_toasts` binary is a playground built on the same API, with
//! Fluent localization and persisted preferences.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
