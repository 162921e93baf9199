// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Toasts are short messages stacked at one of nine screen anchors. They
//! close on their own after a delay, by the close button, or when the
//! caller removes them by id.
//!
//! # Components
//!
//! - [`Manager`] - Ordered registry, expiry, grouping and change events
//! - [`ToastHandle`] - Cloneable sender for code that does not own the manager
//! - [`ToastView`] - Card and overlay widgets
//! - [`transition`] - Enter/exit easing
//! - [`Clock`] - Time source, swappable for [`ManualClock`] in tests
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::notifications::{Manager, ToastKind, ToastOptions};
//!
//! let mut manager = Manager::new();
//! manager.add("saved", "Settings saved", ToastKind::Success, ToastOptions::default());
//!
//! // In the view function, layer the overlay over the page
//! let overlay = ToastView::view_overlay(&manager, ctx).map(Message::Notification);
//! ```

mod clock;
mod handle;
mod manager;
mod notification;
mod toast;
pub mod transition;

pub use clock::{Clock, ManualClock, SystemClock};
pub use handle::ToastHandle;
pub use manager::{
    Card, Change, Group, ListenerId, Manager, Message, Message as NotificationMessage, RemovalReason,
};
pub use notification::{Position, Toast, ToastId, ToastKind, ToastOptions, ToastUpdate};
pub use toast::{ToastView, ViewContext};
