// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription.
///
/// Only active while toasts have pending deadlines, running transitions or
/// a visible spinner; an idle overlay costs no wake-ups.
pub fn create_tick_subscription(needs_tick: bool, interval: Duration) -> Subscription<Message> {
    if needs_tick {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
