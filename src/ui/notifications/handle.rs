// SPDX-License-Identifier: MPL-2.0
//! Cloneable entry point for code that raises toasts.
//!
//! A `ToastHandle` is what the rest of an application holds instead of the
//! manager itself. Requests are queued and applied, in order, the next time
//! the owner calls [`Manager::process_commands`](super::Manager::process_commands).
//! Handles can be moved into async tasks.

use super::notification::{ToastId, ToastKind, ToastOptions, ToastUpdate};
use tokio::sync::mpsc::UnboundedSender;

/// A queued request.
#[derive(Debug, Clone)]
pub(crate) enum Command {
    Add {
        id: ToastId,
        message: String,
        kind: ToastKind,
        options: ToastOptions,
    },
    Update {
        id: ToastId,
        update: ToastUpdate,
    },
    Remove(ToastId),
}

/// Sends add/update/remove requests to a [`Manager`](super::Manager).
///
/// Once the manager has been shut down, requests are silently dropped.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    tx: UnboundedSender<Command>,
}

impl ToastHandle {
    pub(crate) fn new(tx: UnboundedSender<Command>) -> Self {
        Self { tx }
    }

    /// Queues a new toast and returns its id for later updates or removal.
    pub fn add(
        &self,
        id: impl Into<ToastId>,
        message: impl Into<String>,
        kind: ToastKind,
        options: ToastOptions,
    ) -> ToastId {
        let id = id.into();
        self.send(Command::Add {
            id: id.clone(),
            message: message.into(),
            kind,
            options,
        });
        id
    }

    /// Queues a replacement of the toast's message, kind and auto-close
    /// settings.
    pub fn update(&self, id: impl Into<ToastId>, update: ToastUpdate) {
        self.send(Command::Update {
            id: id.into(),
            update,
        });
    }

    /// Queues removal of the toast.
    pub fn remove(&self, id: impl Into<ToastId>) {
        self.send(Command::Remove(id.into()));
    }

    pub fn success(&self, id: impl Into<ToastId>, message: impl Into<String>) -> ToastId {
        self.add(id, message, ToastKind::Success, ToastOptions::default())
    }

    pub fn error(&self, id: impl Into<ToastId>, message: impl Into<String>) -> ToastId {
        self.add(id, message, ToastKind::Error, ToastOptions::default())
    }

    pub fn warning(&self, id: impl Into<ToastId>, message: impl Into<String>) -> ToastId {
        self.add(id, message, ToastKind::Warning, ToastOptions::default())
    }

    pub fn info(&self, id: impl Into<ToastId>, message: impl Into<String>) -> ToastId {
        self.add(id, message, ToastKind::Info, ToastOptions::default())
    }

    /// Queues a loading toast. It stays until updated or removed.
    pub fn loading(&self, id: impl Into<ToastId>, message: impl Into<String>) -> ToastId {
        self.add(id, message, ToastKind::Loading, ToastOptions::default())
    }

    /// Whether the manager behind this handle is still accepting requests.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.tx.is_closed()
    }

    fn send(&self, command: Command) {
        if self.tx.send(command).is_err() {
            tracing::trace!("toast request dropped, manager is shut down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Manager, ManualClock, Position};
    use std::time::Duration;

    #[test]
    fn requests_wait_for_process_commands() {
        let mut manager = Manager::with_clock(ManualClock::new());
        let handle = manager.handle();

        let id = handle.info("a", "hello");
        assert_eq!(id, ToastId::from("a"));
        assert!(manager.is_empty());

        assert_eq!(manager.process_commands(), 1);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn requests_apply_in_send_order() {
        let mut manager = Manager::with_clock(ManualClock::new());
        let handle = manager.handle();
        let other = handle.clone();

        handle.loading("upload", "Uploading");
        other.update("upload", ToastUpdate::new("Uploaded", ToastKind::Success));
        handle.add(
            "note",
            "Bottom",
            ToastKind::Warning,
            ToastOptions::default().position(Position::BottomCenter),
        );
        other.remove("note");

        assert_eq!(manager.process_commands(), 4);
        let upload = manager.get(&"upload".into()).expect("upload toast");
        assert_eq!(upload.kind(), ToastKind::Success);
        assert_eq!(upload.message(), "Uploaded");
        assert!(manager.get(&"note".into()).is_none());
    }

    #[test]
    fn handle_works_from_another_thread() {
        let mut manager = Manager::with_clock(ManualClock::new());
        let handle = manager.handle();

        std::thread::spawn(move || {
            handle.error("e", "failed");
        })
        .join()
        .expect("sender thread");

        manager.process_commands();
        assert_eq!(
            manager.get(&"e".into()).map(|t| t.kind()),
            Some(ToastKind::Error)
        );
    }

    #[test]
    fn shutdown_disconnects_handles() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock.clone());
        let handle = manager.handle();
        handle.success("a", "queued before shutdown");
        assert!(handle.is_connected());

        manager.shutdown();
        assert!(!handle.is_connected());

        handle.success("b", "dropped");
        clock.advance(Duration::from_secs(1));
        assert_eq!(manager.process_commands(), 0);
        assert!(manager.is_empty());
    }
}
