// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the ordered list of active toasts. It applies add,
//! update and remove requests, expires toasts whose auto-close deadline has
//! passed, and projects the list into per-position groups for rendering.
//!
//! Every mutation is reported to registered listeners as a [`Change`].

use super::clock::{Clock, SystemClock};
use super::handle::{Command, ToastHandle};
use super::notification::{Position, Toast, ToastId, ToastKind, ToastOptions, ToastUpdate};
use super::transition::{self, Leaving};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Dismiss a specific toast by ID (close button).
    Dismiss(ToastId),
    /// Tick for checking auto-dismiss deadlines and advancing transitions.
    Tick,
}

/// Why a toast left the active list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// Explicit `remove` call or close button.
    Dismissed,
    /// The auto-close deadline passed.
    Expired,
    /// A new toast was added under the same id.
    Replaced,
    /// `clear` or `shutdown`.
    Cleared,
}

/// A mutation of the active list, reported to listeners after it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(ToastId),
    Updated(ToastId),
    Removed { id: ToastId, reason: RemovalReason },
}

impl Change {
    #[must_use]
    pub fn id(&self) -> &ToastId {
        match self {
            Change::Added(id) | Change::Updated(id) | Change::Removed { id, .. } => id,
        }
    }
}

/// Token returned by [`Manager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&Change) + Send>;

/// Toasts sharing one screen anchor, in insertion order.
#[derive(Debug, Clone)]
pub struct Group<'a> {
    pub position: Position,
    pub toasts: Vec<&'a Toast>,
}

/// A card shown at one anchor: an active toast or one playing its exit.
#[derive(Debug, Clone, Copy)]
pub enum Card<'a> {
    Active(&'a Toast),
    Leaving(&'a Leaving),
}

impl<'a> Card<'a> {
    #[must_use]
    pub fn toast(&self) -> &'a Toast {
        match self {
            Card::Active(toast) => toast,
            Card::Leaving(leaving) => &leaving.toast,
        }
    }

    #[must_use]
    pub fn is_leaving(&self) -> bool {
        matches!(self, Card::Leaving(_))
    }
}

/// Ordered registry of active toasts.
pub struct Manager {
    /// Active toasts in insertion order.
    toasts: Vec<Toast>,
    /// Removed toasts still playing their exit transition.
    leaving: Vec<Leaving>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    next_seq: u64,
    commands_tx: UnboundedSender<Command>,
    commands_rx: UnboundedReceiver<Command>,
    clock: Arc<dyn Clock>,
    /// Instant of the last tick or mutation, used by the view.
    now: Instant,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("toasts", &self.toasts)
            .field("leaving", &self.leaving.len())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager driven by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty manager driven by the given clock.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let clock: Arc<dyn Clock> = Arc::new(clock);
        let now = clock.now();
        Self {
            toasts: Vec::new(),
            leaving: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
            next_seq: 0,
            commands_tx,
            commands_rx,
            clock,
            now,
        }
    }

    /// Adds a toast at the end of the list and returns its id.
    ///
    /// A toast already registered under the same id is replaced. Unless the
    /// kind is [`ToastKind::Loading`], `options.auto_close` schedules removal
    /// after `options.close_in`.
    pub fn add(
        &mut self,
        id: impl Into<ToastId>,
        message: impl Into<String>,
        kind: ToastKind,
        options: ToastOptions,
    ) -> ToastId {
        let id = id.into();
        self.now = self.clock.now();

        if self.remove_with(&id, RemovalReason::Replaced) {
            tracing::debug!(%id, "toast id reused, previous toast replaced");
        }

        let toast = Toast::new(id.clone(), message.into(), kind, options, self.now, self.next_seq);
        self.next_seq += 1;
        tracing::debug!(
            %id,
            %kind,
            position = %options.position,
            deadline_in = ?toast.deadline().map(|d| d - self.now),
            "toast added"
        );
        self.toasts.push(toast);
        self.emit(&Change::Added(id.clone()));
        id
    }

    /// Replaces message, kind and auto-close settings of the toast with `id`.
    ///
    /// Position and list order are kept. Any pending auto-close is cancelled
    /// and rescheduled from the new settings. Unknown ids are ignored.
    pub fn update(&mut self, id: &ToastId, update: ToastUpdate) {
        self.now = self.clock.now();
        let now = self.now;

        let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id() == id) else {
            tracing::debug!(%id, "update for unknown toast ignored");
            return;
        };
        toast.apply(update, now);
        tracing::debug!(
            %id,
            kind = %toast.kind(),
            deadline_in = ?toast.deadline().map(|d| d - now),
            "toast updated"
        );
        self.emit(&Change::Updated(id.clone()));
    }

    /// Removes the toast with `id`. Removing an unknown id does nothing.
    ///
    /// Returns `true` if a toast was removed.
    pub fn remove(&mut self, id: &ToastId) -> bool {
        self.now = self.clock.now();
        self.remove_with(id, RemovalReason::Dismissed)
    }

    /// Removes every toast.
    pub fn clear(&mut self) {
        self.now = self.clock.now();
        let ids: Vec<ToastId> = self.toasts.iter().map(|t| t.id().clone()).collect();
        for id in ids {
            self.remove_with(&id, RemovalReason::Cleared);
        }
    }

    /// Expires toasts whose deadline has passed and drops finished exit
    /// transitions.
    ///
    /// Should be called periodically (e.g., every 100ms) while
    /// [`needs_tick`](Self::needs_tick) is true.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.now = now;

        let expired: Vec<ToastId> = self
            .toasts
            .iter()
            .filter(|toast| toast.is_expired(now))
            .map(|toast| toast.id().clone())
            .collect();

        for id in expired {
            self.remove_with(&id, RemovalReason::Expired);
        }

        self.leaving.retain(|leaving| !leaving.is_finished(now));
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// Returns a handle that forwards requests to this manager.
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        ToastHandle::new(self.commands_tx.clone())
    }

    /// Applies every request queued through handles, in send order.
    ///
    /// Returns how many requests were applied.
    pub fn process_commands(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(command) = self.commands_rx.try_recv() {
            match command {
                Command::Add {
                    id,
                    message,
                    kind,
                    options,
                } => {
                    self.add(id, message, kind, options);
                }
                Command::Update { id, update } => self.update(&id, update),
                Command::Remove(id) => {
                    self.remove(&id);
                }
            }
            applied += 1;
        }
        applied
    }

    /// Registers a listener called after every change to the active list.
    pub fn subscribe(&mut self, listener: impl Fn(&Change) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregisters a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Tears the manager down: clears toasts, drops listeners and closes the
    /// command channel. Handles report disconnected afterwards.
    pub fn shutdown(&mut self) {
        self.clear();
        self.leaving.clear();
        self.listeners.clear();
        self.commands_rx.close();
        // Discard whatever was queued before the channel closed.
        while self.commands_rx.try_recv().is_ok() {}
        tracing::debug!("toast manager shut down");
    }

    /// Returns the toast registered under `id`.
    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    /// Returns the active toasts in insertion order.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Groups the active toasts by position.
    ///
    /// Only non-empty groups are returned, in [`Position::ALL`] order; each
    /// group keeps insertion order.
    #[must_use]
    pub fn groups(&self) -> Vec<Group<'_>> {
        let mut buckets: [Vec<&Toast>; 9] = Default::default();
        for toast in &self.toasts {
            buckets[toast.position().index()].push(toast);
        }

        Position::ALL
            .into_iter()
            .zip(buckets)
            .filter(|(_, toasts)| !toasts.is_empty())
            .map(|(position, toasts)| Group { position, toasts })
            .collect()
    }

    /// Returns the cards at `position`, active and leaving, in insertion order.
    #[must_use]
    pub fn cards_at(&self, position: Position) -> Vec<Card<'_>> {
        let mut cards: Vec<Card<'_>> = self
            .toasts
            .iter()
            .filter(|toast| toast.position() == position)
            .map(Card::Active)
            .chain(
                self.leaving
                    .iter()
                    .filter(|leaving| leaving.toast.position() == position)
                    .map(Card::Leaving),
            )
            .collect();
        cards.sort_by_key(|card| card.toast().seq());
        cards
    }

    /// Positions with at least one active or leaving card, in canonical order.
    #[must_use]
    pub fn occupied_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|position| {
                self.toasts.iter().any(|t| t.position() == *position)
                    || self.leaving.iter().any(|l| l.toast.position() == *position)
            })
            .collect()
    }

    /// Instant of the last tick or mutation.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Whether periodic ticks are needed: a deadline is pending, a
    /// transition is running, or a loading spinner is visible.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        let now = self.now;
        !self.leaving.is_empty()
            || self.toasts.iter().any(|toast| {
                toast.deadline().is_some()
                    || toast.kind() == ToastKind::Loading
                    || transition::is_running(toast.created_at(), now)
            })
    }

    fn remove_with(&mut self, id: &ToastId, reason: RemovalReason) -> bool {
        let Some(index) = self.toasts.iter().position(|toast| toast.id() == id) else {
            return false;
        };

        let toast = self.toasts.remove(index);
        tracing::debug!(%id, ?reason, "toast removed");

        self.leaving.push(Leaving {
            toast,
            since: self.now,
        });
        self.emit(&Change::Removed {
            id: id.clone(),
            reason,
        });
        true
    }

    fn emit(&self, change: &Change) {
        for (_, listener) in &self.listeners {
            listener(change);
        }
    }
}
