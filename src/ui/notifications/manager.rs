// SPDX-License-Identifier: MPL-2.0
//! Notification queue and lifecycle.
//!
//! At most [`MAX_VISIBLE`] toasts are shown; the rest wait in a FIFO queue and
//! are promoted as visible ones expire or are dismissed.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss timers.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now if there is room, otherwise queues it.
    /// Warnings and errors are also written to the log.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => log::warn!("Notification: {}", notification.message_key()),
            Severity::Error => log::error!("Notification: {}", notification.message_key()),
            Severity::Success | Severity::Info => {
                log::debug!("Notification: {}", notification.message_key());
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if a notification with `id` was removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let removed = self.remove_where(|n| n.id() == id);
        removed > 0
    }

    /// Drops every visible notification that expired at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.visible.retain(|n| !n.is_expired_at(now));
        self.promote_from_queue();
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick_at(Instant::now()),
        }
    }

    /// Removes notifications whose message key starts with `prefix`.
    ///
    /// Used to drop stale scene errors once a scene loads or is stopped.
    pub fn clear_with_prefix(&mut self, prefix: &str) {
        self.remove_where(|n| n.message_key().starts_with(prefix));
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn remove_where(&mut self, predicate: impl Fn(&Notification) -> bool) -> usize {
        let before = self.visible.len() + self.queue.len();
        self.visible.retain(|n| !predicate(n));
        self.queue.retain(|n| !predicate(n));
        self.promote_from_queue();
        before - (self.visible.len() + self.queue.len())
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(notification);
        }
    }
}
