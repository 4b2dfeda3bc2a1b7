// SPDX-License-Identifier: MPL-2.0
//! Queuing and lifecycle for toast notifications.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// At most this many toasts are on screen; the rest wait in the queue.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss deadlines.
    Tick,
}

/// Holds the visible toasts and the overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the notification immediately, or queues it when the screen
    /// already holds [`MAX_VISIBLE`] toasts.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() >= MAX_VISIBLE {
            self.queue.push_back(notification);
        } else {
            self.visible.push_front(notification);
        }
    }

    /// Removes the notification with `id` wherever it currently lives.
    ///
    /// Returns `false` when no such notification exists.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let visible_before = self.visible.len();
        self.visible.retain(|n| n.id() != id);
        if self.visible.len() < visible_before {
            self.refill_visible();
            return true;
        }

        let queued_before = self.queue.len();
        self.queue.retain(|n| n.id() != id);
        self.queue.len() < queued_before
    }

    /// Expires visible toasts whose auto-dismiss deadline passed.
    pub fn tick(&mut self) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.should_auto_dismiss());
        if self.visible.len() < before {
            self.refill_visible();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
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

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Drops stale `error-project-*` toasts, called after a project opens
    /// successfully so old load failures stop lingering on screen.
    pub fn clear_project_errors(&mut self) {
        let is_project_error =
            |n: &Notification| n.message_key().starts_with("error-project-");

        let visible_before = self.visible.len();
        self.visible.retain(|n| !is_project_error(n));
        self.queue.retain(|n| !is_project_error(n));

        if self.visible.len() < visible_before {
            self.refill_visible();
        }
    }

    fn refill_visible(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}
