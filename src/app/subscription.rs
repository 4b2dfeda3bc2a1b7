// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard, window) to
//! top-level messages, plus the periodic ticks that drive the spinner,
//! notification expiry and the autosave cycle.

use super::Message;
use crate::project::autosave::AUTOSAVE_INTERVAL;
use crate::ui::navbar;
use iced::keyboard::{self, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// Window close requests are intercepted on all screens so the final
/// autosave can run before the window actually closes. Keyboard shortcuts
/// (Ctrl+Z, Ctrl+Y, Ctrl+S) are only handled when no widget captured the
/// event, so typing in a text field never triggers them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = &event
        {
            if status == event::Status::Ignored && modifiers.command() {
                if let Key::Character(c) = key {
                    return match c.as_str() {
                        "z" => Some(Message::Navbar(navbar::Message::Undo)),
                        "y" => Some(Message::Navbar(navbar::Message::Redo)),
                        "s" => Some(Message::Navbar(navbar::Message::SaveProject)),
                        _ => None,
                    };
                }
            }
        }

        None
    })
}

/// Creates a periodic tick subscription for the progress spinner and
/// notification auto-dismiss.
pub fn create_tick_subscription(busy: bool, has_notifications: bool) -> Subscription<Message> {
    if busy || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the autosave tick subscription when autosave is enabled.
pub fn create_autosave_subscription(enabled: bool) -> Subscription<Message> {
    if enabled {
        time::every(AUTOSAVE_INTERVAL).map(Message::AutosaveTick)
    } else {
        Subscription::none()
    }
}
