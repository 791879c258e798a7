// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! Every timer here only exists while something needs it: the upload ticker
//! while a simulated upload runs, the frame loop while the scene is running,
//! and the notification ticker while toasts are shown.

use super::{Message, Screen};
use crate::domain::upload::ProgressInterval;
use crate::scene;
use crate::ui::notifications::NotificationMessage;
use crate::ui::uploader;
use iced::{event, time, window, Subscription};
use std::time::Duration;

const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Routes native window events.
///
/// File drops are only handled on the Upload screen; resizes always are.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Upload => event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        }),
        Screen::Scene => event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        }),
    }
}

/// Drives the simulated upload. Cancelling the upload drops the timer.
pub fn create_upload_subscription(
    uploading: bool,
    interval: ProgressInterval,
) -> Subscription<Message> {
    if uploading {
        time::every(interval.as_duration())
            .map(|_| Message::Uploader(uploader::Message::ProgressTick))
    } else {
        Subscription::none()
    }
}

/// Per-frame loop of the scene, active while a scene context exists.
pub fn create_frame_subscription(scene_running: bool) -> Subscription<Message> {
    if scene_running {
        window::frames().map(|_| Message::Scene(scene::Message::Frame))
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(|_| Message::Notification(NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}
