// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer input reaches the comparison widget through its canvas program;
//! only window lifecycle events are routed here.

use super::Message;
use iced::{event, Subscription};

/// Routes window close requests so the session summary can be logged.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}
