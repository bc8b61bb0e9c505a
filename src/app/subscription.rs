// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard, mouse and window events are routed into [`Message`]s, and
//! a periodic tick drains the marker sample queue.

use super::Message;
use crate::marker_navigation::NavigationCommand;
use iced::{event, keyboard, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Window, keyboard and pointer events relevant to the viewer.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => key_command(&key).map(Message::Navigate),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Periodic tick at `interval`.
pub fn create_tick_subscription(interval: Duration) -> Subscription<Message> {
    time::every(interval).map(Message::Tick)
}

/// Left, `P` and `B` go back; Right and `N` go forward.
pub fn key_command(key: &keyboard::Key) -> Option<NavigationCommand> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(NavigationCommand::Retreat),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
            Some(NavigationCommand::Advance)
        }
        keyboard::Key::Character(c) => match c.as_str() {
            "p" | "P" | "b" | "B" => Some(NavigationCommand::Retreat),
            "n" | "N" => Some(NavigationCommand::Advance),
            _ => None,
        },
        _ => None,
    }
}
