// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard arrows drive the carousel; the periodic subscriptions only
//! run while something actually needs them, so an idle page schedules no
//! wake-ups at all.

use super::{App, Message};
use crate::carousel::Command;
use crate::config;
use iced::{event, keyboard, time, Subscription};
use std::time::{Duration, Instant};

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![event::listen_with(handle_event)];

    if app.is_animating(Instant::now()) {
        subscriptions.push(
            time::every(Duration::from_millis(config::ANIMATION_TICK_MS))
                .map(Message::AnimationFrame),
        );
    }

    if app.form.has_banner() {
        subscriptions.push(
            time::every(Duration::from_millis(config::HOUSEKEEPING_TICK_MS)).map(Message::Tick),
        );
    }

    Subscription::batch(subscriptions)
}

/// Maps arrow keys to carousel navigation. The mapping deliberately ignores
/// the capture status so the arrows work no matter which widget has focus,
/// like a document-level key listener.
fn handle_event(
    event: event::Event,
    _status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
        return arrow_command(&key).map(Message::Carousel);
    }
    None
}

fn arrow_command(key: &keyboard::Key) -> Option<Command> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Command::Next),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Command::Prev),
        _ => None,
    }
}
