// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Timer-driven behavior (autoplay ticks, resume wake-ups, the simulated
//! form send) is expressed as one-shot sleeps carrying the token minted
//! when they were scheduled; stale deliveries are rejected by the state
//! machines, so cancellation never races the runtime.

use super::{page_scrollable_id, App, Message, Section};
use crate::anim::ScrollAnimation;
use crate::carousel::{Command, Effect};
use crate::config;
use crate::form;
use crate::form::Status;
use crate::ui::carousel_panel;
use crate::ui::contact;
use crate::ui::navbar;
use iced::widget::operation::{snap_to, RelativeOffset};
use iced::widget::text_editor;
use iced::Task;
use std::time::{Duration, Instant};

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => match navbar::update(message) {
                navbar::Event::ScrollTo(section) => self.start_smooth_scroll(section),
            },
            Message::Carousel(command) => {
                let Some(carousel) = &mut self.carousel else {
                    return Task::none();
                };
                let effect = carousel.apply(command);
                let target = carousel_panel::track_offset(carousel);
                Task::batch([self.run_carousel_effect(effect), self.retarget_track(target)])
            }
            Message::Contact(message) => self.update_contact(message),
            Message::FormSubmissionCompleted => {
                let was_sending = self.form.status() == Status::Sending;
                self.form.update(form::Message::SubmissionCompleted);
                if was_sending {
                    // The form cleared its fields; the editor follows.
                    self.message_editor = text_editor::Content::new();
                }
                Task::none()
            }
            Message::PageScrolled(viewport) => {
                self.scroll_offset = viewport.relative_offset().y;
                self.trigger_reveals_at(self.scroll_offset, Instant::now());
                Task::none()
            }
            Message::AnimationFrame(now) => self.animation_frame(now),
            Message::Tick(now) => {
                self.form.tick(now);
                Task::none()
            }
            Message::RevealContactDetails => {
                self.reveals.contact.trigger(Instant::now());
                Task::none()
            }
        }
    }

    fn update_contact(&mut self, message: contact::Message) -> Task<Message> {
        match message {
            contact::Message::NameChanged(value) => {
                self.form.update(form::Message::NameChanged(value));
                Task::none()
            }
            contact::Message::EmailChanged(value) => {
                self.form.update(form::Message::EmailChanged(value));
                Task::none()
            }
            contact::Message::MessageEdited(action) => {
                self.message_editor.perform(action);
                self.form
                    .update(form::Message::MessageChanged(self.message_editor.text()));
                Task::none()
            }
            contact::Message::SubmitPressed => {
                let effect = self.form.update(form::Message::SubmitPressed);
                self.run_form_effect(effect)
            }
        }
    }

    /// Executes a carousel effect by scheduling the requested one-shot
    /// timer. The token travels with the sleep and comes back inside the
    /// delivered command.
    pub(super) fn run_carousel_effect(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::ScheduleTick(token) => {
                let interval = self.autoplay_interval;
                Task::perform(
                    async move { tokio::time::sleep(interval).await },
                    move |()| Message::Carousel(Command::AutoplayTick(token)),
                )
            }
            Effect::ScheduleResume(token) => {
                let delay = self.resume_delay;
                Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
                    Message::Carousel(Command::ResumeElapsed(token))
                })
            }
        }
    }

    fn run_form_effect(&self, effect: form::Effect) -> Task<Message> {
        match effect {
            form::Effect::None => Task::none(),
            form::Effect::SimulateSend => {
                let latency = Duration::from_millis(config::FORM_SUBMIT_LATENCY_MS);
                Task::perform(async move { tokio::time::sleep(latency).await }, |()| {
                    Message::FormSubmissionCompleted
                })
            }
        }
    }

    /// Starts (or retargets) the smooth scroll toward `section`. A scroll
    /// already in flight is replaced from its current position.
    fn start_smooth_scroll(&mut self, section: Section) -> Task<Message> {
        let now = Instant::now();
        let from = match &self.scroll_anim {
            Some(anim) => anim.value_at(now),
            None => self.scroll_offset,
        };
        self.scroll_anim = Some(ScrollAnimation::new(
            from,
            section.scroll_fraction(),
            now,
            Duration::from_millis(config::SMOOTH_SCROLL_MS),
        ));
        // Snap the first frame immediately instead of waiting a tick.
        self.animation_frame(now)
    }

    /// Starts a slide transition toward the track offset of the current
    /// slide. A transition already in flight toward the same offset is
    /// left alone; a different one is replaced from its current position.
    fn retarget_track(&mut self, target: f32) -> Task<Message> {
        let now = Instant::now();
        let current_target = match &self.track_anim {
            Some(anim) => anim.target(),
            None => self.track_offset,
        };
        if (target - current_target).abs() < f32::EPSILON {
            return Task::none();
        }

        let from = match &self.track_anim {
            Some(anim) => anim.value_at(now),
            None => self.track_offset,
        };
        self.track_anim = Some(ScrollAnimation::new(
            from,
            target,
            now,
            Duration::from_millis(config::SLIDE_TRANSITION_MS),
        ));
        self.animation_frame(now)
    }

    fn animation_frame(&mut self, now: Instant) -> Task<Message> {
        self.now = now;
        let mut tasks = Vec::new();

        if let Some(anim) = self.scroll_anim {
            let offset = anim.value_at(now);
            if anim.is_finished(now) {
                self.scroll_anim = None;
            }
            self.trigger_reveals_at(offset, now);
            tasks.push(snap_to(
                page_scrollable_id(),
                RelativeOffset { x: 0.0, y: offset },
            ));
        }

        if let Some(anim) = self.track_anim {
            let offset = anim.value_at(now);
            self.track_offset = offset;
            if anim.is_finished(now) {
                self.track_anim = None;
            }
            tasks.push(snap_to(
                carousel_panel::track_id(),
                RelativeOffset { x: offset, y: 0.0 },
            ));
        }

        Task::batch(tasks)
    }
}
