// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the content document, the carousel
//! controller, the contact form, and the page animations, and translates
//! messages into side effects like timer scheduling and programmatic
//! scrolling. Policy decisions (window sizing, theme selection, reveal
//! triggering) live here so user-facing behavior stays easy to audit.

mod message;
mod section;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use section::Section;

use crate::anim::ScrollAnimation;
use crate::carousel::Carousel;
use crate::config;
use crate::content::Brochure;
use crate::form::ContactForm;
use crate::reveal::RevealGroup;
use iced::widget::{text_editor, Id};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 860;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Id of the single page scrollable; programmatic scrolls target it.
const PAGE_SCROLLABLE: &str = "page";

fn page_scrollable_id() -> Id {
    Id::new(PAGE_SCROLLABLE)
}

/// Per-section card reveal groups.
#[derive(Debug, Clone)]
pub struct Reveals {
    pub services: RevealGroup,
    pub clients: RevealGroup,
    pub values: RevealGroup,
    pub contact: RevealGroup,
}

impl Reveals {
    fn for_content(content: &Brochure) -> Self {
        Self {
            services: RevealGroup::new(content.services.len()),
            clients: RevealGroup::new(content.clients.len()),
            values: RevealGroup::new(content.values.len()).with_stagger(Duration::from_millis(
                2 * config::REVEAL_STAGGER_MS,
            )),
            contact: RevealGroup::new(content.contact_lines().len()),
        }
    }

    fn any_animating(&self, now: Instant) -> bool {
        self.services.is_animating(now)
            || self.clients.is_animating(now)
            || self.values.is_animating(now)
            || self.contact.is_animating(now)
    }
}

/// Root Iced application state.
pub struct App {
    content: Brochure,
    /// Absent when the content document has no testimonials.
    carousel: Option<Carousel>,
    form: ContactForm,
    autoplay_interval: Duration,
    resume_delay: Duration,
    theme: Theme,
    /// Current relative scroll offset of the page, in `[0, 1]`.
    scroll_offset: f32,
    /// In-flight smooth scroll, if any.
    scroll_anim: Option<ScrollAnimation>,
    /// Current relative offset of the carousel's slide track, in `[0, 1]`.
    track_offset: f32,
    /// In-flight slide transition, if any.
    track_anim: Option<ScrollAnimation>,
    /// Editor state backing the contact form's multi-line message field.
    message_editor: text_editor::Content,
    reveals: Reveals,
    /// Timestamp of the latest animation frame; views render against it.
    now: Instant,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn load_config(config_dir: Option<&str>) -> config::Config {
    let result = match config_dir {
        Some(dir) => config::load_from_path(&Path::new(dir).join("settings.toml")),
        None => config::load(),
    };
    result.unwrap_or_else(|error| {
        eprintln!("Warning: could not load settings: {error}");
        config::Config::default()
    })
}

fn load_content(content_path: Option<&str>) -> Brochure {
    if let Some(path) = content_path {
        match Brochure::from_path(&PathBuf::from(path)) {
            Ok(content) => return content,
            Err(error) => {
                eprintln!("Warning: could not load content from {path}: {error}");
            }
        }
    }
    Brochure::embedded().unwrap_or_else(|error| {
        // The embedded document is validated by tests; reaching this branch
        // means a broken build, but the page still comes up.
        eprintln!("Warning: embedded content is unusable: {error}");
        Brochure {
            studio: String::from("Brochure"),
            tagline: String::new(),
            intro: None,
            services: Vec::new(),
            clients: Vec::new(),
            values: Vec::new(),
            testimonials: Vec::new(),
            contact: crate::content::ContactDetails::default(),
        }
    })
}

fn theme_from_name(name: Option<&str>) -> Theme {
    match name {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

impl App {
    /// Initializes application state, starts autoplay, and schedules the
    /// delayed contact-details reveal.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let settings = load_config(flags.config_dir.as_deref());
        let content = load_content(flags.content_path.as_deref());

        let now = Instant::now();
        let mut reveals = Reveals::for_content(&content);
        // Above-the-fold cards reveal on load rather than on scroll.
        reveals.services.trigger(now);

        let mut carousel = Carousel::new(content.slide_count());
        let form = ContactForm::new();

        let mut app = App {
            carousel: None,
            form,
            autoplay_interval: settings.autoplay_interval(),
            resume_delay: settings.resume_delay(),
            theme: theme_from_name(settings.theme.as_deref()),
            scroll_offset: 0.0,
            scroll_anim: None,
            track_offset: 0.0,
            track_anim: None,
            message_editor: text_editor::Content::new(),
            reveals,
            now,
            content,
        };

        let mut tasks = Vec::new();

        if let Some(carousel) = &mut carousel {
            let effect = carousel.start_autoplay();
            tasks.push(app.run_carousel_effect(effect));
        }
        app.carousel = carousel;

        let reveal_delay = Duration::from_millis(config::REVEAL_LOAD_DELAY_MS);
        tasks.push(Task::perform(
            async move { tokio::time::sleep(reveal_delay).await },
            |()| Message::RevealContactDetails,
        ));

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        format!("{} - {}", self.content.studio, self.content.tagline)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Whether any frame-driven animation is in flight.
    fn is_animating(&self, now: Instant) -> bool {
        self.scroll_anim.is_some() || self.track_anim.is_some() || self.reveals.any_animating(now)
    }

    /// Triggers every reveal group whose section has scrolled into view.
    fn trigger_reveals_at(&mut self, offset: f32, now: Instant) {
        if offset >= Section::Services.reveal_threshold() {
            self.reveals.services.trigger(now);
        }
        if offset >= Section::Clients.reveal_threshold() {
            self.reveals.clients.trigger(now);
        }
        if offset >= Section::Values.reveal_threshold() {
            self.reveals.values.trigger(now);
        }
        if offset >= Section::Contact.reveal_threshold() {
            self.reveals.contact.trigger(now);
        }
    }
}
