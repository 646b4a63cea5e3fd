// SPDX-License-Identifier: MPL-2.0
//! Testimonial carousel: a sliding track of slide surfaces, arrow
//! controls, indicator dots, and a position counter. Hovering anywhere
//! over the panel pauses autoplay until the pointer leaves.
//!
//! The track is a horizontal scrollable with its scrollbar hidden; the
//! shell translates it programmatically from the controller's track
//! offset, which is what makes slides glide instead of cut.

use crate::carousel::{Carousel, Command};
use crate::content::Testimonial;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, Column, Container, Id, Row, Scrollable, Space, Text},
    Element, Length,
};

/// Id of the slide track; programmatic translations target it.
const TRACK: &str = "carousel-track";

pub fn track_id() -> Id {
    Id::new(TRACK)
}

/// Relative horizontal offset of the track for the controller's current
/// slide, in `[0, 1]`. Derived from the controller's track offset: slide
/// `i` sits at `i * 100%` of one slide width, and the scrollable's range
/// spans `total - 1` slide widths.
#[must_use]
#[allow(clippy::cast_precision_loss)] // slide counts are tiny
pub fn track_offset(carousel: &Carousel) -> f32 {
    let total = carousel.total_slides();
    if total < 2 {
        return 0.0;
    }
    -carousel.track_offset_percent() / 100.0 / (total - 1) as f32
}

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub carousel: &'a Carousel,
    pub testimonials: &'a [Testimonial],
}

/// Render the carousel panel. Emits raw carousel [`Command`]s; the parent
/// wraps them into its own message type.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Command> {
    let mut slides = Row::new().spacing(spacing::SM);
    for testimonial in ctx.testimonials {
        slides = slides.push(slide_surface(testimonial));
    }

    // Scrollbar and scroller widths of zero hide the bar; the shell moves
    // the track with snap_to instead.
    let track = Scrollable::new(slides)
        .id(track_id())
        .direction(Direction::Horizontal(
            Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(sizing::SLIDE_WIDTH);

    let mut prev = button(Text::new("‹").size(typography::TITLE_LG))
        .width(sizing::CONTROL_WIDTH)
        .style(styles::button::carousel_control);
    if ctx.carousel.can_go_previous() {
        prev = prev.on_press(Command::Prev);
    }

    let mut next = button(Text::new("›").size(typography::TITLE_LG))
        .width(sizing::CONTROL_WIDTH)
        .style(styles::button::carousel_control);
    if ctx.carousel.can_go_next() {
        next = next.on_press(Command::Next);
    }

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(prev)
        .push(track)
        .push(next);

    let counter = Text::new(ctx.carousel.counter_text()).size(typography::CAPTION);

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(dots(ctx.carousel))
        .push(Space::new().width(Length::Fill))
        .push(counter);

    let panel = Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::CONTENT_WIDTH)
        .push(controls)
        .push(footer);

    mouse_area(panel)
        .on_enter(Command::HoverEnter)
        .on_exit(Command::HoverLeave)
        .into()
}

fn slide_surface(testimonial: &Testimonial) -> Element<'_, Command> {
    let mut body = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(format!("\u{201c}{}\u{201d}", testimonial.quote))
                .size(typography::TITLE_SM)
                .align_x(Horizontal::Center),
        )
        .push(Text::new(testimonial.author.clone()).size(typography::BODY));

    if let Some(role) = &testimonial.role {
        body = body.push(Text::new(role.clone()).size(typography::CAPTION));
    }

    Container::new(body)
        .width(sizing::SLIDE_WIDTH)
        .height(sizing::SLIDE_HEIGHT)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::slide)
        .into()
}

fn dots(carousel: &Carousel) -> Element<'_, Command> {
    let mut row = Row::new().spacing(spacing::XS);

    for index in 0..carousel.total_slides() {
        row = row.push(
            button(Space::new())
                .width(sizing::DOT_SIZE)
                .height(sizing::DOT_SIZE)
                .padding(0)
                .on_press(Command::GoTo(index))
                .style(styles::button::dot(carousel.is_dot_active(index))),
        );
    }

    row.into()
}
