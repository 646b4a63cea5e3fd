// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with smooth-scroll links to each page section.

use crate::app::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub studio: &'a str,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    SectionSelected(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SectionSelected(section) => Event::ScrollTo(section),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.studio.to_owned()).size(typography::TITLE_SM);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    for section in Section::ALL {
        row = row.push(
            button(Text::new(section.title()).size(typography::BODY))
                .on_press(Message::SectionSelected(section))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::nav_link),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let ctx = ViewContext { studio: "Studio" };
        let _element = view(ctx);
    }

    #[test]
    fn section_selection_emits_scroll_event() {
        let event = update(Message::SectionSelected(Section::Contact));
        assert!(matches!(event, Event::ScrollTo(Section::Contact)));
    }
}
