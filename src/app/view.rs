// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The whole page is one scrollable column of sections underneath a fixed
//! navigation bar. Sections backed by empty content lists are skipped.

use super::{page_scrollable_id, App, Message, Section};
use crate::ui::carousel_panel::{self, ViewContext as CarouselViewContext};
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::design_tokens::spacing;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::sections;
use iced::{
    widget::{Column, Scrollable},
    Element, Length,
};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        studio: &app.content.studio,
    })
    .map(Message::Navbar);

    let mut body = Column::new().spacing(spacing::LG).push(sections::hero(
        &app.content.studio,
        &app.content.tagline,
        app.content.intro.as_deref(),
    ));

    if !app.content.services.is_empty() {
        body = body.push(sections::card_section(
            Section::Services.title(),
            app.content
                .services
                .iter()
                .map(|s| (s.title.as_str(), s.description.as_str())),
            &app.reveals.services,
            app.now,
        ));
    }

    if !app.content.clients.is_empty() {
        body = body.push(sections::card_section(
            Section::Clients.title(),
            app.content
                .clients
                .iter()
                .map(|c| (c.title.as_str(), c.description.as_str())),
            &app.reveals.clients,
            app.now,
        ));
    }

    if !app.content.values.is_empty() {
        body = body.push(sections::card_section(
            Section::Values.title(),
            app.content
                .values
                .iter()
                .map(|v| (v.title.as_str(), v.description.as_str())),
            &app.reveals.values,
            app.now,
        ));
    }

    if let Some(carousel) = &app.carousel {
        let panel = carousel_panel::view(CarouselViewContext {
            carousel,
            testimonials: &app.content.testimonials,
        })
        .map(Message::Carousel);
        body = body.push(sections::section_frame(
            Section::Testimonials.title(),
            panel,
        ));
    }

    let contact_lines = app.content.contact_lines();
    let mut contact_block = Column::new().spacing(spacing::MD);
    if !contact_lines.is_empty() {
        contact_block = contact_block.push(sections::contact_details(
            &contact_lines,
            &app.reveals.contact,
            app.now,
        ));
    }
    contact_block = contact_block.push(
        contact::view(ContactViewContext {
            form: &app.form,
            editor: &app.message_editor,
        })
        .map(Message::Contact),
    );
    body = body.push(sections::section_frame(
        Section::Contact.title(),
        contact_block.into(),
    ));

    let page = Scrollable::new(body.width(Length::Fill))
        .id(page_scrollable_id())
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    Column::new().push(navbar).push(page).into()
}
