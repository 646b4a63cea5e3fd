// SPDX-License-Identifier: MPL-2.0
//! Static page sections: the hero block and the reveal-animated card grids.
//!
//! These sections emit no messages of their own, so every view here is
//! generic over the parent's message type.

use std::time::Instant;

use crate::reveal::RevealGroup;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length, Padding,
};

/// Hero block: studio name, tagline, and optional intro copy.
pub fn hero<'a, M: 'a>(studio: &'a str, tagline: &'a str, intro: Option<&'a str>) -> Element<'a, M> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(studio).size(typography::TITLE_XL))
        .push(Text::new(tagline).size(typography::TITLE_SM));

    if let Some(intro) = intro {
        column = column.push(
            Text::new(intro)
                .size(typography::BODY)
                .align_x(Horizontal::Center),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::hero)
        .into()
}

/// A titled section of cards that fade in with a stagger once revealed.
/// `items` are `(title, description)` pairs in display order.
pub fn card_section<'a, M: 'a>(
    heading: &'a str,
    items: impl Iterator<Item = (&'a str, &'a str)>,
    reveal: &RevealGroup,
    now: Instant,
) -> Element<'a, M> {
    let mut cards = Column::new().spacing(spacing::SM).width(Length::Fill);

    for (index, (title, description)) in items.enumerate() {
        cards = cards.push(card(title, description, reveal, index, now));
    }

    section_frame(heading, cards.into())
}

/// A titled section with a single pre-built body (used for the carousel
/// and the contact block).
pub fn section_frame<'a, M: 'a>(heading: &'a str, body: Element<'a, M>) -> Element<'a, M> {
    let column = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_WIDTH)
        .push(Text::new(heading).size(typography::TITLE_LG))
        .push(body);

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XL, spacing::LG])
        .align_x(Horizontal::Center)
        .into()
}

fn card<'a, M: 'a>(
    title: &'a str,
    description: &'a str,
    reveal: &RevealGroup,
    index: usize,
    now: Instant,
) -> Element<'a, M> {
    let alpha = reveal.item_opacity(index, now);
    let rise = reveal.item_rise(index, now);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(Text::new(description).size(typography::BODY));

    let surface = Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card_reveal(alpha));

    // The entrance offset is faked with top padding so the card slides up
    // into its resting position as it fades in.
    Container::new(surface)
        .width(Length::Fill)
        .padding(Padding {
            top: rise,
            ..Padding::ZERO
        })
        .into()
}

/// Contact detail lines (email, phone, address), revealed with the same
/// stagger as the cards.
pub fn contact_details<'a, M: 'a>(
    lines: &[(&'static str, &'a str)],
    reveal: &RevealGroup,
    now: Instant,
) -> Element<'a, M> {
    let mut column = Column::new().spacing(spacing::SM);

    for (index, (label, value)) in lines.iter().enumerate() {
        let alpha = reveal.item_opacity(index, now);
        let rise = reveal.item_rise(index, now);

        let line = Row::new()
            .spacing(spacing::XS)
            .push(Text::new(*label).size(typography::BODY))
            .push(Text::new(*value).size(typography::BODY));

        column = column.push(
            Container::new(line)
                .style(styles::container::card_reveal(alpha))
                .padding(Padding {
                    top: rise,
                    left: spacing::XS,
                    right: spacing::XS,
                    bottom: spacing::XXS,
                }),
        );
    }

    column.into()
}
