// SPDX-License-Identifier: MPL-2.0
//! Contact form view: two single-line inputs, a multi-line message editor,
//! a submit button that disables while a send is in flight, and a feedback
//! banner.
//!
//! The editor widget needs its own retained state, which lives in the app
//! alongside the pure form; the parent translates these messages into form
//! updates.

use crate::form::{ContactForm, Status};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::text_editor;
use iced::{
    widget::{button, text_input, Column, Container, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub form: &'a ContactForm,
    pub editor: &'a text_editor::Content,
}

/// Messages emitted by the contact form view.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    SubmitPressed,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let name = text_input("Your name *", &ctx.form.name)
        .on_input(Message::NameChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let email = text_input("Your email *", &ctx.form.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let message = text_editor(ctx.editor)
        .placeholder("Your message *")
        .on_action(Message::MessageEdited)
        .padding(spacing::XS)
        .size(typography::BODY)
        .height(sizing::MESSAGE_FIELD_HEIGHT);

    let mut submit = button(Text::new(ctx.form.submit_label()).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if ctx.form.status() == Status::Editing {
        submit = submit.on_press(Message::SubmitPressed);
    }

    let mut column = Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::CONTENT_WIDTH)
        .push(name)
        .push(email)
        .push(message)
        .push(submit);

    if let Some(banner) = ctx.form.banner() {
        column = column.push(
            Container::new(Text::new(banner.text()).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::banner(banner.kind())),
        );
    }

    column.into()
}
