// SPDX-License-Identifier: MPL-2.0
//! Contact form state machine.
//!
//! The form never contacts a server. Submission validates the fields,
//! latches into `Sending` for a fixed simulated latency, then shows a
//! success banner and resets. Validation failures show an error banner
//! immediately. The success banner auto-dismisses; the error banner stays
//! until the next submission attempt replaces it.

use std::time::{Duration, Instant};

use crate::config::SUCCESS_BANNER_LIFETIME_MS;

pub const ERROR_REQUIRED: &str = "Please fill in all required fields.";
pub const ERROR_EMAIL: &str = "Please enter a valid email address.";
pub const SUCCESS_TEXT: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";

/// Messages emitted by the form view.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    SubmitPressed,
    /// The simulated submission latency elapsed.
    SubmissionCompleted,
}

/// Effects the shell must execute after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start the simulated-latency sleep; deliver `SubmissionCompleted`
    /// when it elapses.
    SimulateSend,
}

/// Banner kind; determines styling and auto-dismiss behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// Auto-dismisses after a fixed lifetime.
    Success,
    /// Stays until the next submission attempt replaces it.
    Error,
}

/// Transient feedback banner shown near the submit button.
#[derive(Debug, Clone)]
pub struct Banner {
    kind: BannerKind,
    text: &'static str,
    created_at: Instant,
}

impl Banner {
    fn new(kind: BannerKind, text: &'static str) -> Self {
        Self {
            kind,
            text,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> BannerKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Whether this banner has outlived its display time.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.kind {
            BannerKind::Success => {
                now.duration_since(self.created_at)
                    >= Duration::from_millis(SUCCESS_BANNER_LIFETIME_MS)
            }
            BannerKind::Error => false,
        }
    }
}

/// Submission status; `Sending` disables the submit button and swaps its
/// label, mirroring the page this form is modeled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Editing,
    Sending,
}

/// State of the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: Status,
    banner: Option<Banner>,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Whether the housekeeping tick needs to run for this form.
    #[must_use]
    pub fn has_banner(&self) -> bool {
        self.banner.is_some()
    }

    /// Label for the submit button in the current status.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.status {
            Status::Editing => "Send Message",
            Status::Sending => "Sending...",
        }
    }

    /// Applies a form message and returns the effect to execute.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Effect::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Effect::None
            }
            Message::MessageChanged(value) => {
                self.message = value;
                Effect::None
            }
            Message::SubmitPressed => self.submit(),
            Message::SubmissionCompleted => {
                if self.status != Status::Sending {
                    // Stale completion; nothing was in flight.
                    return Effect::None;
                }
                self.status = Status::Editing;
                self.banner = Some(Banner::new(BannerKind::Success, SUCCESS_TEXT));
                self.reset_fields();
                Effect::None
            }
        }
    }

    fn submit(&mut self) -> Effect {
        if self.status == Status::Sending {
            // The button is disabled while sending; ignore stray presses.
            return Effect::None;
        }

        if let Err(error) = self.validate() {
            self.banner = Some(Banner::new(BannerKind::Error, error));
            return Effect::None;
        }

        self.banner = None;
        self.status = Status::Sending;
        Effect::SimulateSend
    }

    fn validate(&self) -> std::result::Result<(), &'static str> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ERROR_REQUIRED);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ERROR_EMAIL);
        }
        Ok(())
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Drops the banner once it expires. Call from the periodic tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(banner) = &self.banner {
            if banner.is_expired(now) {
                self.banner = None;
            }
        }
    }
}

/// Structural email check: one `@`, no whitespace, and a dot inside the
/// domain with characters on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.update(Message::NameChanged("Ada".into()));
        form.update(Message::EmailChanged("ada@example.com".into()));
        form.update(Message::MessageChanged("Hello there".into()));
        form
    }

    #[test]
    fn empty_form_rejects_submission_with_required_error() {
        let mut form = ContactForm::new();
        let effect = form.update(Message::SubmitPressed);

        assert_eq!(effect, Effect::None);
        assert_eq!(form.status(), Status::Editing);
        let banner = form.banner().expect("error banner expected");
        assert_eq!(banner.kind(), BannerKind::Error);
        assert_eq!(banner.text(), ERROR_REQUIRED);
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut form = filled_form();
        form.update(Message::MessageChanged("   ".into()));

        form.update(Message::SubmitPressed);
        assert_eq!(form.banner().map(Banner::text), Some(ERROR_REQUIRED));
    }

    #[test]
    fn malformed_email_rejects_submission() {
        let mut form = filled_form();
        form.update(Message::EmailChanged("not-an-email".into()));

        let effect = form.update(Message::SubmitPressed);

        assert_eq!(effect, Effect::None);
        assert_eq!(form.banner().map(Banner::text), Some(ERROR_EMAIL));
    }

    #[test]
    fn valid_submission_latches_into_sending() {
        let mut form = filled_form();

        let effect = form.update(Message::SubmitPressed);

        assert_eq!(effect, Effect::SimulateSend);
        assert_eq!(form.status(), Status::Sending);
        assert_eq!(form.submit_label(), "Sending...");
        assert!(form.banner().is_none());
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let mut form = filled_form();
        form.update(Message::SubmitPressed);

        let effect = form.update(Message::SubmitPressed);

        assert_eq!(effect, Effect::None);
        assert_eq!(form.status(), Status::Sending);
    }

    #[test]
    fn completion_shows_success_and_resets_fields() {
        let mut form = filled_form();
        form.update(Message::SubmitPressed);

        form.update(Message::SubmissionCompleted);

        assert_eq!(form.status(), Status::Editing);
        assert_eq!(form.submit_label(), "Send Message");
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        let banner = form.banner().expect("success banner expected");
        assert_eq!(banner.kind(), BannerKind::Success);
        assert_eq!(banner.text(), SUCCESS_TEXT);
    }

    #[test]
    fn stale_completion_without_send_in_flight_is_ignored() {
        let mut form = ContactForm::new();
        form.update(Message::SubmissionCompleted);
        assert!(form.banner().is_none());
    }

    #[test]
    fn success_banner_expires_after_lifetime() {
        let banner = Banner::new(BannerKind::Success, SUCCESS_TEXT);
        let later = banner.created_at + Duration::from_millis(SUCCESS_BANNER_LIFETIME_MS);

        assert!(!banner.is_expired(banner.created_at));
        assert!(banner.is_expired(later));
    }

    #[test]
    fn error_banner_never_expires() {
        let banner = Banner::new(BannerKind::Error, ERROR_REQUIRED);
        let much_later = banner.created_at + Duration::from_secs(3600);
        assert!(!banner.is_expired(much_later));
    }

    #[test]
    fn tick_clears_expired_success_banner() {
        let mut form = filled_form();
        form.update(Message::SubmitPressed);
        form.update(Message::SubmissionCompleted);

        let expiry = Instant::now() + Duration::from_millis(SUCCESS_BANNER_LIFETIME_MS);
        form.tick(expiry);

        assert!(form.banner().is_none());
    }

    #[test]
    fn email_validation_accepts_plausible_addresses() {
        for email in [
            "a@b.co",
            "first.last@example.com",
            "user+tag@sub.domain.org",
        ] {
            assert!(is_valid_email(email), "expected valid: {email}");
        }
    }

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        for email in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@domain",
            "user@domain.",
            "user@.com",
            "user name@example.com",
            "user@exa mple.com",
            "user@@example.com",
        ] {
            assert!(!is_valid_email(email), "expected invalid: {email}");
        }
    }
}
