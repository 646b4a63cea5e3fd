// SPDX-License-Identifier: MPL-2.0
//! Typed brochure content.
//!
//! The page copy (sections, cards, testimonials, contact details) is data,
//! not code: it lives in a TOML document embedded in the binary and can be
//! swapped out with a file path on the command line. Missing optional lists
//! degrade the page (the section is simply not rendered) instead of failing.

use crate::error::{ContentError, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

const DEFAULT_CONTENT: &str = "brochure.toml";

/// One service card in the services section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Service {
    pub title: String,
    pub description: String,
}

/// One client-type card.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientType {
    pub title: String,
    pub description: String,
}

/// One company-value item.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ValueItem {
    pub title: String,
    pub description: String,
}

/// One testimonial slide for the carousel.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Contact details listed beside the form.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ContactDetails {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// The whole brochure document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Brochure {
    pub studio: String,
    pub tagline: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub clients: Vec<ClientType>,
    #[serde(default)]
    pub values: Vec<ValueItem>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub contact: ContactDetails,
}

impl Brochure {
    /// Loads the content document embedded in the binary.
    pub fn embedded() -> Result<Self> {
        let asset = Asset::get(DEFAULT_CONTENT).ok_or(ContentError::MissingEmbedded)?;
        let text = std::str::from_utf8(asset.data.as_ref())
            .map_err(|e| ContentError::Malformed(e.to_string()))?;
        Self::parse(text)
    }

    /// Loads a content document from a user-supplied path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ContentError::Unreadable(e.to_string()))?;
        Self::parse(&text)
    }

    fn parse(text: &str) -> Result<Self> {
        let brochure: Brochure =
            toml::from_str(text).map_err(|e| ContentError::Malformed(e.to_string()))?;
        Ok(brochure)
    }

    /// Number of testimonial slides; drives carousel construction.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.testimonials.len()
    }

    /// Contact detail lines that are actually present, in display order.
    #[must_use]
    pub fn contact_lines(&self) -> Vec<(&'static str, &str)> {
        let mut lines = Vec::new();
        if let Some(email) = self.contact.email.as_deref() {
            lines.push(("Email", email));
        }
        if let Some(phone) = self.contact.phone.as_deref() {
            lines.push(("Phone", phone));
        }
        if let Some(address) = self.contact.address.as_deref() {
            lines.push(("Address", address));
        }
        lines
    }
}
