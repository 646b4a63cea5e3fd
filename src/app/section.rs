// SPDX-License-Identifier: MPL-2.0
//! Page sections reachable from the navigation bar.

/// Sections of the brochure, in display order top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Clients,
    Values,
    Testimonials,
    Contact,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Services,
        Section::Clients,
        Section::Values,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Label shown in the navigation bar.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Clients => "Clients",
            Section::Values => "Values",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }

    /// Relative scroll offset of this section in `[0, 1]`.
    ///
    /// Sections are laid out with roughly equal heights, so an even spread
    /// over the scroll range lands each link close enough for the smooth
    /// scroll to feel targeted.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // six sections
    pub fn scroll_fraction(self) -> f32 {
        let index = Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0);
        index as f32 / (Self::ALL.len() - 1) as f32
    }

    /// Scroll offset at which this section's reveal group triggers.
    /// Slightly before the section itself, so cards are mid-fade as they
    /// come into view.
    #[must_use]
    pub fn reveal_threshold(self) -> f32 {
        (self.scroll_fraction() - 0.25).max(0.0)
    }
}
