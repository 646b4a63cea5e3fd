// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (form submit).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::BRAND_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::BRAND_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::BRAND_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::BRAND_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        },
    }
}

/// Flat navigation-bar link.
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::BRAND_200)),
            text_color: palette::BRAND_800,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette_ext.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

/// Carousel previous/next control. Disabled controls keep their footprint
/// but gray out, matching the page's disabled arrow buttons.
pub fn carousel_control(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered => (palette::BRAND_400, palette::WHITE),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400),
        _ => (palette::BRAND_500, palette::WHITE),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Carousel indicator dot; exactly one is active at a time.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::BRAND_500
        } else if status == button::Status::Hovered {
            palette::GRAY_400
        } else {
            palette::GRAY_200
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: Color::TRANSPARENT,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::BRAND_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_primary_button_is_grayed_out() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn active_dot_differs_from_inactive() {
        let theme = Theme::Light;
        let active = dot(true)(&theme, button::Status::Active);
        let inactive = dot(false)(&theme, button::Status::Active);
        assert_ne!(active.background, inactive.background);
    }
}
