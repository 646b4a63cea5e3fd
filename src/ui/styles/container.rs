// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::form::BannerKind;
use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Fixed top bar behind the navigation links.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette_ext.background.weak.color)),
        ..Default::default()
    }
}

/// Gradient-colored hero block at the top of the page.
pub fn hero(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_600)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Rounded card used by service, client, and value items.
pub fn card(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette_ext.background.weak.color)),
        border: Border {
            color: palette_ext.background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Card mid-reveal: the normal card style with its colors scaled by the
/// current fade-in opacity.
pub fn card_reveal(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let mut style = card(theme);
        if let Some(Background::Color(color)) = style.background {
            style.background = Some(Background::Color(Color {
                a: color.a * alpha,
                ..color
            }));
        }
        style.border.color = Color {
            a: style.border.color.a * alpha,
            ..style.border.color
        };
        let text = style
            .text_color
            .unwrap_or_else(|| theme.extended_palette().background.base.text);
        style.text_color = Some(Color {
            a: text.a * alpha,
            ..text
        });
        style
    }
}

/// The testimonial slide surface.
pub fn slide(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_800)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tinted feedback banner under the contact form.
pub fn banner(kind: BannerKind) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let base = match kind {
            BannerKind::Success => palette::SUCCESS_500,
            BannerKind::Error => palette::ERROR_500,
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::BANNER_TINT,
                ..base
            })),
            border: Border {
                color: Color {
                    a: opacity::BANNER_BORDER,
                    ..base
                },
                width: 2.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_styles_differ_by_kind() {
        let theme = Theme::Light;
        let success = banner(BannerKind::Success)(&theme);
        let error = banner(BannerKind::Error)(&theme);
        assert_ne!(success.background, error.background);
    }

    #[test]
    fn hidden_card_is_fully_transparent() {
        let theme = Theme::Light;
        let style = card_reveal(0.0)(&theme);
        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg.a, 0.0);
        } else {
            panic!("Expected background color");
        }
        assert_eq!(style.border.color.a, 0.0);
    }

    #[test]
    fn slide_surface_uses_brand_background() {
        let theme = Theme::Light;
        let style = slide(&theme);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::BRAND_800))
        );
    }
}
