// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the brochure.
//!
//! Single source of truth for colors, spacing, typography, and radii used
//! across the page. Keep ratios intact when adjusting values; the const
//! block at the bottom guards the scales at compile time.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.58);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.82);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.94);

    // Brand colors (violet scale, after the page's gradient header)
    pub const BRAND_200: Color = Color::from_rgb(0.82, 0.8, 0.97);
    pub const BRAND_400: Color = Color::from_rgb(0.55, 0.51, 0.92);
    pub const BRAND_500: Color = Color::from_rgb(0.4, 0.36, 0.85);
    pub const BRAND_600: Color = Color::from_rgb(0.32, 0.28, 0.72);
    pub const BRAND_800: Color = Color::from_rgb(0.2, 0.17, 0.48);

    // Semantic colors for the form banner
    pub const SUCCESS_500: Color = Color::from_rgb(0.157, 0.655, 0.271);
    pub const ERROR_500: Color = Color::from_rgb(0.863, 0.208, 0.271);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Tint behind the form banner.
    pub const BANNER_TINT: f32 = 0.2;
    /// Banner border strength.
    pub const BANNER_BORDER: f32 = 0.5;
    /// Secondary text.
    pub const MUTED: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the fixed navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 52.0;

    /// Fixed height of the testimonial slide area so the page does not
    /// jump between slides of different lengths.
    pub const SLIDE_HEIGHT: f32 = 220.0;

    /// Fixed width of one slide; the track viewport is exactly this wide so
    /// each slide fills it edge to edge.
    pub const SLIDE_WIDTH: f32 = 560.0;

    /// Maximum content column width.
    pub const CONTENT_WIDTH: f32 = 720.0;

    /// Diameter of a carousel indicator dot.
    pub const DOT_SIZE: f32 = 12.0;

    /// Carousel prev/next control width.
    pub const CONTROL_WIDTH: f32 = 48.0;

    /// Height of the contact form's multi-line message editor.
    pub const MESSAGE_FIELD_HEIGHT: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const TITLE_XL: f32 = 38.0;

    /// Section headings.
    pub const TITLE_LG: f32 = 26.0;

    /// Card titles.
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body text.
    pub const BODY: f32 = 15.0;

    /// Secondary labels, counter text, banner copy.
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill / circle shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BANNER_TINT < opacity::BANNER_BORDER);

    // Typography validation
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Radius validation
    assert!(radius::MD > radius::SM);
    assert!(radius::LG > radius::MD);

    // Color validation
    assert!(palette::BRAND_500.r >= 0.0 && palette::BRAND_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn semantic_colors_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::ERROR_500);
    }
}
