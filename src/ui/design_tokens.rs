// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the upload form, scene overlay, navbar and toasts.
//!
//! Views never hardcode colors or measurements; they pick from the scales
//! below so both screens stay visually consistent.
//!
//! ```
//! use splat_studio::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scene_overlay = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! let form_gap = spacing::LG;
//! # let _ = (scene_overlay, form_gap);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Scene canvas backdrop.
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    /// Dark theme tab fill.
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    /// Captions, hints and muted borders.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    /// Disabled submit and hovered tab fill.
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    /// Light theme tab fill.
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Submit button and active tab.
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    /// Hover state of primary controls.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    /// Border of primary controls.
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Notification severities and inline validation errors.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    /// Hovered dismiss button, error overlay border.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Pressed dismiss button.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Scene status overlay background.
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Form card and toast surfaces.
    pub const SURFACE: f32 = 0.95;
}

/// 4px steps.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Upload arrow inside the empty drop zone.
    pub const DROP_GLYPH: f32 = 48.0;
    /// Upload form card.
    pub const FORM_MAX_WIDTH: f32 = 480.0;
    /// Scene status overlay.
    pub const OVERLAY_MAX_WIDTH: f32 = 360.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// Form heading.
    pub const TITLE_MD: f32 = 20.0;
    /// Selected file name, toast glyph.
    pub const BODY_LG: f32 = 16.0;
    /// Labels, inputs and tab captions.
    pub const BODY: f32 = 14.0;
    /// Hints, progress label, inline error.
    pub const BODY_SM: f32 = 13.0;
    /// File details and scene error detail.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Resting buttons and the form card.
    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Hovered buttons and toasts.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::LG > spacing::MD && spacing::MD > spacing::SM);
    assert!(opacity::OVERLAY_STRONG < opacity::SURFACE && opacity::SURFACE < 1.0);
    // Toasts and the scene overlay stay narrower than the form card
    assert!(sizing::TOAST_WIDTH < sizing::FORM_MAX_WIDTH);
    assert!(sizing::OVERLAY_MAX_WIDTH < sizing::FORM_MAX_WIDTH);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            palette::SUCCESS_500,
            palette::INFO_500,
            palette::WARNING_500,
            palette::ERROR_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn form_fits_minimum_window_width() {
        let min_width = crate::app::MIN_WINDOW_WIDTH as f32;
        assert!(sizing::FORM_MAX_WIDTH <= min_width - 2.0 * spacing::MD);
    }
}
