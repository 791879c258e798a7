// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Form card surface.
///
/// Derived from the active Iced `Theme` background with a slight opacity, so
/// the card stays readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Selected-video preview inside the form.
pub fn preview(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Status overlay drawn on top of the scene surface.
pub fn scene_status(is_error: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: if is_error {
                palette::ERROR_500
            } else {
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::WHITE
                }
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Background of the scene surface.
#[must_use]
pub fn scene_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_status_border_marks_errors() {
        let theme = Theme::Dark;
        let error = scene_status(true)(&theme);
        let info = scene_status(false)(&theme);
        assert_eq!(error.border.color, palette::ERROR_500);
        assert_ne!(info.border.color, palette::ERROR_500);
    }

    #[test]
    fn preview_has_brand_border() {
        let style = preview(&Theme::Light);
        assert_eq!(style.border.color, palette::PRIMARY_500);
    }
}
