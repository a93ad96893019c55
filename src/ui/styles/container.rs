// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Frame around one result tile.
///
/// The color is derived from the active Iced `Theme` background so tiles stay
/// readable in both light and dark modes.
pub fn tile(theme: &Theme) -> container::Style {
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
            radius: radius::MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Banner used for error messages.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.12,
            ..palette::ERROR_500
        })),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette::ERROR_500,
        },
        text_color: Some(palette::ERROR_500),
        ..Default::default()
    }
}
