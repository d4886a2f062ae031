// SPDX-License-Identifier: MPL-2.0
//! Shared style functions for overlay chrome.
//!
//! Style closures capture the colors they need by value (iced `Color` is
//! `Copy`), so these helpers take the resolved [`ColorScheme`] and return
//! plain `Style` values usable from any widget's `.style(..)` closure.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container};
use iced::border::Radius;
use iced::{Background, Border, Color};

/// Full-screen dimming layer behind a sheet. `alpha` is the backdrop color's
/// base alpha scaled by the sheet's current dim fraction.
#[must_use]
pub fn backdrop(scheme: &ColorScheme, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..scheme.backdrop
        })),
        ..container::Style::default()
    }
}

/// The sheet surface: rounded top corners, raised shadow.
#[must_use]
pub fn sheet_surface(scheme: &ColorScheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        border: Border {
            color: scheme.surface_tertiary,
            width: border::WIDTH_SM,
            radius: Radius {
                top_left: radius::LG,
                top_right: radius::LG,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
        },
        shadow: shadow::LG,
        text_color: Some(scheme.text_primary),
        ..container::Style::default()
    }
}

/// The pill-shaped drag affordance at the top of a sheet.
#[must_use]
pub fn drag_handle(scheme: &ColorScheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme.surface_tertiary)),
        border: Border {
            radius: radius::PILL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// A toast card with a severity-colored accent border, faded to `alpha`
/// while entering, exiting, or being dragged sideways.
#[must_use]
pub fn toast_card(scheme: &ColorScheme, accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..scheme.surface_secondary
        })),
        border: Border {
            color: Color { a: alpha, ..accent },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(Color {
            a: alpha,
            ..scheme.text_primary
        }),
        ..container::Style::default()
    }
}

/// The linear countdown strip inside a toast.
#[must_use]
pub fn toast_progress(accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: alpha, ..accent })),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Borderless dismiss button used by toasts and sheet headers.
#[must_use]
pub fn dismiss_button(scheme: &ColorScheme, status: button::Status) -> button::Style {
    let text_color = scheme.text_secondary;
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: 0.15,
                ..scheme.text_tertiary
            })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            ..button::Style::default()
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            ..button::Style::default()
        },
    }
}
