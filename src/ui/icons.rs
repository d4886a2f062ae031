// SPDX-License-Identifier: MPL-2.0
//! Semantic text glyphs used across the UI.
//!
//! Icons are rendered as text so they inherit the active color scheme; the
//! mapping from meaning to glyph lives here so call sites stay semantic.

use iced::widget::{text, Text};
use iced::Color;

pub fn checkmark() -> &'static str {
    "\u{2713}" // ✓
}

pub fn cross() -> &'static str {
    "\u{2717}" // ✗
}

pub fn info() -> &'static str {
    "i"
}

pub fn heart() -> &'static str {
    "\u{2665}" // ♥
}

pub fn heart_outline() -> &'static str {
    "\u{2661}" // ♡
}

pub fn cart() -> &'static str {
    "\u{2630}" // ☰ (stacked shelf)
}

pub fn gear() -> &'static str {
    "\u{2699}" // ⚙
}

pub fn close() -> &'static str {
    "\u{00d7}" // ×
}

/// Builds a sized, colored glyph widget.
pub fn sized(glyph: &str, size: f32, color: Color) -> Text<'_> {
    text(glyph).size(size).color(color)
}
