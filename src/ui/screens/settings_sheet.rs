// SPDX-License-Identifier: MPL-2.0
//! Settings sheet content: language, appearance, and motion preferences.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, checkbox, Column, Row, Text};
use iced::Element;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    ReduceMotionToggled(bool),
}

pub fn view<'a>(
    i18n: &'a I18n,
    scheme: &ColorScheme,
    theme_mode: ThemeMode,
    reduce_motion: bool,
) -> Element<'a, Message> {
    let mut language_row = Row::new().spacing(spacing::SM);
    for locale in &i18n.available_locales {
        let translated_name = i18n.tr(&format!("language-name-{}", locale));
        let label = if translated_name.starts_with("MISSING:") {
            locale.to_string()
        } else {
            translated_name
        };

        let style = if i18n.current_locale() == locale {
            button::primary
        } else {
            button::secondary
        };
        language_row = language_row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::LanguageSelected(locale.clone()))
                .style(style)
                .padding(spacing::XS),
        );
    }

    let mut theme_row = Row::new().spacing(spacing::SM);
    for (mode, key) in [
        (ThemeMode::Light, "settings-theme-light"),
        (ThemeMode::Dark, "settings-theme-dark"),
        (ThemeMode::System, "settings-theme-system"),
    ] {
        let style = if mode == theme_mode {
            button::primary
        } else {
            button::secondary
        };
        theme_row = theme_row.push(
            button(Text::new(i18n.tr(key)).size(typography::BODY))
                .on_press(Message::ThemeModeSelected(mode))
                .style(style)
                .padding(spacing::XS),
        );
    }

    Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(i18n.tr("settings-language"))
                .size(typography::SUBTITLE)
                .color(scheme.text_secondary),
        )
        .push(language_row)
        .push(
            Text::new(i18n.tr("settings-theme"))
                .size(typography::SUBTITLE)
                .color(scheme.text_secondary),
        )
        .push(theme_row)
        .push(
            checkbox(reduce_motion)
                .label(i18n.tr("settings-reduce-motion"))
                .on_toggle(Message::ReduceMotionToggled)
                .size(typography::SUBTITLE),
        )
        .into()
}
