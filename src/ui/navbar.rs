// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: storefront title plus the cart and settings entry
//! points that open their named modals.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Background, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CartPressed,
    SettingsPressed,
}

pub fn view<'a>(i18n: &'a I18n, scheme: &ColorScheme, cart_count: u32) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("app-title"))
        .size(typography::TITLE)
        .color(scheme.brand_primary);

    let cart_label = if cart_count > 0 {
        format!("{} {} ({})", icons::cart(), i18n.tr("navbar-cart"), cart_count)
    } else {
        format!("{} {}", icons::cart(), i18n.tr("navbar-cart"))
    };

    let cart_button = button(Text::new(cart_label).size(typography::BODY))
        .on_press(Message::CartPressed)
        .style(button::primary)
        .padding(spacing::SM);

    let settings_button = button(
        Text::new(format!("{} {}", icons::gear(), i18n.tr("navbar-settings")))
            .size(typography::BODY),
    )
    .on_press(Message::SettingsPressed)
    .style(button::secondary)
    .padding(spacing::SM);

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(cart_button)
        .push(settings_button);

    let background = scheme.surface_secondary;
    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::SM, spacing::MD])
        .style(move |_| iced::widget::container::Style {
            background: Some(Background::Color(background)),
            ..iced::widget::container::Style::default()
        })
        .into()
}
