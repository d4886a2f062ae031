// SPDX-License-Identifier: MPL-2.0
//! Product detail sheet content.
//!
//! Rendered inside a bottom sheet when the `ProductDetail` modal is
//! active; the payload carries the product id.

use crate::i18n::fluent::I18n;
use crate::store::catalog::Product;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Row, Space, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    AddToCart,
    ToggleFavorite,
}

pub fn view<'a>(
    product: &'a Product,
    i18n: &'a I18n,
    scheme: &ColorScheme,
    is_favorite: bool,
) -> Element<'a, Message> {
    let facts = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(product.tagline)
                .size(typography::BODY)
                .color(scheme.text_secondary),
        )
        .push(
            Text::new(i18n.tr_with_args(
                "catalog-per-serving",
                &[("count", &product.servings.to_string())],
            ))
            .size(typography::CAPTION)
            .color(scheme.text_tertiary),
        );

    let favorite_label = if is_favorite {
        format!("{} {}", icons::heart(), i18n.tr("product-unfavorite"))
    } else {
        format!("{} {}", icons::heart_outline(), i18n.tr("product-favorite"))
    };

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("product-add-to-cart")).size(typography::BODY))
                .on_press(Message::AddToCart)
                .style(button::primary)
                .padding(spacing::SM),
        )
        .push(
            button(Text::new(favorite_label).size(typography::BODY))
                .on_press(Message::ToggleFavorite)
                .style(button::secondary)
                .padding(spacing::SM),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(product.name)
                .size(typography::TITLE)
                .color(scheme.text_primary),
        )
        .push(facts)
        .push(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(
                    Text::new(product.price_label())
                        .size(typography::TITLE)
                        .color(scheme.brand_primary),
                )
                .push(Space::new().width(Length::Fill)),
        )
        .push(actions)
        .into()
}
