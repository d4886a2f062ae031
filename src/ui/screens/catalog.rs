// SPDX-License-Identifier: MPL-2.0
//! Catalog screen: the scrollable product list every overlay is launched
//! from.

use crate::i18n::fluent::I18n;
use crate::store::catalog::{self, Product, ProductId};
use crate::store::Favorites;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Open the product detail modal.
    Details(ProductId),
    /// Add one unit to the cart (fires the cart toast).
    AddToCart(ProductId),
    /// Toggle the favorite flag (fires an info toast).
    ToggleFavorite(ProductId),
}

pub fn view<'a>(
    i18n: &'a I18n,
    scheme: &ColorScheme,
    favorites: &Favorites,
) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::SM);

    for product in catalog::all() {
        list = list.push(row(product, i18n, scheme, favorites.is_favorite(product.id)));
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(i18n.tr("catalog-title"))
                .size(typography::DISPLAY)
                .color(scheme.text_primary),
        )
        .push(scrollable(list).height(Length::Fill));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

fn row<'a>(
    product: &'a Product,
    i18n: &'a I18n,
    scheme: &ColorScheme,
    is_favorite: bool,
) -> Element<'a, Message> {
    let heart = if is_favorite {
        icons::sized(icons::heart(), typography::SUBTITLE, scheme.error)
    } else {
        icons::sized(icons::heart_outline(), typography::SUBTITLE, scheme.text_tertiary)
    };

    let scheme_favorite = scheme.clone();
    let favorite_button = button(heart)
        .on_press(Message::ToggleFavorite(product.id))
        .padding(spacing::XS)
        .style(move |_, status| styles::dismiss_button(&scheme_favorite, status));

    let info = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(product.name)
                .size(typography::SUBTITLE)
                .color(scheme.text_primary),
        )
        .push(
            Text::new(product.tagline)
                .size(typography::CAPTION)
                .color(scheme.text_secondary),
        )
        .push(
            Text::new(format!(
                "{}  ·  {}",
                product.price_label(),
                i18n.tr_with_args(
                    "catalog-per-serving",
                    &[("count", &product.servings.to_string())]
                )
            ))
            .size(typography::CAPTION)
            .color(scheme.text_tertiary),
        );

    let add_button = button(Text::new(i18n.tr("catalog-add-to-cart")).size(typography::BODY))
        .on_press(Message::AddToCart(product.id))
        .style(button::primary)
        .padding(spacing::XS);

    let details_button = button(Text::new(i18n.tr("catalog-details")).size(typography::BODY))
        .on_press(Message::Details(product.id))
        .style(button::secondary)
        .padding(spacing::XS);

    let card = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(favorite_button)
        .push(info)
        .push(Space::new().width(Length::Fill))
        .push(details_button)
        .push(add_button);

    let background = scheme.surface_secondary;
    let outline = scheme.surface_tertiary;
    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |_| iced::widget::container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: outline,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..iced::widget::container::Style::default()
        })
        .into()
}
