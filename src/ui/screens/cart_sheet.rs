// SPDX-License-Identifier: MPL-2.0
//! Cart sheet content.
//!
//! The remove-confirmation row is a nested child dialog: it lives in local
//! [`State`] as a plain option, deliberately outside the modal registry,
//! because the single-active-id invariant applies only to top-level named
//! surfaces.

use crate::i18n::fluent::I18n;
use crate::store::catalog::{self, ProductId};
use crate::store::Cart;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, scrollable, Column, Row, Space, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Increment(ProductId),
    Decrement(ProductId),
    RemoveRequested(ProductId),
    RemoveConfirmed(ProductId),
    RemoveCancelled,
    PlaceOrder,
}

/// Local sheet state; reset every time the cart modal opens.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    /// Line currently showing its inline remove confirmation.
    pub pending_remove: Option<ProductId>,
}

impl State {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::RemoveRequested(id) => self.pending_remove = Some(id),
            Message::RemoveConfirmed(_) | Message::RemoveCancelled => self.pending_remove = None,
            _ => {}
        }
    }
}

pub fn view<'a>(
    state: &State,
    cart: &'a Cart,
    i18n: &'a I18n,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    if cart.is_empty() {
        return Column::new()
            .push(
                Text::new(i18n.tr("cart-empty"))
                    .size(typography::BODY)
                    .color(scheme.text_secondary),
            )
            .into();
    }

    let mut lines = Column::new().spacing(spacing::SM);
    for item in cart.items() {
        let Some(product) = catalog::by_id(item.product_id) else {
            continue;
        };

        if state.pending_remove == Some(item.product_id) {
            lines = lines.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(
                        Text::new(
                            i18n.tr_with_args("cart-item-remove-confirm", &[("name", product.name)]),
                        )
                        .size(typography::BODY)
                        .color(scheme.text_primary),
                    )
                    .push(Space::new().width(Length::Fill))
                    .push(
                        button(Text::new(i18n.tr("cart-item-remove-yes")).size(typography::BODY))
                            .on_press(Message::RemoveConfirmed(item.product_id))
                            .style(button::danger)
                            .padding(spacing::XS),
                    )
                    .push(
                        button(Text::new(i18n.tr("cart-item-remove-no")).size(typography::BODY))
                            .on_press(Message::RemoveCancelled)
                            .style(button::secondary)
                            .padding(spacing::XS),
                    ),
            );
            continue;
        }

        lines = lines.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(
                            Text::new(product.name)
                                .size(typography::BODY)
                                .color(scheme.text_primary),
                        )
                        .push(
                            Text::new(product.price_label())
                                .size(typography::CAPTION)
                                .color(scheme.text_tertiary),
                        ),
                )
                .push(Space::new().width(Length::Fill))
                .push(
                    button(Text::new("-").size(typography::BODY))
                        .on_press(Message::Decrement(item.product_id))
                        .style(button::secondary)
                        .padding(spacing::XS),
                )
                .push(
                    Text::new(item.quantity.to_string())
                        .size(typography::BODY)
                        .color(scheme.text_primary),
                )
                .push(
                    button(Text::new("+").size(typography::BODY))
                        .on_press(Message::Increment(item.product_id))
                        .style(button::secondary)
                        .padding(spacing::XS),
                )
                .push(
                    button(Text::new(i18n.tr("cart-item-remove")).size(typography::CAPTION))
                        .on_press(Message::RemoveRequested(item.product_id))
                        .style(button::text)
                        .padding(spacing::XS),
                ),
        );
    }

    let total_cents = cart.total_cents();
    let total_row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("cart-total"))
                .size(typography::SUBTITLE)
                .color(scheme.text_secondary),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(format!("${}.{:02}", total_cents / 100, total_cents % 100))
                .size(typography::SUBTITLE)
                .color(scheme.text_primary),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(scrollable(lines).height(Length::Fill))
        .push(total_row)
        .push(
            button(Text::new(i18n.tr("cart-place-order")).size(typography::BODY))
                .on_press(Message::PlaceOrder)
                .style(button::primary)
                .padding(spacing::SM)
                .width(Length::Fill),
        )
        .into()
}
