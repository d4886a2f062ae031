// SPDX-License-Identifier: MPL-2.0
//! Order confirmation sheet content.
//!
//! Purely presentational: the payload carries everything it renders, so it
//! stays readable through the grace window while the sheet animates out.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Row, Space, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(
    order_ref: &str,
    total_cents: u32,
    item_count: u32,
    i18n: &'a I18n,
    scheme: &ColorScheme,
) -> Element<'a, ()> {
    let reference_row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("order-reference"))
                .size(typography::BODY)
                .color(scheme.text_secondary),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(order_ref.to_string())
                .size(typography::BODY)
                .color(scheme.text_primary),
        );

    let total_row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("order-total"))
                .size(typography::BODY)
                .color(scheme.text_secondary),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(format!("${}.{:02}", total_cents / 100, total_cents % 100))
                .size(typography::BODY)
                .color(scheme.text_primary),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(icons::sized(
                    icons::checkmark(),
                    typography::DISPLAY,
                    scheme.success,
                ))
                .push(
                    Text::new(i18n.tr_with_args(
                        "order-items",
                        &[("count", &item_count.to_string())],
                    ))
                    .size(typography::SUBTITLE)
                    .color(scheme.text_primary),
                ),
        )
        .push(reference_row)
        .push(total_row)
        .into()
}
