// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the stacked notification overlay.
//!
//! Toasts are positioned absolutely from the top-right corner using the
//! stack's per-index offsets, so removing an earlier toast slides the rest
//! up on the next layout pass. The overlay sits above every modal.

use super::manager::{Card, Message, Stack};
use super::notification::Kind;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack as WidgetStack, Text};
use iced::{alignment, Element, Length, Padding};

/// Renders the toast overlay with all visible notifications.
pub fn view_overlay<'a>(
    stack: &'a Stack,
    i18n: &'a I18n,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let layers: Vec<Element<'a, Message>> = stack
        .visible()
        .enumerate()
        .map(|(index, card)| positioned(card, index, i18n, scheme))
        .collect();

    if layers.is_empty() {
        Space::new().into()
    } else {
        WidgetStack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Wraps one card in a full-size layer padded to its stacking position.
fn positioned<'a>(
    card: &'a Card,
    index: usize,
    i18n: &'a I18n,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let swipe = card.swipe_offset();
    let top = (Stack::offset_for(index) + card.slide() + swipe.y).max(0.0);
    // Horizontal drag shifts the card by trading right padding, which keeps
    // the layout anchored to the top-right corner.
    let right = (spacing::MD - swipe.x).max(0.0);

    Container::new(single(card, i18n, scheme))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(Padding {
            top,
            right,
            bottom: 0.0,
            left: 0.0,
        })
        .into()
}

/// Renders a single toast card.
fn single<'a>(card: &'a Card, i18n: &'a I18n, scheme: &ColorScheme) -> Element<'a, Message> {
    let notification = card.notification();
    let id = notification.id();
    let accent = notification.kind().color(scheme);
    let alpha = card.opacity();

    let message_text = if notification.message_args().is_empty() {
        i18n.tr(notification.message_key())
    } else {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    };

    let icon_glyph = match notification.kind() {
        Kind::Success => icons::checkmark(),
        Kind::Error => icons::cross(),
        Kind::Info => icons::info(),
    };
    let icon_widget = icons::sized(icon_glyph, sizing::ICON_MD, accent);

    let progress_width = sizing::TOAST_WIDTH * card.progress();
    let progress_style = styles::toast_progress(accent, alpha);
    let progress = Container::new(Space::new())
        .width(Length::Fixed(progress_width))
        .height(Length::Fixed(sizing::TOAST_PROGRESS_HEIGHT))
        .style(move |_| progress_style);

    let scheme_clone = scheme.clone();
    let dismiss = button(icons::sized(
        icons::close(),
        sizing::ICON_SM,
        scheme.text_secondary,
    ))
    .on_press(Message::Dismiss(id))
    .padding(spacing::XXS)
    .style(move |_, status| styles::dismiss_button(&scheme_clone, status));

    let body = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon_widget).padding(spacing::XXS))
        .push(
            Container::new(Text::new(message_text).size(typography::BODY))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    let card_style = styles::toast_card(scheme, accent, alpha);
    let surface = Container::new(Column::new().spacing(spacing::XS).push(body).push(progress))
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |_| card_style);

    mouse_area(surface)
        .on_press(Message::SwipePressed(id))
        .on_release(Message::SwipeReleased(id))
        .on_move(move |position| Message::SwipeMoved(id, position))
        .into()
}
