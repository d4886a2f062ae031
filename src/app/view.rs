// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the catalog screen, any visible sheets (a surface
//! mid-exit renders under the newly active one during a switch), and the
//! toast overlay above everything.

use super::{App, Message};
use crate::store::catalog;
use crate::ui::navbar;
use crate::ui::notifications::toast;
use crate::ui::overlay::{ModalId, ModalPayload};
use crate::ui::screens::{cart_sheet, order_detail, product_detail, settings_sheet};
use crate::ui::sheet;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Space, Stack};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let scheme = self.theme_mode.scheme();

        let base = Column::new()
            .push(navbar::view(&self.i18n, &scheme, self.cart.total_items()).map(Message::Navbar))
            .push(
                crate::ui::screens::catalog::view(&self.i18n, &scheme, &self.favorites)
                    .map(Message::Catalog),
            );

        let mut layers: Vec<Element<'_, Message>> = vec![base.into()];

        // Exiting sheets first, the active one on top.
        for id in ModalId::ALL {
            if self.sheets.get(id).is_visible() && !self.registry.is_active(id) {
                layers.push(self.sheet_layer(id, &scheme));
            }
        }
        if let Some(active) = self.registry.active() {
            if self.sheets.get(active).is_visible() {
                layers.push(self.sheet_layer(active, &scheme));
            }
        }

        if !self.toasts.is_idle() {
            layers.push(toast::view_overlay(&self.toasts, &self.i18n, &scheme).map(Message::Notification));
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn sheet_layer<'a>(&'a self, id: ModalId, scheme: &ColorScheme) -> Element<'a, Message> {
        let controller = self.sheets.get(id);

        let (title, content): (String, Element<'a, Message>) = match id {
            ModalId::ProductDetail => {
                let content = match self.registry.payload_for(id) {
                    Some(ModalPayload::ProductDetail { product_id }) => {
                        match catalog::by_id(*product_id) {
                            Some(product) => product_detail::view(
                                product,
                                &self.i18n,
                                scheme,
                                self.favorites.is_favorite(product.id),
                            )
                            .map(Message::ProductDetail),
                            None => Space::new().into(),
                        }
                    }
                    _ => Space::new().into(),
                };
                (self.i18n.tr("product-sheet-title"), content)
            }
            ModalId::Cart => (
                self.i18n.tr("cart-sheet-title"),
                cart_sheet::view(&self.cart_sheet, &self.cart, &self.i18n, scheme)
                    .map(Message::CartSheet),
            ),
            ModalId::OrderDetail => {
                let content = match self.registry.payload_for(id) {
                    Some(ModalPayload::OrderDetail {
                        order_ref,
                        total_cents,
                        item_count,
                    }) => order_detail::view(order_ref, *total_cents, *item_count, &self.i18n, scheme)
                        .map(|()| Message::CloseModal),
                    _ => Space::new().into(),
                };
                (self.i18n.tr("order-sheet-title"), content)
            }
            ModalId::Settings => (
                self.i18n.tr("settings-sheet-title"),
                settings_sheet::view(&self.i18n, scheme, self.theme_mode, self.reduce_motion)
                    .map(Message::SettingsSheet),
            ),
        };

        sheet::view(controller, scheme, title, content, move |interaction| {
            Message::Sheet(id, interaction)
        })
    }
}
