// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Everything that mutates overlay state funnels through here: the modal
//! registry and the toast stack are owned by `App` and nothing else writes
//! to them, which is what keeps the single-writer invariants enforceable.

use super::{App, Message};
use crate::config::{self, MAX_TICK_DELTA_MS, MODAL_PAYLOAD_GRACE_MS};
use crate::store::catalog::{self, ProductId};
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::overlay::{ExpiryTicket, ModalId, ModalPayload};
use crate::ui::screens::{cart_sheet, catalog as catalog_screen, product_detail, settings_sheet};
use crate::ui::sheet::{self, Event as SheetEvent};
use iced::Task;
use std::time::{Duration, Instant};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Navbar(message) => self.handle_navbar(message),
            Message::Catalog(message) => self.handle_catalog(message),
            Message::ProductDetail(message) => self.handle_product_detail(message),
            Message::CartSheet(message) => self.handle_cart_sheet(message),
            Message::SettingsSheet(message) => self.handle_settings(message),
            Message::Sheet(id, interaction) => self.handle_sheet_interaction(id, interaction),
            Message::Notification(message) => {
                self.toasts.handle_message(&message, Instant::now());
                Task::none()
            }
            Message::OpenModal(payload) => self.open_modal(payload),
            Message::CloseModal => self.close_modal(),
            Message::ModalPayloadExpired(ticket) => {
                self.registry.expire(ticket);
                Task::none()
            }
            Message::Tick(now) => self.handle_tick(now),
        };

        if !self.needs_ticks() {
            // The animation clock is about to stop; forget the last tick so
            // a later restart does not see a huge stale delta.
            self.last_tick = None;
        }

        task
    }

    /// Whether the animation clock subscription should be running.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        !self.toasts.is_idle() || self.sheets.any_animating()
    }

    // --- Modal orchestration ----------------------------------------------

    /// Opens (or switches to) a named modal.
    pub fn open_modal(&mut self, payload: ModalPayload) -> Task<Message> {
        if payload.id() == ModalId::Cart {
            // Nested child dialogs reset when their host surface remounts.
            self.cart_sheet = cart_sheet::State::default();
        }
        self.registry.open(payload);
        self.sync_sheet_visibility();
        Task::none()
    }

    /// Closes the active modal and arms the payload grace window.
    pub fn close_modal(&mut self) -> Task<Message> {
        match self.registry.close() {
            Some(ticket) => {
                self.sync_sheet_visibility();
                schedule_payload_expiry(ticket)
            }
            None => Task::none(),
        }
    }

    /// Re-derives every sheet's lifecycle from the registry: the active
    /// surface enters, everything else runs its exit. This is the single
    /// place `visible` is computed, mirroring the binding discipline that
    /// no surface holds its own top-level visibility flag.
    fn sync_sheet_visibility(&mut self) {
        for id in ModalId::ALL {
            let active = self.registry.is_active(id);
            let sheet = self.sheets.get_mut(id);
            if active {
                sheet.open();
            } else if sheet.is_visible() {
                sheet.request_close();
            }
        }
    }

    fn handle_sheet_interaction(
        &mut self,
        id: ModalId,
        interaction: sheet::Interaction,
    ) -> Task<Message> {
        let sheet = self.sheets.get_mut(id);
        match interaction {
            sheet::Interaction::BackdropPressed => {
                if sheet.props().dismiss_on_backdrop {
                    sheet.request_close();
                }
            }
            sheet::Interaction::ClosePressed => sheet.request_close(),
            sheet::Interaction::SurfacePressed => sheet.pointer_pressed(),
            sheet::Interaction::SurfaceMoved(position) => {
                sheet.pointer_moved(position, Instant::now());
            }
            sheet::Interaction::SurfaceReleased => sheet.pointer_released(),
        }
        Task::none()
    }

    fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        let delta = match self.last_tick {
            Some(last) => {
                (now - last).min(Duration::from_millis(MAX_TICK_DELTA_MS))
            }
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);

        let mut tasks = Vec::new();
        for id in ModalId::ALL {
            if let Some(SheetEvent::Closed) = self.sheets.get_mut(id).tick(delta) {
                // A gesture or chrome dismissal finished its exit animation
                // while this surface was still the logically active modal:
                // clear the registry now. During a switch the registry has
                // already moved on and this event is informational only.
                if self.registry.is_active(id) {
                    if let Some(ticket) = self.registry.close() {
                        tasks.push(schedule_payload_expiry(ticket));
                    }
                }
            }
        }

        self.toasts.tick(delta);

        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    // --- Screen handlers --------------------------------------------------

    fn handle_navbar(&mut self, message: navbar::Message) -> Task<Message> {
        match message {
            navbar::Message::CartPressed => self.open_modal(ModalPayload::Cart),
            navbar::Message::SettingsPressed => self.open_modal(ModalPayload::Settings),
        }
    }

    fn handle_catalog(&mut self, message: catalog_screen::Message) -> Task<Message> {
        match message {
            catalog_screen::Message::Details(product_id) => {
                self.open_modal(ModalPayload::ProductDetail { product_id })
            }
            catalog_screen::Message::AddToCart(product_id) => {
                self.add_to_cart(product_id);
                Task::none()
            }
            catalog_screen::Message::ToggleFavorite(product_id) => {
                self.toggle_favorite(product_id);
                Task::none()
            }
        }
    }

    fn handle_product_detail(&mut self, message: product_detail::Message) -> Task<Message> {
        let Some(ModalPayload::ProductDetail { product_id }) =
            self.registry.payload_for(ModalId::ProductDetail).cloned()
        else {
            return Task::none();
        };
        match message {
            product_detail::Message::AddToCart => self.add_to_cart(product_id),
            product_detail::Message::ToggleFavorite => self.toggle_favorite(product_id),
        }
        Task::none()
    }

    fn handle_cart_sheet(&mut self, message: cart_sheet::Message) -> Task<Message> {
        self.cart_sheet.update(message);
        match message {
            cart_sheet::Message::Increment(product_id) => {
                self.cart.add_item(product_id);
                Task::none()
            }
            cart_sheet::Message::Decrement(product_id) => {
                let quantity = self.cart.quantity_of(product_id);
                self.cart
                    .update_quantity(product_id, quantity.saturating_sub(1));
                Task::none()
            }
            cart_sheet::Message::RemoveConfirmed(product_id) => {
                self.cart.remove_item(product_id);
                Task::none()
            }
            cart_sheet::Message::RemoveRequested(_) | cart_sheet::Message::RemoveCancelled => {
                Task::none()
            }
            cart_sheet::Message::PlaceOrder => self.place_order(),
        }
    }

    fn place_order(&mut self) -> Task<Message> {
        if self.cart.is_empty() {
            self.toasts.show(Notification::info("toast-cart-empty"));
            return Task::none();
        }
        self.order_seq += 1;
        let payload = ModalPayload::OrderDetail {
            order_ref: format!("VS-{:04}", 1000 + self.order_seq),
            total_cents: self.cart.total_cents(),
            item_count: self.cart.total_items(),
        };
        self.cart.clear();
        self.toasts.show(Notification::success("toast-order-placed"));
        self.open_modal(payload)
    }

    fn handle_settings(&mut self, message: settings_sheet::Message) -> Task<Message> {
        match message {
            settings_sheet::Message::LanguageSelected(locale) => {
                self.i18n.set_locale(locale.clone());
                self.config.language = Some(locale.to_string());
            }
            settings_sheet::Message::ThemeModeSelected(mode) => {
                self.theme_mode = mode;
                self.config.theme_mode = Some(mode);
            }
            settings_sheet::Message::ReduceMotionToggled(reduce) => {
                self.reduce_motion = reduce;
                self.sheets.set_reduce_motion(reduce);
                self.config.reduce_motion = Some(reduce);
            }
        }
        if config::save(&self.config).is_err() {
            self.toasts
                .show(Notification::error("toast-settings-save-failed"));
        }
        Task::none()
    }

    fn add_to_cart(&mut self, product_id: ProductId) {
        let Some(product) = catalog::by_id(product_id) else {
            return;
        };
        self.cart.add_item(product_id);
        self.toasts.show_cart_added(product.name);
    }

    fn toggle_favorite(&mut self, product_id: ProductId) {
        let key = if self.favorites.toggle_favorite(product_id) {
            "toast-favorite-added"
        } else {
            "toast-favorite-removed"
        };
        self.toasts.show(Notification::info(key));
    }
}

/// Arms the grace window: after it elapses the ticket comes back through
/// `Message::ModalPayloadExpired` and the registry drops the retained
/// payload, unless a newer open made the ticket stale.
fn schedule_payload_expiry(ticket: ExpiryTicket) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(Duration::from_millis(MODAL_PAYLOAD_GRACE_MS)).await;
            ticket
        },
        Message::ModalPayloadExpired,
    )
}
