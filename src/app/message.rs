// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::overlay::{ExpiryTicket, ModalId, ModalPayload};
use crate::ui::screens::{cart_sheet, catalog, product_detail, settings_sheet};
use crate::ui::sheet;
use std::time::Instant;

/// CLI flags collected by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub lang: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Catalog(catalog::Message),
    ProductDetail(product_detail::Message),
    CartSheet(cart_sheet::Message),
    SettingsSheet(settings_sheet::Message),
    /// Chrome/pointer interaction on a named modal's sheet surface.
    Sheet(ModalId, sheet::Interaction),
    Notification(notifications::Message),
    /// The only sanctioned way to present a top-level overlay.
    OpenModal(ModalPayload),
    /// The only sanctioned way to dismiss the active overlay.
    CloseModal,
    /// The grace window for a closed modal's payload elapsed.
    ModalPayloadExpired(ExpiryTicket),
    /// Animation clock tick.
    Tick(Instant),
}
