// SPDX-License-Identifier: MPL-2.0
//! Modal orchestration registry.
//!
//! The [`Registry`] is the single source of truth for which top-level
//! named overlay is currently active. Every surface that can present a
//! named modal derives its `visible` flag from the registry rather than
//! holding its own; nested child dialogs (a confirm row inside the cart
//! sheet, say) keep ordinary local booleans and are not represented here.
//!
//! Payloads are a tagged union with one variant per modal id, so an id can
//! never be paired with another modal's payload shape and unknown ids are
//! unrepresentable.
//!
//! After [`Registry::close`] the payload stays readable for a grace window
//! so the closing surface can keep rendering it through its exit animation.
//! The window is armed with a generation-stamped [`ExpiryTicket`]; a ticket
//! that outlives a newer `open` is silently ignored, so the delayed drop
//! can never clobber a fresh modal's payload.

use crate::store::catalog::ProductId;

/// Identifier of a top-level named modal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    ProductDetail,
    Cart,
    OrderDetail,
    Settings,
}

impl ModalId {
    /// All ids, in fixed stacking order for rendering.
    pub const ALL: [ModalId; 4] = [
        ModalId::ProductDetail,
        ModalId::Cart,
        ModalId::OrderDetail,
        ModalId::Settings,
    ];
}

/// Strongly-typed payload, one variant per modal id.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalPayload {
    ProductDetail { product_id: ProductId },
    Cart,
    OrderDetail { order_ref: String, total_cents: u32, item_count: u32 },
    Settings,
}

impl ModalPayload {
    /// The id this payload belongs to.
    #[must_use]
    pub fn id(&self) -> ModalId {
        match self {
            ModalPayload::ProductDetail { .. } => ModalId::ProductDetail,
            ModalPayload::Cart => ModalId::Cart,
            ModalPayload::OrderDetail { .. } => ModalId::OrderDetail,
            ModalPayload::Settings => ModalId::Settings,
        }
    }
}

/// Token returned by [`Registry::close`]; redeem it after the grace window
/// to drop the retained payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryTicket {
    generation: u64,
}

/// Process-wide modal state: at most one named modal active at a time.
#[derive(Debug, Default)]
pub struct Registry {
    active: Option<ModalId>,
    payload: Option<ModalPayload>,
    generation: u64,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates the modal the payload belongs to, replacing any previous
    /// one unconditionally: opening while another modal is open is a
    /// switch, not a stack.
    pub fn open(&mut self, payload: ModalPayload) {
        self.generation += 1;
        self.active = Some(payload.id());
        self.payload = Some(payload);
    }

    /// Deactivates the current modal, retaining its payload for the grace
    /// window. Returns the ticket to redeem when the window elapses, or
    /// `None` if nothing was active.
    pub fn close(&mut self) -> Option<ExpiryTicket> {
        if self.active.take().is_none() {
            return None;
        }
        self.generation += 1;
        Some(ExpiryTicket {
            generation: self.generation,
        })
    }

    /// Drops the retained payload if `ticket` is still current. A stale
    /// ticket (a newer `open` or `close` happened since) is a no-op.
    pub fn expire(&mut self, ticket: ExpiryTicket) {
        if ticket.generation == self.generation && self.active.is_none() {
            self.payload = None;
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<ModalId> {
        self.active
    }

    /// The binding discipline: a surface computes its `visible` flag from
    /// this, never from local state.
    #[must_use]
    pub fn is_active(&self, id: ModalId) -> bool {
        self.active == Some(id)
    }

    /// Payload readable by the surface bound to `id`, including during the
    /// post-close grace window.
    #[must_use]
    pub fn payload_for(&self, id: ModalId) -> Option<&ModalPayload> {
        self.payload.as_ref().filter(|payload| payload.id() == id)
    }
}
