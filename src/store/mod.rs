// SPDX-License-Identifier: MPL-2.0
//! Storefront data collaborators: the static catalog and the in-memory
//! cart and favorites state.
//!
//! These are data providers only. Screens read them to decide what payload
//! to hand to the modal registry or what message to hand to the toast
//! stack; all mutation goes through their methods and nothing here is
//! persisted.

pub mod cart;
pub mod catalog;
pub mod favorites;

pub use cart::Cart;
pub use catalog::{Product, ProductId};
pub use favorites::Favorites;
