// SPDX-License-Identifier: MPL-2.0
//! `vitashelf` is a catalog-browsing and checkout UI for a supplements
//! storefront, built with the Iced GUI framework.
//!
//! Its core is the gesture-driven overlay system: a drag-to-dismiss bottom
//! sheet controller, a swipe-dismissable toast stack, and a modal registry
//! that routes a single logical "active modal" across the application. It
//! also demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod store;
pub mod ui;
