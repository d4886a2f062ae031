// SPDX-License-Identifier: MPL-2.0
//! Bottom sheet: a bottom-anchored overlay panel that slides in, can be
//! dragged downward to dismiss, and reports its close exactly once.
//!
//! # Components
//!
//! - [`controller`] - the lifecycle state machine (phases, thresholds,
//!   animations, one-shot close event)
//! - [`view`] - the Iced widget tree for backdrop, drag handle, and content
//!
//! The controller is pure state: it never touches widgets and is fully
//! exercised by tests without a renderer. The view maps pointer interactions
//! back into controller calls through the host's message type.

pub mod controller;
pub mod view;

pub use controller::{Controller, Event, Phase, Props};
pub use view::{view, Interaction};
