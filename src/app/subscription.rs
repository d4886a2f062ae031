// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The animation clock only runs while something can move: a live toast or
//! a visible sheet. When every overlay is at rest the subscription drops
//! away and the app is fully event-driven again.

use super::{App, Message};
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        if self.needs_ticks() {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}
