// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog screen and
//! the overlay system.
//!
//! The `App` struct wires together the modal registry, the per-modal sheet
//! controllers, the toast stack, and the store collaborators, and
//! translates messages into side effects like config persistence. Policy
//! decisions (which modal owns which sheet, when the grace window is armed,
//! when the animation clock runs) live next to the update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsHandle;
use crate::i18n::fluent::I18n;
use crate::store::{Cart, Favorites};
use crate::ui::notifications;
use crate::ui::overlay::{ModalId, Registry};
use crate::ui::screens::cart_sheet;
use crate::ui::sheet::{Controller, Props};
use crate::ui::theming::ThemeMode;
use iced::window;
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// One sheet controller per named modal surface.
pub struct Sheets {
    product: Controller,
    cart: Controller,
    order: Controller,
    settings: Controller,
}

impl Sheets {
    fn new(reduce_motion: bool) -> Self {
        Self {
            product: Controller::new(
                Props::new().height(440.0).reduce_motion(reduce_motion),
            ),
            cart: Controller::new(
                Props::new()
                    .height(520.0)
                    .keyboard_avoiding(true)
                    .reduce_motion(reduce_motion),
            ),
            order: Controller::new(
                Props::new()
                    .height(360.0)
                    .show_drag_handle(false)
                    .reduce_motion(reduce_motion),
            ),
            settings: Controller::new(
                Props::new().height(460.0).reduce_motion(reduce_motion),
            ),
        }
    }

    pub fn get(&self, id: ModalId) -> &Controller {
        match id {
            ModalId::ProductDetail => &self.product,
            ModalId::Cart => &self.cart,
            ModalId::OrderDetail => &self.order,
            ModalId::Settings => &self.settings,
        }
    }

    pub fn get_mut(&mut self, id: ModalId) -> &mut Controller {
        match id {
            ModalId::ProductDetail => &mut self.product,
            ModalId::Cart => &mut self.cart,
            ModalId::OrderDetail => &mut self.order,
            ModalId::Settings => &mut self.settings,
        }
    }

    pub(crate) fn any_animating(&self) -> bool {
        ModalId::ALL.iter().any(|id| self.get(*id).is_animating())
    }

    fn set_reduce_motion(&mut self, reduce: bool) {
        for id in ModalId::ALL {
            self.get_mut(id).set_reduce_motion(reduce);
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    reduce_motion: bool,
    registry: Registry,
    sheets: Sheets,
    toasts: notifications::Stack,
    cart: Cart,
    favorites: Favorites,
    cart_sheet: cart_sheet::State,
    /// Sequence for fabricated order references.
    order_seq: u32,
    last_tick: Option<Instant>,
    diagnostics: DiagnosticsHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_modal", &self.registry.active())
            .field("toasts", &self.toasts.visible_count())
            .field("cart_items", &self.cart.total_items())
            .finish()
    }
}

impl App {
    pub fn new(flags: Flags) -> (Self, iced::Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = config.theme_mode.unwrap_or_default();
        let reduce_motion = config.reduce_motion.unwrap_or(false);

        let diagnostics = DiagnosticsHandle::new();
        let mut toasts = notifications::Stack::new();
        toasts.set_diagnostics(diagnostics.clone());

        (
            Self {
                i18n,
                config,
                theme_mode,
                reduce_motion,
                registry: Registry::new(),
                sheets: Sheets::new(reduce_motion),
                toasts,
                cart: Cart::new(),
                favorites: Favorites::new(),
                cart_sheet: cart_sheet::State::default(),
                order_seq: 0,
                last_tick: None,
                diagnostics,
            },
            iced::Task::none(),
        )
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    pub fn theme(&self) -> iced::Theme {
        self.theme_mode.iced_theme()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsHandle {
        &self.diagnostics
    }

    // Read-only state accessors, used by views and integration tests.

    #[must_use]
    pub fn active_modal(&self) -> Option<ModalId> {
        self.registry.active()
    }

    #[must_use]
    pub fn sheet(&self, id: ModalId) -> &Controller {
        self.sheets.get(id)
    }

    #[must_use]
    pub fn toasts(&self) -> &notifications::Stack {
        &self.toasts
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Flags::default()).0
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
