//! Storefront - page state and command dispatch
//!
//! Owns the catalog, the cart store, the local history and the two bits of
//! view state that are not persisted (active category, panel open). Hosts
//! subscribe to [`Storefront::cart`] for redraws and carry out the returned
//! [`Effect`]s.

use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDateTime;
use shared::error::AppResult;
use shared::models::{CategoryFilter, ContactForm, LineKey, ReservationForm};
use shared::types::Timestamp;
use shared::util::now_millis;

use crate::cart::{CartStore, CartSummary};
use crate::catalog::Catalog;
use crate::command::{Effect, UiCommand};
use crate::core::Config;
use crate::forms::{self, FormOutcome};
use crate::history::{OrderHistory, ReservationLog};
use crate::storage::KeyValueStore;
use crate::view::{
    self, BadgeView, CartPanelView, CategoryButtonView, MenuCardView, MenuView, SpecialCardView,
};

pub const CLEAR_CART_PROMPT: &str = "Clear cart?";

pub fn past_orders_message(count: usize) -> String {
    format!("You have {count} past orders (stored locally).")
}

pub struct Storefront {
    config: Config,
    catalog: Catalog,
    cart: CartStore,
    reservations: ReservationLog,
    orders: OrderHistory,
    filter: Cell<CategoryFilter>,
    panel_open: Cell<bool>,
}

impl Storefront {
    /// Built-in catalog over the given storage backend
    pub fn new(config: Config, storage: Rc<dyn KeyValueStore>) -> Self {
        Self::with_catalog(config, storage, Catalog::builtin())
    }

    pub fn with_catalog(config: Config, storage: Rc<dyn KeyValueStore>, catalog: Catalog) -> Self {
        let cart = CartStore::new(Rc::clone(&storage), config.cart_key.clone());
        let reservations = ReservationLog::new(Rc::clone(&storage), config.reservations_key.clone());
        let orders = OrderHistory::new(storage, config.orders_key.clone());
        Self {
            config,
            catalog,
            cart,
            reservations,
            orders,
            filter: Cell::new(CategoryFilter::All),
            panel_open: Cell::new(false),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn reservations(&self) -> &ReservationLog {
        &self.reservations
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter.get()
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open.get()
    }

    fn currency(&self) -> &str {
        &self.config.currency_symbol
    }

    // ========== Commands ==========

    /// Apply one UI command
    ///
    /// Cart mutations notify subscribers before this returns. Errors are
    /// unknown catalog ids, missing cart lines and storage failures; the
    /// cart is left as it was in every case.
    pub fn dispatch(&self, command: UiCommand) -> AppResult<Effect> {
        tracing::debug!(?command, "Dispatch");
        match command {
            UiCommand::SelectCategory(filter) => {
                self.filter.set(filter);
                Ok(Effect::MenuFilterChanged(filter))
            }
            UiCommand::AddToCart(id) => {
                let item = self.catalog.item(id)?;
                self.cart
                    .add_or_increment(LineKey::Menu(id), &item.name, item.price)?;
                Ok(Effect::None)
            }
            UiCommand::OrderNow(id) => {
                let item = self.catalog.item(id)?;
                self.cart
                    .ensure_at_least_one(LineKey::Menu(id), &item.name, item.price)?;
                Ok(self.navigate_to_order())
            }
            UiCommand::OrderSpecial(id) => {
                let special = self.catalog.special(&id)?;
                self.cart
                    .add_or_increment(LineKey::special(&special.id), &special.title, special.price)?;
                Ok(Effect::None)
            }
            UiCommand::Increment(key) => {
                self.cart.increment(&key)?;
                Ok(Effect::None)
            }
            UiCommand::Decrement(key) => {
                self.cart.decrement(&key)?;
                Ok(Effect::None)
            }
            UiCommand::Remove(key) => {
                self.cart.remove(&key)?;
                Ok(Effect::None)
            }
            UiCommand::OpenCart => {
                self.panel_open.set(true);
                Ok(Effect::PanelVisibility(true))
            }
            UiCommand::CloseCart => {
                self.panel_open.set(false);
                Ok(Effect::PanelVisibility(false))
            }
            UiCommand::ClearCart => Ok(Effect::Confirm {
                message: CLEAR_CART_PROMPT.to_string(),
                on_confirm: Box::new(UiCommand::ConfirmClearCart),
            }),
            UiCommand::ConfirmClearCart => {
                self.cart.clear()?;
                Ok(Effect::None)
            }
            UiCommand::Checkout => Ok(self.navigate_to_order()),
            UiCommand::ViewOrders => Ok(Effect::Alert(past_orders_message(self.orders.count()))),
        }
    }

    fn navigate_to_order(&self) -> Effect {
        Effect::Navigate(self.config.order_page.clone())
    }

    /// Re-read the cart after another tab changed it
    pub fn reconcile(&self) -> CartSummary {
        self.cart.reconcile()
    }

    // ========== Views ==========

    pub fn menu_view(&self) -> MenuView {
        view::project_menu(&self.catalog, &self.cart.get(), self.filter.get(), self.currency())
    }

    /// Single card for a partial redraw; `None` if the item is unknown or filtered out
    pub fn menu_card(&self, id: i64) -> Option<MenuCardView> {
        let item = self.catalog.item(id).ok()?;
        if !self.filter.get().matches(item.category) {
            return None;
        }
        Some(view::project_menu_card(item, &self.cart.get(), self.currency()))
    }

    pub fn category_buttons(&self) -> Vec<CategoryButtonView> {
        view::project_category_buttons(self.filter.get())
    }

    pub fn specials_view(&self) -> Vec<SpecialCardView> {
        view::project_specials(&self.catalog, self.currency())
    }

    pub fn cart_panel_view(&self) -> CartPanelView {
        view::project_cart_panel(&self.cart.get(), self.currency())
    }

    pub fn badge(&self) -> BadgeView {
        view::project_badge(&self.cart.summary())
    }

    // ========== Forms ==========

    /// Submit against the local clock
    pub fn submit_reservation(&self, form: &ReservationForm) -> FormOutcome {
        let now = chrono::Local::now().naive_local();
        self.submit_reservation_at(form, now, now_millis())
    }

    pub fn submit_reservation_at(
        &self,
        form: &ReservationForm,
        now: NaiveDateTime,
        id: Timestamp,
    ) -> FormOutcome {
        forms::submit_reservation(&self.reservations, form, now, id)
    }

    pub fn submit_contact(&self, form: &ContactForm) -> FormOutcome {
        forms::submit_contact(form)
    }
}
