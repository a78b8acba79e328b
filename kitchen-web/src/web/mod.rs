//! Browser binding
//!
//! ```text
//! click ──► data-action ──► UiCommand ──► Storefront::dispatch ──► Effect
//!                                              │
//!                                   CartChange │ (subscription)
//!                                              ▼
//!                                RedrawPlan: badge / panel / menu
//! ```

mod console;
mod dom;
mod local_storage;
mod render;

use std::rc::Rc;

use chrono::Datelike;
use kitchen_core::storage::{KeyValueStore, MemoryStorage};
use kitchen_core::{Config, Effect, FormOutcome, MenuRedraw, RedrawPlan, Storefront, UiCommand};
use shared::models::{ContactForm, ReservationForm};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlFormElement, Window};

use crate::page;
use dom::{by_id, field_value, listen, target_with_attr};
use local_storage::LocalStorage;

struct App {
    window: Window,
    document: Document,
    front: Storefront,
}

impl App {
    /// Dispatch and carry out the effect; failures are logged and the page redrawn
    fn run(self: &Rc<Self>, command: UiCommand) {
        match self.front.dispatch(command) {
            Ok(effect) => self.apply(effect),
            Err(e) => {
                tracing::warn!(code = %e.code, category = e.code.category().name(), "{}", e.message);
                self.redraw(&RedrawPlan {
                    badge: true,
                    panel: true,
                    menu: MenuRedraw::All,
                });
            }
        }
    }

    fn apply(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Navigate(page) => {
                if let Err(e) = self.window.location().set_href(&page) {
                    tracing::warn!("Navigation to {page} failed: {e:?}");
                }
            }
            Effect::Alert(message) => {
                let _ = self.window.alert_with_message(&message);
            }
            Effect::Confirm {
                message,
                on_confirm,
            } => {
                if self.window.confirm_with_message(&message).unwrap_or(false) {
                    self.run(*on_confirm);
                }
            }
            Effect::MenuFilterChanged(_) => {
                render::category_buttons(&self.document, &self.front.category_buttons());
                render::menu(&self.document, &self.front.menu_view());
            }
            Effect::PanelVisibility(open) => {
                render::panel_visibility(&self.document, open);
                if open {
                    render::cart_panel(&self.document, &self.front.cart_panel_view());
                }
            }
        }
    }

    fn redraw(&self, plan: &RedrawPlan) {
        if plan.badge {
            render::badge(&self.document, &self.front.badge());
        }
        if plan.panel {
            render::cart_panel(&self.document, &self.front.cart_panel_view());
        }
        match plan.menu {
            MenuRedraw::None => {}
            MenuRedraw::Card(id) => {
                if let Some(card) = self.front.menu_card(id) {
                    render::menu_card_label(&self.document, &card);
                }
            }
            MenuRedraw::All => render::menu(&self.document, &self.front.menu_view()),
        }
    }
}

/// Delegated click handler: any descendant button carrying `data-action`
fn wire_actions(app: &Rc<App>, container_id: &str) {
    let Some(container) = by_id(&app.document, container_id) else {
        return;
    };
    let app = Rc::clone(app);
    listen(&container, "click", false, move |event| {
        let Some(el) = target_with_attr(&event, page::ACTION_ATTR) else {
            return;
        };
        let action = el.get_attribute(page::ACTION_ATTR).unwrap_or_default();
        let value = el.get_attribute(page::VALUE_ATTR).unwrap_or_default();
        match page::command_from_attrs(&action, &value) {
            Some(command) => app.run(command),
            None => tracing::warn!(action, value, "Unknown button action"),
        }
    });
}

fn wire_button(app: &Rc<App>, id: &str, command: UiCommand) {
    let Some(btn) = by_id(&app.document, id) else {
        return;
    };
    let app = Rc::clone(app);
    listen(&btn, "click", false, move |_| app.run(command.clone()));
}

fn wire_categories(app: &Rc<App>) {
    let Ok(buttons) = app.document.query_selector_all(page::CATEGORY_BUTTONS) else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(btn) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let cat = btn.get_attribute(page::CATEGORY_ATTR).unwrap_or_default();
        let Some(command) = page::command_from_attrs("category", cat.trim()) else {
            tracing::warn!(cat, "Unknown category button");
            continue;
        };
        let app = Rc::clone(app);
        listen(&btn, "click", false, move |_| app.run(command.clone()));
    }
}

/// Another tab wrote the cart (or cleared storage)
fn wire_storage_events(app: &Rc<App>) {
    let app_ref = Rc::clone(app);
    listen(&app.window, "storage", false, move |event| {
        let Ok(event) = event.dyn_into::<web_sys::StorageEvent>() else {
            return;
        };
        let key = event.key();
        if page::storage_event_affects_cart(key.as_deref(), app_ref.front.cart().key()) {
            let summary = app_ref.front.reconcile();
            tracing::debug!(items = summary.item_count, "Cart reloaded from another tab");
        }
    });
}

/// One placeholder per `<img>`: the card's own fallback, else one built from `alt`
fn install_image_safety_net(window: &Window) {
    listen(window, "error", true, |event| {
        let Some(img) = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
        else {
            return;
        };
        if img.src().is_empty() || img.has_attribute(page::FALLEN_BACK_ATTR) {
            return;
        }
        let src = img
            .get_attribute(page::FALLBACK_ATTR)
            .unwrap_or_else(|| kitchen_core::placeholder::safety_net_source(Some(&img.alt())));
        let _ = img.set_attribute(page::FALLEN_BACK_ATTR, "true");
        img.set_src(&src);
    });
}

fn show_outcome(document: &Document, msg_id: &str, form: &HtmlFormElement, outcome: &FormOutcome) {
    if let Some(msg) = dom::by_id_html(document, msg_id) {
        let _ = msg
            .style()
            .set_property("color", page::status_color(outcome.status));
        msg.set_text_content(Some(&outcome.message));
    }
    if outcome.reset_form {
        form.reset();
    }
}

fn wire_forms(app: &Rc<App>) {
    let form = by_id(&app.document, page::RESERVE_FORM)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
    if let Some(form) = form {
        let app = Rc::clone(app);
        let target = form.clone();
        listen(&target, "submit", false, move |event| {
            event.prevent_default();
            let doc = &app.document;
            if by_id(doc, page::RESERVE_MSG).is_none() {
                return;
            }
            let input = ReservationForm {
                name: field_value(doc, page::R_NAME),
                date: field_value(doc, page::R_DATE),
                time: field_value(doc, page::R_TIME),
                people: field_value(doc, page::R_PEOPLE),
                phone: field_value(doc, page::R_PHONE),
            };
            let outcome = app.front.submit_reservation(&input);
            show_outcome(doc, page::RESERVE_MSG, &form, &outcome);
        });
    }

    let form = by_id(&app.document, page::CONTACT_FORM)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
    if let Some(form) = form {
        let app = Rc::clone(app);
        let target = form.clone();
        listen(&target, "submit", false, move |event| {
            event.prevent_default();
            let doc = &app.document;
            if by_id(doc, page::CONTACT_MSG).is_none() {
                return;
            }
            let input = ContactForm {
                name: field_value(doc, page::C_NAME),
                email: field_value(doc, page::C_EMAIL),
                message: field_value(doc, page::C_MESSAGE),
            };
            let outcome = app.front.submit_contact(&input);
            show_outcome(doc, page::CONTACT_MSG, &form, &outcome);
        });
    }
}

/// Close the mobile menu when an in-page link is followed
fn wire_mobile_nav(document: &Document) {
    let Ok(links) = document.query_selector_all(page::IN_PAGE_NAV_LINKS) else {
        return;
    };
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let doc = document.clone();
        listen(&link, "click", false, move |_| {
            if let Some(nav) = by_id(&doc, page::MAIN_NAV) {
                let _ = nav.set_attribute("data-open", "false");
            }
            if let Some(toggle) = by_id(&doc, page::MOBILE_TOGGLE) {
                let _ = toggle.set_attribute("aria-expanded", "false");
            }
        });
    }
}

fn open_storage(window: &Window) -> Rc<dyn KeyValueStore> {
    match LocalStorage::from_window(window) {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "localStorage unavailable, cart will not persist");
            Rc::new(MemoryStorage::new())
        }
    }
}

pub fn start() {
    console::init_logging();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    install_image_safety_net(&window);
    render::ensure_cart_chrome(&document);

    let storage = open_storage(&window);
    let app = Rc::new(App {
        front: Storefront::new(Config::default(), storage),
        window,
        document,
    });

    // redraw on every cart change
    let weak = Rc::downgrade(&app);
    app.front.cart().subscribe(move |change| {
        if let Some(app) = weak.upgrade() {
            app.redraw(&change.kind.redraw_plan());
        }
    });

    wire_actions(&app, page::MENU_GRID);
    wire_actions(&app, page::SPECIALS_GRID);
    wire_actions(&app, page::CART_ITEMS);
    wire_categories(&app);
    wire_button(&app, page::FLOATING_CART, UiCommand::OpenCart);
    wire_button(&app, page::CLOSE_CART, UiCommand::CloseCart);
    wire_button(&app, page::CLEAR_CART, UiCommand::ClearCart);
    wire_button(&app, page::CHECKOUT_BTN, UiCommand::Checkout);
    wire_button(&app, page::VIEW_ORDERS, UiCommand::ViewOrders);
    wire_storage_events(&app);
    wire_forms(&app);
    wire_mobile_nav(&app.document);

    if let Some(year) = by_id(&app.document, page::YEAR) {
        year.set_text_content(Some(&chrono::Local::now().year().to_string()));
    }

    render::category_buttons(&app.document, &app.front.category_buttons());
    render::specials(&app.document, &app.front.specials_view());
    app.redraw(&RedrawPlan {
        badge: true,
        panel: true,
        menu: MenuRedraw::All,
    });
    tracing::info!(items = app.front.cart().item_count(), "Storefront ready");
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    start();
}
