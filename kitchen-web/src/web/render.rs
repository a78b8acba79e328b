//! Render view models into the page

use kitchen_core::UiCommand;
use kitchen_core::placeholder::ImageSource;
use kitchen_core::view::{
    BadgeView, CartPanelView, CartRowView, CategoryButtonView, MenuCardView, MenuView,
    SpecialCardView,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::dom::{append, by_id, by_id_html, create, set_style};
use crate::page;

const PANEL_STYLE: &str = "position:fixed;right:18px;bottom:70px;width:340px;max-height:70vh;\
    overflow-y:auto;background:#fff;box-shadow:0 12px 40px rgba(0,0,0,0.12);border-radius:12px;\
    z-index:1200;padding:12px;display:none";
const FLOATING_STYLE: &str = "position:fixed;right:18px;bottom:18px;z-index:1200;background:#c2410c;\
    color:#fff;border:none;padding:10px 14px;border-radius:28px;cursor:pointer;\
    box-shadow:0 6px 20px rgba(0,0,0,0.12)";
const PANEL_MARKUP: &str = r#"
  <div style="display:flex;justify-content:space-between;align-items:center;margin-bottom:8px">
    <strong>Your Cart</strong>
    <div>
      <button id="clear-cart" style="margin-right:8px;background:#eee;border:none;padding:6px;border-radius:6px;cursor:pointer">Clear</button>
      <button id="close-cart" style="background:#eee;border:none;padding:6px;border-radius:6px;cursor:pointer">Close</button>
    </div>
  </div>
  <div id="cart-items"></div>
  <div id="cart-summary" style="margin-top:10px"></div>
  <div style="margin-top:10px;display:flex;gap:8px">
    <button id="checkout-btn" style="flex:1;background:#c2410c;color:white;border:none;padding:10px;border-radius:8px;cursor:pointer">Checkout</button>
    <button id="view-orders" style="background:#f3f4f6;border:none;padding:10px;border-radius:8px;cursor:pointer">Orders</button>
  </div>
"#;

/// Floating button and cart panel, unless the markup already has them
pub(super) fn ensure_cart_chrome(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    if by_id(document, page::FLOATING_CART).is_none()
        && let Some(btn) = create(document, "button", None, Some("Cart ("))
    {
        btn.set_id(page::FLOATING_CART);
        set_style(&btn, FLOATING_STYLE);
        if let Some(count) = create(document, "span", None, Some("0")) {
            count.set_id(page::CART_COUNT);
            append(&btn, &count);
        }
        let _ = btn.append_with_str_1(")");
        let _ = body.append_child(&btn);
    }
    if by_id(document, page::CART_PANEL).is_none()
        && let Some(panel) = create(document, "aside", None, None)
    {
        panel.set_id(page::CART_PANEL);
        set_style(&panel, PANEL_STYLE);
        panel.set_inner_html(PANEL_MARKUP);
        let _ = body.append_child(&panel);
    }
}

fn set_command(el: &Element, command: &UiCommand) {
    if let Some((action, value)) = page::command_attrs(command) {
        let _ = el.set_attribute(page::ACTION_ATTR, action);
        let _ = el.set_attribute(page::VALUE_ATTR, &value);
    }
}

fn button(document: &Document, class: &str, label: &str, command: &UiCommand) -> Option<Element> {
    let btn = create(document, "button", Some(class), Some(label))?;
    set_command(&btn, command);
    Some(btn)
}

/// `<img>` whose failure is handled by the page-wide error listener
fn image(document: &Document, source: &ImageSource) -> Option<Element> {
    let img = document.create_element("img").ok()?;
    let _ = img.set_attribute("alt", &source.alt);
    let _ = img.set_attribute(page::FALLBACK_ATTR, &source.fallback);
    if !source.is_armed() {
        let _ = img.set_attribute(page::FALLEN_BACK_ATTR, "true");
    }
    let _ = img.set_attribute("src", &source.src);
    Some(img)
}

fn menu_card(document: &Document, card: &MenuCardView) -> Option<Element> {
    let article = create(document, "article", Some("menu-card"), None)?;
    append(&article, &image(document, &card.image)?);

    let right = create(document, "div", None, None)?;
    set_style(&right, "flex:1");
    let title = create(document, "h4", None, Some(&card.name))?;
    let price = create(document, "small", None, Some(&card.price_label))?;
    set_style(&price, "float:right;font-weight:600");
    append(&title, &price);
    append(&right, &title);
    append(&right, &create(document, "p", None, Some(&card.description))?);

    let actions = create(document, "div", None, None)?;
    set_style(&actions, "margin-top:8px");
    let add = button(document, "mini", &card.add_label, &card.add)?;
    add.set_id(&page::add_button_id(card.item_id));
    append(&actions, &add);
    let order = button(document, "mini primary", "Order", &card.order)?;
    set_style(&order, "margin-left:8px");
    append(&actions, &order);
    append(&right, &actions);

    append(&article, &right);
    Some(article)
}

pub(super) fn menu(document: &Document, view: &MenuView) {
    let Some(grid) = by_id(document, page::MENU_GRID) else {
        return;
    };
    grid.set_inner_html("");
    for card in &view.cards {
        if let Some(el) = menu_card(document, card) {
            append(&grid, &el);
        }
    }
}

/// Only the Add/Qty label of one card
pub(super) fn menu_card_label(document: &Document, card: &MenuCardView) {
    if let Some(btn) = by_id(document, &page::add_button_id(card.item_id)) {
        btn.set_text_content(Some(&card.add_label));
    }
}

pub(super) fn category_buttons(document: &Document, views: &[CategoryButtonView]) {
    let Ok(buttons) = document.query_selector_all(page::CATEGORY_BUTTONS) else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(el) = buttons
            .item(i)
            .and_then(|n| n.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let cat = el.get_attribute(page::CATEGORY_ATTR).unwrap_or_default();
        let active = views
            .iter()
            .any(|v| v.active && v.filter.as_str().eq_ignore_ascii_case(cat.trim()));
        let _ = el.class_list().toggle_with_force("active", active);
    }
}

fn special_card(document: &Document, card: &SpecialCardView) -> Option<Element> {
    let wrap = create(document, "div", Some("special-card"), None)?;
    append(&wrap, &image(document, &card.image)?);

    let body = create(document, "div", None, None)?;
    set_style(&body, "padding:12px");
    let title = create(document, "h4", None, Some(&card.title))?;
    set_style(&title, "margin:0");
    let price = create(document, "p", None, Some(&card.price_label))?;
    set_style(&price, "color:#6b7280;margin:6px 0 0");
    append(&body, &title);
    append(&body, &price);
    append(&wrap, &body);

    let actions = create(document, "div", None, None)?;
    set_style(&actions, "padding:12px 12px 18px");
    let order = button(document, "mini", "Order", &card.order)?;
    order.set_id(&format!("special-order-{}", card.id));
    append(&actions, &order);
    append(&wrap, &actions);
    Some(wrap)
}

pub(super) fn specials(document: &Document, cards: &[SpecialCardView]) {
    let Some(grid) = by_id(document, page::SPECIALS_GRID) else {
        return;
    };
    grid.set_inner_html("");
    for card in cards {
        if let Some(el) = special_card(document, card) {
            append(&grid, &el);
        }
    }
}

fn cart_row(document: &Document, row: &CartRowView) -> Option<Element> {
    let el = create(document, "div", None, None)?;
    set_style(&el, "display:flex;gap:8px;align-items:center;padding:8px 0");

    let info = create(document, "div", None, None)?;
    set_style(&info, "flex:1");
    let name = create(document, "div", None, Some(&row.name))?;
    set_style(&name, "font-weight:600");
    let detail = create(document, "div", None, Some(&row.detail_label))?;
    set_style(&detail, "color:#6b7280;font-size:0.9rem");
    append(&info, &name);
    append(&info, &detail);
    append(&el, &info);

    let controls = create(document, "div", None, None)?;
    set_style(&controls, "display:flex;flex-direction:column;gap:6px");
    for (class, label, command, bg) in [
        ("cart-plus", "+", &row.increment, "#e6f0ff"),
        ("cart-minus", "-", &row.decrement, "#ffecec"),
        ("cart-remove", "Remove", &row.remove, "#f3f4f6"),
    ] {
        let btn = button(document, class, label, command)?;
        set_style(
            &btn,
            &format!("padding:6px;border-radius:6px;border:none;background:{bg};cursor:pointer"),
        );
        append(&controls, &btn);
    }
    append(&el, &controls);
    Some(el)
}

pub(super) fn cart_panel(document: &Document, view: &CartPanelView) {
    let (Some(items), Some(summary)) = (
        by_id(document, page::CART_ITEMS),
        by_id(document, page::CART_SUMMARY),
    ) else {
        return;
    };
    items.set_inner_html("");
    summary.set_inner_html("");
    match view {
        CartPanelView::Empty { message } => {
            if let Some(el) = create(document, "div", None, Some(message)) {
                set_style(&el, "padding:12px;color:#6b7280");
                append(&items, &el);
            }
        }
        CartPanelView::Filled { rows, total_label } => {
            for row in rows {
                if let Some(el) = cart_row(document, row) {
                    append(&items, &el);
                }
            }
            if let Some(total) = create(document, "div", None, Some(&format!("Total: {total_label}")))
            {
                set_style(&total, "font-weight:700");
                append(&summary, &total);
            }
        }
    }
}

pub(super) fn panel_visibility(document: &Document, open: bool) {
    if let Some(panel) = by_id_html(document, page::CART_PANEL) {
        let _ = panel
            .style()
            .set_property("display", if open { "block" } else { "none" });
    }
}

pub(super) fn badge(document: &Document, badge: &BadgeView) {
    if let Some(count) = by_id(document, page::CART_COUNT) {
        count.set_text_content(Some(&badge.count.to_string()));
    }
}
