//! Command line driver
//!
//! Runs the storefront against a JSON file under `WORK_DIR` so the cart,
//! reservations and order history survive between invocations, the same
//! way the page keeps them in local storage.

use std::io::Write;

use clap::{Parser, Subcommand};
use shared::models::{CategoryFilter, ContactForm, LineKey, ReservationForm};

use crate::command::{Effect, UiCommand};
use crate::forms::{FormOutcome, FormStatus};
use crate::storefront::Storefront;
use crate::view::CartPanelView;

#[derive(Parser, Debug)]
#[command(name = "moms-kitchen", author, version, about = "Mom's Kitchen menu, cart and bookings", long_about = None)]
pub struct Cli {
    /// Directory holding the local storage file
    #[arg(long, env = "WORK_DIR", value_name = "DIR")]
    pub work_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List menu items
    Menu {
        /// all, indian, chinese, desserts or beverages
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },
    /// List chef's specials
    Specials,
    /// Add one unit of a menu item
    Add { id: i64 },
    /// Make sure a menu item is in the cart, then go to the order page
    Order { id: i64 },
    /// Add one unit of a special
    Special { id: String },
    /// Increase a cart line (`1`, `special-s1`)
    Inc { key: LineKey },
    /// Decrease a cart line; 0 removes it
    Dec { key: LineKey },
    /// Drop a cart line
    Remove { key: LineKey },
    /// Show the cart
    Cart,
    /// Empty the cart
    Clear {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Count past orders
    Orders,
    /// Book a table
    Reserve {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        time: String,
        #[arg(long)]
        people: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Send a message
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

/// Execute one subcommand, writing human-readable output to `out`
pub fn run(front: &Storefront, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Menu { category } => {
            front.dispatch(UiCommand::SelectCategory(category))?;
            print_menu(front, out)
        }
        Command::Specials => {
            for card in front.specials_view() {
                writeln!(out, "special-{:<4} {:<28} {}", card.id, card.title, card.price_label)?;
            }
            Ok(())
        }
        Command::Add { id } => dispatch(front, UiCommand::AddToCart(id), false, out),
        Command::Order { id } => dispatch(front, UiCommand::OrderNow(id), false, out),
        Command::Special { id } => dispatch(front, UiCommand::OrderSpecial(id), false, out),
        Command::Inc { key } => dispatch(front, UiCommand::Increment(key), false, out),
        Command::Dec { key } => dispatch(front, UiCommand::Decrement(key), false, out),
        Command::Remove { key } => dispatch(front, UiCommand::Remove(key), false, out),
        Command::Cart => print_cart(front, out),
        Command::Clear { yes } => dispatch(front, UiCommand::ClearCart, yes, out),
        Command::Orders => dispatch(front, UiCommand::ViewOrders, false, out),
        Command::Reserve {
            name,
            date,
            time,
            people,
            phone,
        } => {
            let form = ReservationForm {
                name,
                date,
                time,
                people,
                phone,
            };
            print_outcome(&front.submit_reservation(&form), out)
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            let form = ContactForm {
                name,
                email,
                message,
            };
            print_outcome(&front.submit_contact(&form), out)
        }
    }
}

/// Dispatch and carry out the effect; `confirmed` answers a confirmation prompt
fn dispatch(
    front: &Storefront,
    command: UiCommand,
    confirmed: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let effect = front.dispatch(command.clone()).map_err(|e| {
        let context = format!("{command:?} failed ({} error {})", e.code.category().name(), e.code);
        anyhow::Error::new(e).context(context)
    })?;
    match effect {
        Effect::Navigate(page) => {
            writeln!(out, "{}", front.badge().label)?;
            writeln!(out, "Continue at {page}")?;
        }
        Effect::Alert(message) => writeln!(out, "{message}")?,
        Effect::Confirm {
            message,
            on_confirm,
        } => {
            if confirmed {
                return dispatch(front, *on_confirm, false, out);
            }
            writeln!(out, "{message} Re-run with --yes to confirm.")?;
        }
        Effect::None | Effect::MenuFilterChanged(_) | Effect::PanelVisibility(_) => {
            writeln!(out, "{}", front.badge().label)?;
        }
    }
    Ok(())
}

fn print_menu(front: &Storefront, out: &mut impl Write) -> anyhow::Result<()> {
    let view = front.menu_view();
    writeln!(out, "Menu: {}", view.filter)?;
    for card in view.cards {
        writeln!(
            out,
            "{:>3}  {:<22} {:>6}  [{}]  {}",
            card.item_id, card.name, card.price_label, card.add_label, card.description
        )?;
    }
    Ok(())
}

fn print_cart(front: &Storefront, out: &mut impl Write) -> anyhow::Result<()> {
    match front.cart_panel_view() {
        CartPanelView::Empty { message } => writeln!(out, "{message}")?,
        CartPanelView::Filled { rows, total_label } => {
            for row in rows {
                writeln!(out, "{:<12} {:<28} {}", row.key.to_string(), row.name, row.detail_label)?;
            }
            writeln!(out, "Total: {total_label}")?;
        }
    }
    Ok(())
}

fn print_outcome(outcome: &FormOutcome, out: &mut impl Write) -> anyhow::Result<()> {
    match outcome.status {
        FormStatus::Accepted => writeln!(out, "{}", outcome.message)?,
        FormStatus::Rejected => writeln!(out, "error: {}", outcome.message)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::core::Config;
    use crate::storage::MemoryStorage;

    fn run_to_string(front: &Storefront, command: Command) -> String {
        let mut out = Vec::new();
        run(front, command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn create_storefront() -> Storefront {
        Storefront::new(Config::default(), Rc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["moms-kitchen", "menu", "--category", "desserts"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Menu {
                category: "desserts".parse().unwrap()
            }
        );

        let cli = Cli::try_parse_from(["moms-kitchen", "dec", "special-s2"]).unwrap();
        assert_eq!(cli.command, Command::Dec { key: LineKey::special("s2") });

        assert!(Cli::try_parse_from(["moms-kitchen", "inc", "pizza"]).is_err());
        assert!(Cli::try_parse_from(["moms-kitchen", "menu", "-c", "snacks"]).is_err());
    }

    #[test]
    fn test_add_and_show_cart() {
        let front = create_storefront();
        assert_eq!(run_to_string(&front, Command::Add { id: 1 }), "Cart (1)\n");
        run_to_string(&front, Command::Add { id: 1 });

        let cart = run_to_string(&front, Command::Cart);
        assert!(cart.contains("₹220 × 2 = ₹440"));
        assert!(cart.ends_with("Total: ₹440\n"));
    }

    #[test]
    fn test_clear_needs_yes() {
        let front = create_storefront();
        run_to_string(&front, Command::Special { id: "s1".into() });

        let out = run_to_string(&front, Command::Clear { yes: false });
        assert!(out.starts_with("Clear cart?"));
        assert_eq!(front.badge().count, 1);

        run_to_string(&front, Command::Clear { yes: true });
        assert_eq!(run_to_string(&front, Command::Cart), "Your cart is empty.\n");
    }

    #[test]
    fn test_unknown_line_is_an_error() {
        let front = create_storefront();
        let mut out = Vec::new();
        let err = run(&front, Command::Inc { key: LineKey::Menu(3) }, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("(cart error 4001)"));

        let err = run(&front, Command::Add { id: 99 }, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("(catalog error 6001)"));
    }

    #[test]
    fn test_reserve_rejection_printed() {
        let front = create_storefront();
        let out = run_to_string(
            &front,
            Command::Reserve {
                name: "Asha".into(),
                date: "2001-01-01".into(),
                time: "18:00".into(),
                people: "2".into(),
                phone: String::new(),
            },
        );
        assert_eq!(out, "error: Please choose a future date/time.\n");
        assert_eq!(front.reservations().count(), 0);
    }
}
