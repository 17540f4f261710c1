//! Interactive storefront session.
//!
//! Reads one command per line, applies it to the [`ShopState`] and prints the
//! affected part of the page. Each line runs to completion before the next
//! one is read; errors in a command are printed and the session continues.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::Utc;
use sebastian_clothes_core::{CatalogQuery, CheckoutOutcome, LineId, ProductId, Size, SortMode};

use crate::error::{CommandError, Result};
use crate::render;
use crate::state::ShopState;

const HELP: &str = "\
Commands:
  list                      show the listing
  search <text>             filter by name (no text clears the search)
  size <XS|S|M|L|XL|any>    filter by size
  sort <popular|price-asc|price-desc>
  more                      reveal more of the listing
  view <id>                 quick view of a product
  close                     close the quick view and the cart
  add <id> <size>           add to cart
  qty <line> <+n|-n>        change a cart line quantity
  remove <line>             remove a cart line
  cart                      show the cart
  fav <id>                  toggle favorite
  favs                      list favorites
  recent                    recently viewed
  menu                      toggle the menu
  theme                     toggle light/dark theme
  countdown                 time left in the promotion
  checkout                  start checkout
  help                      this text
  quit                      leave the shop
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    List,
    Search(String),
    Size(Option<Size>),
    Sort(SortMode),
    More,
    View(ProductId),
    Close,
    Add(ProductId, Size),
    Quantity(LineId, i64),
    Remove(LineId),
    Cart,
    Favorite(ProductId),
    Favorites,
    Recent,
    Menu,
    Theme,
    Countdown,
    Checkout,
    Help,
    Quit,
}

impl FromStr for ShopCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let command = match word.to_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "search" => Self::Search(rest.to_string()),
            "size" => match args.next() {
                None => return Err(CommandError::Usage("size <XS|S|M|L|XL|any>")),
                Some(label) if label.eq_ignore_ascii_case("any") => Self::Size(None),
                Some(label) => Self::Size(Some(label.parse()?)),
            },
            "sort" => {
                let mode = args
                    .next()
                    .ok_or(CommandError::Usage("sort <popular|price-asc|price-desc>"))?;
                Self::Sort(mode.parse().map_err(CommandError::InvalidArgument)?)
            }
            "more" => Self::More,
            "view" => Self::View(ProductId::new(
                args.next().ok_or(CommandError::Usage("view <id>"))?,
            )),
            "close" => Self::Close,
            "add" => {
                let (Some(id), Some(size)) = (args.next(), args.next()) else {
                    return Err(CommandError::Usage("add <id> <size>"));
                };
                Self::Add(ProductId::new(id), size.parse()?)
            }
            "qty" => {
                let (Some(line), Some(delta)) = (args.next(), args.next()) else {
                    return Err(CommandError::Usage("qty <line> <+n|-n>"));
                };
                let delta = delta
                    .parse()
                    .map_err(|_| CommandError::InvalidNumber(delta.to_string()))?;
                Self::Quantity(LineId::new(line), delta)
            }
            "remove" | "rm" => Self::Remove(LineId::new(
                args.next().ok_or(CommandError::Usage("remove <line>"))?,
            )),
            "cart" => Self::Cart,
            "fav" => Self::Favorite(ProductId::new(
                args.next().ok_or(CommandError::Usage("fav <id>"))?,
            )),
            "favs" => Self::Favorites,
            "recent" => Self::Recent,
            "menu" => Self::Menu,
            "theme" => Self::Theme,
            "countdown" => Self::Countdown,
            "checkout" => Self::Checkout,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// Apply one command to the state.
///
/// # Errors
///
/// Returns a [`CommandError`] for unknown products, sizes a product is not
/// made in, and refused checkouts.
pub fn execute(
    state: &mut ShopState,
    command: ShopCommand,
) -> std::result::Result<Reply, CommandError> {
    let text = match command {
        ShopCommand::List => listing(state),
        ShopCommand::Search(text) => {
            state.set_search(&text);
            listing(state)
        }
        ShopCommand::Size(size) => {
            state.set_size(size);
            listing(state)
        }
        ShopCommand::Sort(sort) => {
            state.set_sort(sort);
            listing(state)
        }
        ShopCommand::More => {
            if state.reveal_more() {
                listing(state)
            } else {
                "Everything is already shown.\n".to_string()
            }
        }
        ShopCommand::View(id) => {
            let image = state.open_quick_view(&id)?;
            let product = state.product(&id)?;
            let favorite = state.session().favorites().contains(&id);
            render::product_detail(product, &image, favorite)
        }
        ShopCommand::Close => {
            state.close_quick_view();
            state.set_cart_open(false);
            "Closed.\n".to_string()
        }
        ShopCommand::Add(id, size) => {
            let line = state.add_to_cart(&id, size)?;
            let quantity = state
                .session()
                .cart()
                .get(&line)
                .map_or(0, |l| l.quantity);
            format!("Added {line} (quantity {quantity}).\n{}", render::cart(state.session()))
        }
        ShopCommand::Quantity(line, delta) => match state.change_quantity(&line, delta) {
            Some(_) => render::cart(state.session()),
            None => format!("No cart line {line}.\n"),
        },
        ShopCommand::Remove(line) => {
            if state.remove_line(&line) {
                render::cart(state.session())
            } else {
                format!("No cart line {line}.\n")
            }
        }
        ShopCommand::Cart => {
            state.set_cart_open(true);
            render::cart(state.session())
        }
        ShopCommand::Favorite(id) => {
            let favorite = state.toggle_favorite(&id)?;
            if favorite {
                format!("♥ {id} added to favorites.\n")
            } else {
                format!("{id} removed from favorites.\n")
            }
        }
        ShopCommand::Favorites => {
            let favorites = state.session().favorites();
            if favorites.is_empty() {
                "No favorites yet.\n".to_string()
            } else {
                favorites
                    .iter()
                    .filter_map(|id| state.catalog().get(id))
                    .fold(String::new(), |mut out, p| {
                        let _ = writeln!(out, "{}", render::product_row(p, true));
                        out
                    })
            }
        }
        ShopCommand::Recent => render::recently_viewed(state.session().recently_viewed(), |id| {
            state
                .catalog()
                .get(&ProductId::new(id))
                .map(|p| p.name.clone())
        }),
        ShopCommand::Menu => {
            if state.toggle_menu() {
                "Menu: Nowości | Sukienki | Wyprzedaż\n".to_string()
            } else {
                "Menu closed.\n".to_string()
            }
        }
        ShopCommand::Theme => format!("Theme: {}\n", state.toggle_theme()),
        ShopCommand::Countdown => format!("{}\n", state.countdown(Utc::now())),
        ShopCommand::Checkout => match state.checkout()? {
            CheckoutOutcome::Redirect { url } => format!("Continue to payment: {url}\n"),
            CheckoutOutcome::Completed { reference } => format!("Order {reference} placed.\n"),
            CheckoutOutcome::Demo { reference, notice } => {
                format!("{notice}\nReference: {reference}\n")
            }
        },
        ShopCommand::Help => HELP.to_string(),
        ShopCommand::Quit => return Ok(Reply::Quit),
    };
    Ok(Reply::Text(text))
}

/// Run the session until `quit` or end of input.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run(state: &mut ShopState, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(out, "sebastian clothes - sukienki, które podkreślają Twój styl")?;
    writeln!(out, "{}", state.countdown(Utc::now()))?;
    out.write_all(listing(state).as_bytes())?;
    writeln!(out, "Type `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = line
            .parse::<ShopCommand>()
            .and_then(|command| execute(state, command));
        match reply {
            Ok(Reply::Quit) => break,
            Ok(Reply::Text(text)) => out.write_all(text.as_bytes())?,
            Err(e) => {
                tracing::debug!(error = %e, input = %line, "command rejected");
                writeln!(out, "error: {e}")?;
            }
        }
        out.flush()?;
    }

    let summary = state.session().summary();
    tracing::info!(
        lines = summary.line_count,
        subtotal = summary.subtotal.minor(),
        "session ended"
    );
    writeln!(out, "Bye!")?;
    Ok(())
}

fn listing(state: &ShopState) -> String {
    let (visible, hidden) = state.visible_listing();
    let query = state.query();
    let mut out = String::new();
    if *query != CatalogQuery::default() {
        let size = query.size.map_or("any", Size::as_str);
        let _ = writeln!(
            out,
            "Filters: search {:?}, size {size}, sort {}",
            query.search, query.sort
        );
    }
    out.push_str(&render::listing(&visible, state.session().favorites(), hidden));
    out
}
