//! Text rendering of catalog and session state.
//!
//! Everything here is a pure function returning a `String`; callers decide
//! where it is written.

use std::fmt::Write as _;

use sebastian_clothes_core::{
    CartSummary, DisplayImage, Favorites, Product, RecentlyViewed, Session, Size,
};

/// Width of the free-shipping progress bar, in characters.
const PROGRESS_BAR_WIDTH: usize = 20;

/// One listing row.
///
/// ```text
/// ♥ d3   Sukienka Nola – lniana mini        179,00 zł  229,00 zł -22%  ★ 4.5 (76)  XS S M
/// ```
#[must_use]
pub fn product_row(product: &Product, favorite: bool) -> String {
    let heart = if favorite { '♥' } else { ' ' };
    let mut row = format!(
        "{heart} {:<4} {:<36} {:>12}",
        product.id,
        product.name,
        product.price.to_string()
    );

    if let (Some(old), Some(percent)) = (product.old_price, product.discount_percent()) {
        let _ = write!(row, "  {old} -{percent}%");
    }

    let _ = write!(
        row,
        "  ★ {:.1} ({})  {}",
        product.rating,
        product.reviews,
        sizes(&product.sizes)
    );
    row
}

/// The listing, one row per product, with a hint when rows are hidden.
#[must_use]
pub fn listing(products: &[&Product], favorites: &Favorites, hidden: usize) -> String {
    if products.is_empty() {
        return "No dresses match your filters.\n".to_string();
    }

    let mut out = String::new();
    for product in products {
        out.push_str(&product_row(product, favorites.contains(&product.id)));
        out.push('\n');
    }
    if hidden > 0 {
        let _ = writeln!(out, "… {hidden} more (type `more`)");
    }
    out
}

/// Quick view details of one product.
#[must_use]
pub fn product_detail(product: &Product, image: &DisplayImage, favorite: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}{}", product.name, if favorite { "  ♥" } else { "" });
    let _ = write!(out, "  price:    {}", product.price);
    if let (Some(old), Some(percent)) = (product.old_price, product.discount_percent()) {
        let _ = write!(out, " (was {old}, -{percent}%)");
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "  rating:   ★ {:.1} from {} reviews",
        product.rating, product.reviews
    );
    let _ = writeln!(out, "  sizes:    {}", sizes(&product.sizes));
    let _ = writeln!(out, "  colors:   {}", product.colors.join(", "));
    let _ = writeln!(out, "  category: {}", product.category);
    if !product.tags.is_empty() {
        let _ = writeln!(out, "  tags:     {}", product.tags.join(", "));
    }
    let _ = writeln!(
        out,
        "  image:    {}{}",
        image.src,
        if image.is_fallback { " (fallback)" } else { "" }
    );
    out
}

/// Cart drawer: lines, subtotal and free-shipping progress.
#[must_use]
pub fn cart(session: &Session) -> String {
    let cart = session.cart();
    if cart.is_empty() {
        return "Your cart is empty.\n".to_string();
    }

    let mut out = String::new();
    for line in cart.lines() {
        let _ = writeln!(
            out,
            "{:<8} {:<44} {:>3} × {:>12} = {:>12}",
            line.id.as_str(),
            line.name,
            line.quantity,
            line.price.to_string(),
            line.line_total().to_string()
        );
    }
    out.push_str(&summary(&session.summary()));
    out
}

/// Subtotal and shipping lines.
#[must_use]
pub fn summary(summary: &CartSummary) -> String {
    let mut out = format!(
        "Items: {}   Subtotal: {}\n",
        summary.total_quantity, summary.subtotal
    );
    let bar = progress_bar(summary.shipping_progress_percent);
    if summary.free_shipping {
        let _ = writeln!(out, "{bar} Free shipping!");
    } else {
        let _ = writeln!(
            out,
            "{bar} {} more for free shipping",
            summary.shipping_remaining
        );
    }
    out
}

/// Recently viewed products, most recent first.
#[must_use]
pub fn recently_viewed(recent: &RecentlyViewed, lookup: impl Fn(&str) -> Option<String>) -> String {
    if recent.is_empty() {
        return "Nothing viewed yet.\n".to_string();
    }
    recent.iter().fold(String::new(), |mut out, id| {
        let name = lookup(id.as_str()).unwrap_or_default();
        let _ = writeln!(out, "{id:<4} {name}");
        out
    })
}

fn sizes(sizes: &[Size]) -> String {
    sizes
        .iter()
        .copied()
        .map(Size::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * PROGRESS_BAR_WIDTH / 100;
    format!(
        "[{}{}] {percent:>3}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}
