//! Catalog browsing commands: `products`, `show`, `sizes`.

use std::io::Write;

use sebastian_clothes_core::{Catalog, CatalogQuery, Favorites, ImageResolver, ProductId};
use serde::Serialize;

use super::{OutputFormat, write_json};
use crate::error::{CommandError, Result};
use crate::render;

/// Print the products matching `query`.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn list(
    catalog: &Catalog,
    query: &CatalogQuery,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let products = catalog.query(query);
    tracing::info!(results = products.len(), "listing products");

    match format {
        OutputFormat::Json => write_json(out, &products),
        OutputFormat::Text => {
            out.write_all(render::listing(&products, &Favorites::default(), 0).as_bytes())?;
            Ok(())
        }
    }
}

/// JSON shape of `show`.
#[derive(Serialize)]
struct ProductDetail<'a> {
    #[serde(flatten)]
    product: &'a sebastian_clothes_core::Product,
    discount_percent: Option<u8>,
    display_image: sebastian_clothes_core::DisplayImage,
}

/// Print the quick view of one product.
///
/// # Errors
///
/// Returns [`CommandError::UnknownProduct`] if the id is unknown, or an I/O
/// error if writing fails.
pub fn show(
    catalog: &Catalog,
    images: &ImageResolver<impl sebastian_clothes_core::ImageProvider>,
    id: &ProductId,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let product = catalog
        .get(id)
        .ok_or_else(|| CommandError::UnknownProduct(id.clone()))?;
    let image = images.resolve(&product.image);

    match format {
        OutputFormat::Json => write_json(
            out,
            &ProductDetail {
                product,
                discount_percent: product.discount_percent(),
                display_image: image,
            },
        ),
        OutputFormat::Text => {
            out.write_all(render::product_detail(product, &image, false).as_bytes())?;
            Ok(())
        }
    }
}

/// Print the size filter options.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn sizes(catalog: &Catalog, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let sizes = catalog.sizes();
    match format {
        OutputFormat::Json => write_json(out, &sizes),
        OutputFormat::Text => {
            let labels: Vec<&str> = sizes.iter().map(|s| s.as_str()).collect();
            writeln!(out, "{}", labels.join(" "))?;
            Ok(())
        }
    }
}
