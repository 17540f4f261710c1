//! The built-in dress catalog.

use crate::types::{Price, ProductId, Size};

use super::Product;

/// Hero image of the storefront, also used when a product image fails.
pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1515378791036-0648a3ef77b2?q=80&w=1600&auto=format&fit=crop";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

#[allow(clippy::too_many_arguments)]
fn dress(
    id: &str,
    name: &str,
    price: u64,
    old_price: Option<u64>,
    (rating, reviews): (f64, u32),
    sizes: &[Size],
    colors: &[&str],
    image: &str,
    tags: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_minor(price),
        old_price: old_price.map(Price::from_minor),
        rating,
        reviews,
        sizes: sizes.to_vec(),
        colors: strings(colors),
        category: "Sukienki".to_owned(),
        image: image.to_owned(),
        tags: strings(tags),
    }
}

/// The ten dresses of the demo shop, in "popular" order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    use Size::{L, M, S, XL, XS};

    vec![
        dress(
            "d1",
            "Sukienka Mila – satynowa midi",
            21_900,
            None,
            (4.7, 128),
            &[XS, S, M, L],
            &["róż pudrowy", "czarna", "szampańska"],
            "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?q=80&w=1600&auto=format&fit=crop",
            &["nowość", "bestseller"],
        ),
        dress(
            "d2",
            "Sukienka Lea – kopertowa maxi",
            28_900,
            None,
            (4.8, 203),
            &[S, M, L, XL],
            &["butelkowa zieleń", "granat"],
            "https://images.unsplash.com/photo-1515378960530-7c0da6231fb1?q=80&w=1600&auto=format&fit=crop",
            &["wieczorowa"],
        ),
        dress(
            "d3",
            "Sukienka Nola – lniana mini",
            17_900,
            Some(22_900),
            (4.5, 76),
            &[XS, S, M],
            &["beż", "biała"],
            "https://images.unsplash.com/photo-1542060748-10c28b62716c?q=80&w=1600&auto=format&fit=crop",
            &["letnia", "eko"],
        ),
        dress(
            "d4",
            "Sukienka Vera – ołówkowa midi",
            24_900,
            None,
            (4.6, 91),
            &[S, M, L],
            &["czerwona", "czarna"],
            "https://images.unsplash.com/photo-1520975922215-c65b6c98a4d0?q=80&w=1600&auto=format&fit=crop",
            &["do pracy"],
        ),
        dress(
            "d5",
            "Sukienka Aida – tiulowa midi",
            31_900,
            None,
            (4.9, 54),
            &[S, M, L],
            &["pudrowy róż"],
            "https://images.unsplash.com/photo-1520975922215-223e0a9991b9?q=80&w=1600&auto=format&fit=crop",
            &["na wesele"],
        ),
        dress(
            "d6",
            "Sukienka Zoja – plisowana midi",
            19_900,
            Some(25_900),
            (4.4, 62),
            &[XS, S, M, L, XL],
            &["oliwkowa", "kremowa"],
            "https://images.unsplash.com/photo-1595777457583-95e059d581b8?q=80&w=1600&auto=format&fit=crop",
            &["wyprzedaż"],
        ),
        dress(
            "d7",
            "Sukienka Iga – koszulowa mini",
            15_900,
            None,
            (4.3, 41),
            &[XS, S, M],
            &["błękitna", "biała"],
            "https://images.unsplash.com/photo-1572804013309-59a88b7e92f1?q=80&w=1600&auto=format&fit=crop",
            &["letnia"],
        ),
        dress(
            "d8",
            "Sukienka Roma – welurowa maxi",
            34_900,
            None,
            (4.8, 37),
            &[M, L, XL],
            &["bordowa", "szmaragdowa"],
            "https://plus.unsplash.com/premium_photo-1673758905770-a62f4309c43c?q=80&w=1600&auto=format&fit=crop",
            &["wieczorowa", "nowość"],
        ),
        dress(
            "d9",
            "Sukienka Hana – dzianinowa midi",
            22_900,
            Some(27_900),
            (4.6, 88),
            &[S, M, L, XL],
            &["grafitowa", "camel"],
            "https://images.unsplash.com/photo-1585487000160-6ebcfceb0d03?q=80&w=1600&auto=format&fit=crop",
            &["jesień"],
        ),
        dress(
            "d10",
            "Sukienka Tosia – bawełniana mini",
            12_900,
            None,
            (4.2, 29),
            &[XS, S, M, L],
            &["żółta", "miętowa"],
            "https://images.unsplash.com/photo-1496747611176-843222e1e57c?q=80&w=1600&auto=format&fit=crop",
            &["letnia", "eko"],
        ),
    ]
}
