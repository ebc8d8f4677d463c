//! Normalization from raw WooCommerce records to the `lofa_core` shapes.
//!
//! Pure functions: no I/O, no extra lookups. Anything a record does not
//! carry is left at its zero value rather than guessed.

use lofa_core::{
    CategoryImage, NormalizedCategory, NormalizedCategoryRef, NormalizedImage, NormalizedProduct,
};

use crate::types::{RawCategory, RawCategoryRef, RawImage, RawProduct};

/// Normalizes a raw [`RawProduct`] into a [`NormalizedProduct`].
///
/// The first image in vendor order becomes the primary image. WooCommerce's
/// REST payload has no separate featured-image flag, so position is the only
/// signal available.
#[must_use]
pub fn normalize_product(product: RawProduct) -> NormalizedProduct {
    let price = parse_decimal(&product.price);
    let regular_price = parse_decimal(&product.regular_price);
    let sale_price = parse_sale_price(&product.sale_price);

    if let Some(sale) = sale_price {
        if sale > regular_price {
            tracing::debug!(
                product_id = product.id,
                sale,
                regular_price,
                "sale price exceeds regular price"
            );
        }
    }

    let images = product
        .images
        .into_iter()
        .enumerate()
        .map(|(idx, image)| normalize_image(image, idx == 0))
        .collect();

    let categories = product
        .categories
        .into_iter()
        .map(normalize_category_ref)
        .collect();

    NormalizedProduct {
        id: product.id.to_string(),
        name: product.name,
        slug: product.slug,
        description: product.description,
        short_description: product.short_description,
        price,
        regular_price,
        sale_price,
        images,
        categories,
        stock: product.stock_quantity.unwrap_or(0),
        stock_status: product.stock_status,
        rating: parse_decimal(&product.average_rating),
        rating_count: product.rating_count,
        total_sales: product.total_sales,
        is_featured: product.featured,
        is_on_sale: product.on_sale,
        created_at: product.date_created,
        updated_at: product.date_modified,
    }
}

/// Normalizes a raw [`RawCategory`] into a [`NormalizedCategory`].
#[must_use]
pub fn normalize_category(category: RawCategory) -> NormalizedCategory {
    NormalizedCategory {
        id: category.id.to_string(),
        name: category.name,
        slug: category.slug,
        description: category.description,
        count: category.count,
        image: category.image.map(|image| CategoryImage {
            id: image.id.to_string(),
            alt: alt_text(image.alt, image.name),
            url: image.src,
        }),
    }
}

fn normalize_image(image: RawImage, is_primary: bool) -> NormalizedImage {
    NormalizedImage {
        id: image.id.to_string(),
        alt: alt_text(image.alt, image.name),
        url: image.src,
        is_primary,
    }
}

fn normalize_category_ref(category: RawCategoryRef) -> NormalizedCategoryRef {
    NormalizedCategoryRef {
        id: category.id.to_string(),
        name: category.name,
        slug: category.slug,
    }
}

/// Uses the image's `alt` text, or its file `name` when `alt` is empty.
/// Whitespace-only alt text is kept as the store sent it.
fn alt_text(alt: String, name: String) -> String {
    if alt.is_empty() {
        name
    } else {
        alt
    }
}

/// Parses a WooCommerce decimal string (`"19.99"`). Empty or unparseable
/// input yields `0.0`; the result is always finite.
#[must_use]
pub fn parse_decimal(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parses `sale_price`. The empty string means "no sale" and yields `None`,
/// as does any value that is not a finite number.
#[must_use]
pub fn parse_sale_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
