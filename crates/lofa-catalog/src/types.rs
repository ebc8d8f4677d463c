//! WooCommerce REST API (`wc/v3`) response types.
//!
//! ## Observed shape
//!
//! ### Prices
//! `price`, `regular_price` and `sale_price` are **decimal strings**, not
//! numbers: `"19.99"`. `sale_price` is the empty string `""` (not `null`)
//! when the product has no active sale. Variable products may report an
//! empty `price` until a variation is priced.
//!
//! ### Stock
//! `stock_quantity` is `null` unless the product has "manage stock" enabled.
//! `stock_status` is one of `"instock"`, `"outofstock"`, `"onbackorder"`.
//!
//! ### Ratings and sales
//! `average_rating` is a decimal string (`"4.50"`, `"0"`, or `""`).
//! `rating_count` and `total_sales` are integers on current stores; older
//! plugin versions emit `total_sales` as a numeric string, so both are
//! accepted.
//!
//! ### Category image
//! `image` on a category is `null` when no thumbnail is set.
//!
//! Every non-id field is `#[serde(default)]` so a sparse record still
//! deserializes; missing values stay at their zero value. Some plugins emit
//! `null` instead of omitting a field (`"sale_price": null`,
//! `"date_created": null`), so `null` also maps to the zero value.

use serde::{Deserialize, Deserializer};

/// A product from `GET /wp-json/wc/v3/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,

    /// Publication status: `"publish"`, `"draft"`, `"pending"`, `"private"`.
    #[serde(default)]
    pub status: Option<String>,

    /// Raw HTML long description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub short_description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub regular_price: String,

    /// Empty string when the product is not on sale.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sale_price: String,

    /// Image gallery in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<RawImage>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<RawCategoryRef>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_status: String,

    /// `null` when the store does not track stock for this product.
    #[serde(default)]
    pub stock_quantity: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub average_rating: String,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub rating_count: u64,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_sales: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub on_sale: bool,

    /// Site-local ISO 8601 timestamp, e.g. `"2024-03-01T10:00:00"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_created: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub date_modified: String,
}

impl RawProduct {
    /// Returns `true` unless the record explicitly carries a non-publish status.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status.as_deref().is_none_or(|s| s == "publish")
    }
}

/// An image attached to a product or category.
#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub src: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alt: String,
}

/// The category summary embedded in a product record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategoryRef {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

/// A category from `GET /wp-json/wc/v3/products/categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Number of published products in the category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default)]
    pub image: Option<RawImage>,
}

/// Deserializes `null` as `T::default()`, so one null field cannot fail a
/// whole page of records.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts an unsigned integer encoded either as a JSON number or as a
/// numeric string. `null` and unparseable strings become `0`.
fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(u64),
        Str(String),
        Null(()),
    }

    Ok(match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(n) => n,
        NumOrString::Str(s) => s.trim().parse().unwrap_or(0),
        NumOrString::Null(()) => 0,
    })
}
